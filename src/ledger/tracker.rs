use uuid::Uuid;

use super::{
    book::GroupBook, catalog::Catalog, category::Category, expense::ExpenseBook, friend::Friend,
    payment::FriendPayments, payment_mode::PaymentMode, split::SplitLedger,
};
use crate::{
    config::Config,
    currency::{format_amount, parse_amount, LocaleConfig},
    errors::LedgerResult,
    fixtures,
    summary::{DashboardTotals, Insights, SummaryService},
};

/// Every record the app keeps in memory, plus the display preferences used
/// to parse and format amounts.
#[derive(Debug, Clone)]
pub struct ExpenseTracker {
    pub categories: Catalog<Category>,
    pub friends: Catalog<Friend>,
    pub payment_modes: Catalog<PaymentMode>,
    pub expenses: ExpenseBook,
    pub friend_payments: FriendPayments,
    pub groups: GroupBook,
    locale: LocaleConfig,
    self_name: String,
}

impl ExpenseTracker {
    /// An empty tracker.
    pub fn new(config: &Config) -> Self {
        Self {
            categories: Catalog::new(),
            friends: Catalog::new(),
            payment_modes: Catalog::new(),
            expenses: ExpenseBook::default(),
            friend_payments: FriendPayments::default(),
            groups: GroupBook::new(SplitLedger::from_config(config), Vec::new()),
            locale: config.locale(),
            self_name: config.self_name.clone(),
        }
    }

    /// A tracker populated with the sample records from [`fixtures`].
    pub fn seeded(config: &Config) -> LedgerResult<Self> {
        let splitter = SplitLedger::from_config(config);
        let tracker = Self {
            categories: fixtures::default_categories()?,
            friends: fixtures::sample_friends()?,
            payment_modes: fixtures::default_payment_modes()?,
            expenses: ExpenseBook::new(fixtures::sample_expenses()),
            friend_payments: FriendPayments::new(fixtures::sample_friend_payments()),
            groups: GroupBook::new(
                splitter,
                fixtures::sample_groups(&splitter, &config.self_name)?,
            ),
            locale: config.locale(),
            self_name: config.self_name.clone(),
        };
        tracing::info!(
            expenses = tracker.expenses.len(),
            groups = tracker.groups.len(),
            "seeded tracker with sample data"
        );
        Ok(tracker)
    }

    pub fn locale(&self) -> &LocaleConfig {
        &self.locale
    }

    pub fn self_name(&self) -> &str {
        &self.self_name
    }

    /// Reads free-form amount input; unreadable text counts as zero.
    pub fn parse_amount(&self, raw: &str) -> f64 {
        parse_amount(raw, &self.locale)
    }

    pub fn format_amount(&self, value: f64) -> String {
        format_amount(value, &self.locale)
    }

    pub fn my_share(&self, group_id: Uuid) -> LedgerResult<f64> {
        self.groups.my_share(group_id, &self.self_name)
    }

    pub fn dashboard(&self) -> DashboardTotals {
        SummaryService::dashboard(
            self.expenses.expenses(),
            self.friend_payments.payments(),
            self.groups.groups(),
        )
    }

    pub fn insights(&self) -> Insights {
        SummaryService::insights(
            self.expenses.expenses(),
            self.friend_payments.payments(),
            self.groups.groups(),
            &self.self_name,
        )
    }
}
