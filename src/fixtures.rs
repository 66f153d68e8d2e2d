//! Sample records used to seed a fresh tracker or a demo screen.
//!
//! Nothing here is global state: every function builds new values and the
//! caller decides where they live.

use chrono::NaiveDate;

use crate::{
    errors::LedgerResult,
    ledger::{
        Catalog, Category, Expense, Friend, FriendPayment, GroupExpense, PaymentDirection,
        PaymentMode, SplitLedger, SplitMode,
    },
};

pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Food",
    "Transportation",
    "Entertainment",
    "Shopping",
    "Bills",
    "Health",
];

pub const DEFAULT_PAYMENT_MODES: [&str; 6] = [
    "Cash",
    "Credit Card",
    "Debit Card",
    "UPI",
    "Net Banking",
    "Wallet",
];

pub const SAMPLE_FRIENDS: [&str; 4] = ["John Doe", "Sarah Smith", "Mike Johnson", "Emma Wilson"];

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn default_categories() -> LedgerResult<Catalog<Category>> {
    Catalog::from_names(DEFAULT_CATEGORIES)
}

pub fn default_payment_modes() -> LedgerResult<Catalog<PaymentMode>> {
    Catalog::from_names(DEFAULT_PAYMENT_MODES)
}

pub fn sample_friends() -> LedgerResult<Catalog<Friend>> {
    Catalog::from_names(SAMPLE_FRIENDS)
}

pub fn sample_expenses() -> Vec<Expense> {
    vec![
        Expense::new("Grocery Shopping", 1250.0, "Food", date(2025, 1, 1))
            .with_payment_mode("Credit Card"),
        Expense::new("Fuel", 800.0, "Transportation", date(2024, 12, 31)).with_payment_mode("UPI"),
        Expense::new("Movie Tickets", 600.0, "Entertainment", date(2024, 12, 30))
            .with_payment_mode("Debit Card"),
        Expense::new("Electricity Bill", 2400.0, "Bills", date(2024, 12, 29))
            .with_payment_mode("Net Banking"),
        Expense::new("Coffee", 120.0, "Food", date(2024, 12, 28)).with_payment_mode("Cash"),
    ]
}

pub fn sample_friend_payments() -> Vec<FriendPayment> {
    vec![
        FriendPayment::new("John Doe", 500.0, PaymentDirection::IOwe, date(2025, 1, 1))
            .with_description("Lunch payment")
            .with_category("Food"),
        FriendPayment::new("Sarah Smith", 800.0, PaymentDirection::IOwe, date(2024, 12, 30))
            .with_description("Movie tickets")
            .with_category("Entertainment")
            .with_settled(true),
        FriendPayment::new(
            "Mike Johnson",
            1200.0,
            PaymentDirection::OwedToMe,
            date(2024, 12, 29),
        )
        .with_description("Dinner split")
        .with_category("Food"),
        FriendPayment::new(
            "Emma Wilson",
            600.0,
            PaymentDirection::OwedToMe,
            date(2024, 12, 28),
        )
        .with_description("Travel expenses")
        .with_category("Transportation")
        .with_settled(true),
    ]
}

/// Three equal-split groups, each including the device owner as `self_name`.
pub fn sample_groups(splitter: &SplitLedger, self_name: &str) -> LedgerResult<Vec<GroupExpense>> {
    let specs: [(&str, NaiveDate, f64, &str, [&str; 3], &[&str]); 3] = [
        (
            "Team lunch",
            date(2025, 1, 1),
            2400.0,
            "UPI",
            ["John", "Sarah", "Mike"],
            &["Sarah"][..],
        ),
        (
            "Movie night",
            date(2024, 12, 30),
            1800.0,
            "Credit Card",
            ["Emma", "David", "Lisa"],
            &["Emma", "Lisa"][..],
        ),
        (
            "Weekend trip expenses",
            date(2024, 12, 28),
            12000.0,
            "Cash",
            ["Alex", "Sophie", "Tom"],
            &["Tom"][..],
        ),
    ];

    let mut groups = Vec::with_capacity(specs.len());
    for (description, day, total, payment_mode, friends, settled) in specs {
        let names = friends.into_iter().chain(std::iter::once(self_name));
        let mut group = splitter
            .create_group(description, day, total, SplitMode::Equal, names)?
            .with_payment_mode(payment_mode);
        for name in settled {
            if let Some(id) = group.member_by_name(name).map(|member| member.id) {
                splitter.toggle_settled(&mut group, id)?;
            }
        }
        groups.push(group);
    }
    Ok(groups)
}
