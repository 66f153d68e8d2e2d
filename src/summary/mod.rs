//! Dashboard and insight aggregates computed from in-memory records.

use serde::Serialize;

use crate::ledger::{
    common::names_match, Expense, FriendPayment, GroupExpense, PaymentDirection,
};

const UNSPECIFIED_LABEL: &str = "Unspecified";

/// One labelled amount, as fed to a bar chart or list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledTotal {
    pub label: String,
    pub amount: f64,
}

/// Paid versus unpaid outflow of the device owner across groups and friend
/// payments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SettlementBreakdown {
    pub paid: f64,
    pub unpaid: f64,
}

impl SettlementBreakdown {
    pub fn total(&self) -> f64 {
        self.paid + self.unpaid
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DashboardTotals {
    pub personal_expenses: f64,
    /// Unsettled money the device owner still owes friends.
    pub pending_friend_payments: f64,
    /// Unsettled money friends still owe the device owner.
    pub receivable_friend_payments: f64,
    pub group_expenses: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Insights {
    pub outflow_by_category: Vec<LabeledTotal>,
    pub inflow_by_category: Vec<LabeledTotal>,
    pub outflow_by_payment_mode: Vec<LabeledTotal>,
    pub settlement: SettlementBreakdown,
}

pub struct SummaryService;

impl SummaryService {
    /// Personal expenses plus money owed to friends, grouped by category.
    pub fn outflow_by_category(
        expenses: &[Expense],
        payments: &[FriendPayment],
    ) -> Vec<LabeledTotal> {
        let personal = expenses
            .iter()
            .map(|expense| (expense.category.as_str(), expense.amount));
        let owed = payments
            .iter()
            .filter(|payment| payment.direction == PaymentDirection::IOwe)
            .map(|payment| (payment.category.as_str(), payment.amount));
        accumulate(personal.chain(owed))
    }

    pub fn inflow_by_category(payments: &[FriendPayment]) -> Vec<LabeledTotal> {
        accumulate(
            payments
                .iter()
                .filter(|payment| payment.direction == PaymentDirection::OwedToMe)
                .map(|payment| (payment.category.as_str(), payment.amount)),
        )
    }

    pub fn outflow_by_payment_mode(expenses: &[Expense]) -> Vec<LabeledTotal> {
        accumulate(expenses.iter().map(|expense| {
            (
                expense.payment_mode.as_deref().unwrap_or_default(),
                expense.amount,
            )
        }))
    }

    /// Only the `self_name` member's share of each group is counted; other
    /// members' shares are their outflow, not the owner's. Settled shares and
    /// settled `IOwe` payments count as paid, everything still open as unpaid.
    pub fn settlement_breakdown(
        groups: &[GroupExpense],
        payments: &[FriendPayment],
        self_name: &str,
    ) -> SettlementBreakdown {
        let mut breakdown = SettlementBreakdown::default();
        for member in groups
            .iter()
            .filter_map(|group| group.member_by_name(self_name))
        {
            if member.settled {
                breakdown.paid += member.share;
            } else {
                breakdown.unpaid += member.share;
            }
        }
        for payment in payments
            .iter()
            .filter(|payment| payment.direction == PaymentDirection::IOwe)
        {
            if payment.settled {
                breakdown.paid += payment.amount;
            } else {
                breakdown.unpaid += payment.amount;
            }
        }
        breakdown
    }

    pub fn dashboard(
        expenses: &[Expense],
        payments: &[FriendPayment],
        groups: &[GroupExpense],
    ) -> DashboardTotals {
        let pending = |direction: PaymentDirection| -> f64 {
            payments
                .iter()
                .filter(|payment| payment.direction == direction && !payment.settled)
                .map(|payment| payment.amount)
                .sum()
        };
        DashboardTotals {
            personal_expenses: expenses.iter().map(|expense| expense.amount).sum(),
            pending_friend_payments: pending(PaymentDirection::IOwe),
            receivable_friend_payments: pending(PaymentDirection::OwedToMe),
            group_expenses: groups.iter().map(|group| group.total_amount).sum(),
        }
    }

    pub fn insights(
        expenses: &[Expense],
        payments: &[FriendPayment],
        groups: &[GroupExpense],
        self_name: &str,
    ) -> Insights {
        Insights {
            outflow_by_category: Self::outflow_by_category(expenses, payments),
            inflow_by_category: Self::inflow_by_category(payments),
            outflow_by_payment_mode: Self::outflow_by_payment_mode(expenses),
            settlement: Self::settlement_breakdown(groups, payments, self_name),
        }
    }
}

/// Sums amounts per label in first-seen order. Labels compare
/// case-insensitively and blank labels collect under `Unspecified`.
fn accumulate<'a>(items: impl Iterator<Item = (&'a str, f64)>) -> Vec<LabeledTotal> {
    let mut totals: Vec<LabeledTotal> = Vec::new();
    for (label, amount) in items {
        let label = match label.trim() {
            "" => UNSPECIFIED_LABEL,
            trimmed => trimmed,
        };
        match totals
            .iter_mut()
            .find(|total| names_match(&total.label, label))
        {
            Some(total) => total.amount += amount,
            None => totals.push(LabeledTotal {
                label: label.to_string(),
                amount,
            }),
        }
    }
    totals
}
