mod common;

use common::date;
use split_ledger::{
    config::Config,
    ledger::{Expense, ExpenseTracker, FriendPayment, PaymentDirection},
    summary::LabeledTotal,
};

fn seeded() -> ExpenseTracker {
    ExpenseTracker::seeded(&Config::default()).expect("seed tracker")
}

#[test]
fn seeded_dashboard_matches_sample_records() {
    let tracker = seeded();
    let dashboard = tracker.dashboard();

    assert_eq!(dashboard.personal_expenses, 5170.0);
    assert_eq!(dashboard.pending_friend_payments, 500.0);
    assert_eq!(dashboard.receivable_friend_payments, 1200.0);
    assert_eq!(dashboard.group_expenses, 16200.0);
}

#[test]
fn my_share_follows_member_removal() {
    let mut tracker = seeded();
    let lunch = tracker.groups.groups()[0].id;
    assert_eq!(tracker.my_share(lunch).unwrap(), 600.0);

    let john = tracker.groups.group(lunch).unwrap().members[0].id;
    tracker.groups.remove_member(lunch, john).unwrap();
    assert_eq!(tracker.my_share(lunch).unwrap(), 800.0);
}

#[test]
fn insights_group_outflow_and_inflow() {
    let mut tracker = seeded();
    tracker.expenses.add(Expense::new("Snacks", 80.0, "food", date(2025, 1, 3)));

    let insights = tracker.insights();
    let food = insights
        .outflow_by_category
        .iter()
        .find(|total| total.label == "Food")
        .expect("food outflow");
    assert_eq!(food.amount, 1250.0 + 120.0 + 80.0 + 500.0);

    assert_eq!(
        insights.inflow_by_category,
        vec![
            LabeledTotal {
                label: "Food".into(),
                amount: 1200.0
            },
            LabeledTotal {
                label: "Transportation".into(),
                amount: 600.0
            },
        ]
    );

    let unspecified = insights
        .outflow_by_payment_mode
        .iter()
        .find(|total| total.label == "Unspecified")
        .expect("snacks has no payment mode");
    assert_eq!(unspecified.amount, 80.0);
}

#[test]
fn settlement_breakdown_counts_only_the_owners_share() {
    let mut tracker = seeded();
    let breakdown = tracker.insights().settlement;

    // Own shares 600 + 450 + 3000 are open; only the Sarah Smith payment is paid.
    assert_eq!(breakdown.paid, 800.0);
    assert_eq!(breakdown.unpaid, 4050.0 + 500.0);

    let lunch = tracker.groups.groups()[0].id;
    let me = tracker.groups.group(lunch).unwrap().member_by_name("Me").unwrap().id;
    tracker.groups.settle_member(lunch, me).unwrap();

    let breakdown = tracker.insights().settlement;
    assert_eq!(breakdown.paid, 800.0 + 600.0);
    assert_eq!(breakdown.unpaid, 3450.0 + 500.0);
}

#[test]
fn friend_payment_settles_out_of_pending_total() {
    let mut tracker = seeded();
    let id = tracker.friend_payments.add(
        FriendPayment::new("Emma Wilson", 250.0, PaymentDirection::IOwe, date(2025, 1, 4))
            .with_category("Food"),
    );
    assert_eq!(tracker.dashboard().pending_friend_payments, 750.0);

    tracker.friend_payments.toggle_settled(id).unwrap();
    assert_eq!(tracker.dashboard().pending_friend_payments, 500.0);
}

#[test]
fn catalogs_reject_duplicates_across_case() {
    let mut tracker = seeded();
    assert!(tracker.categories.add("food").unwrap_err().is_duplicate());
    assert!(tracker.friends.add("JOHN DOE").unwrap_err().is_duplicate());
    assert!(tracker.payment_modes.add("upi").unwrap_err().is_duplicate());

    let added = tracker.payment_modes.add("Metro Card").unwrap().id;
    tracker.payment_modes.remove(added).unwrap();
    assert_eq!(tracker.payment_modes.len(), 6);
}

#[test]
fn amounts_round_trip_through_display_format() {
    let tracker = seeded();
    let total = tracker.groups.total_amount();
    let shown = tracker.format_amount(total);
    assert_eq!(shown, "₹16,200.00");
    assert_eq!(tracker.parse_amount(&shown), total);
    assert_eq!(tracker.parse_amount("twelve"), 0.0);
}
