#![allow(dead_code)]

use chrono::NaiveDate;
use split_ledger::ledger::{GroupExpense, SplitLedger, SplitMode};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Builds an equal-split group with the given member names.
pub fn equal_group(total: f64, names: &[&str]) -> (SplitLedger, GroupExpense) {
    let ledger = SplitLedger::default();
    let group = ledger
        .create_group(
            "Test group",
            date(2025, 1, 1),
            total,
            SplitMode::Equal,
            names.iter().copied(),
        )
        .expect("create group");
    (ledger, group)
}

pub fn shares(group: &GroupExpense) -> Vec<f64> {
    group.members.iter().map(|member| member.share).collect()
}

/// Asserts every share is within one cent of `total / count` and that the
/// shares add up to the total.
pub fn assert_equal_split(group: &GroupExpense) {
    assert_equal_split_at(group, 2);
}

/// Same as [`assert_equal_split`] for a currency with `minor_units` decimals.
/// Float error is tolerated relative to the total's magnitude.
pub fn assert_equal_split_at(group: &GroupExpense, minor_units: u8) {
    let count = group.member_count();
    assert!(count > 0, "equal split needs members");
    let unit = 10f64.powi(-i32::from(minor_units));
    let slack = group.total_amount.abs() * 1e-12 + 1e-9;
    let expected = group.total_amount / count as f64;
    for member in &group.members {
        assert!(
            (member.share - expected).abs() <= unit + slack,
            "{} has share {} but expected about {}",
            member.name,
            member.share,
            expected
        );
    }
    assert!(
        (group.allocated_total() - group.total_amount).abs() <= slack.max(1e-6),
        "shares sum to {} but total is {}",
        group.allocated_total(),
        group.total_amount
    );
}
