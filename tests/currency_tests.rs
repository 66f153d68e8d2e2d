use split_ledger::currency::{
    allocate_evenly, format_amount, parse_amount, to_minor_units, LocaleConfig,
};

#[test]
fn formats_with_fixed_symbol_and_grouping() {
    let locale = LocaleConfig::default();
    assert_eq!(format_amount(12000.0, &locale), "₹12,000.00");
    assert_eq!(format_amount(0.5, &locale), "₹0.50");
}

#[test]
fn parses_display_strings_back() {
    let locale = LocaleConfig::default();
    assert_eq!(parse_amount("₹1,800", &locale), 1800.0);
    assert_eq!(parse_amount("₹ 12,000.25", &locale), 12000.25);
    assert_eq!(parse_amount("12abc", &locale), 0.0);
}

#[test]
fn allocation_sums_to_total_for_awkward_counts() {
    for count in 1..=9 {
        let parts = allocate_evenly(1000.0, count, 2);
        assert_eq!(parts.len(), count);
        let sum: i64 = parts.iter().map(|part| to_minor_units(*part, 2).unwrap()).sum();
        assert_eq!(sum, 100_000, "count {}", count);
        let max = parts.iter().cloned().fold(f64::MIN, f64::max);
        let min = parts.iter().cloned().fold(f64::MAX, f64::min);
        assert!(max - min <= 0.01 + 1e-9);
    }
}
