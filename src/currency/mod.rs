//! Amount parsing, display formatting and minor-unit allocation.

use serde::{Deserialize, Serialize};

/// Locale-aware formatting preferences for a single fixed currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    pub currency_symbol: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub minor_units: u8,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".into(),
            decimal_separator: '.',
            grouping_separator: ',',
            minor_units: 2,
        }
    }
}

/// Coerces a raw amount into the non-negative, finite domain used by records.
pub fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

/// Parses user-entered text such as `"₹2,400.50"` into an amount.
///
/// Input that cannot be read as a non-negative number yields `0.0` rather
/// than an error.
pub fn parse_amount(raw: &str, locale: &LocaleConfig) -> f64 {
    let trimmed = raw.trim();
    let without_symbol = trimmed
        .strip_prefix(locale.currency_symbol.as_str())
        .unwrap_or(trimmed);
    let mut cleaned = String::with_capacity(without_symbol.len());
    for ch in without_symbol.chars() {
        if ch == locale.grouping_separator || ch.is_whitespace() {
            continue;
        }
        if ch == locale.decimal_separator {
            cleaned.push('.');
        } else {
            cleaned.push(ch);
        }
    }
    cleaned
        .parse::<f64>()
        .map(sanitize_amount)
        .unwrap_or(0.0)
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let mut rendered = group_digits(int_part, locale.grouping_separator);
    if let Some(frac) = frac_part {
        rendered.push(locale.decimal_separator);
        rendered.push_str(frac);
    }
    if value < 0.0 && rendered.chars().any(|ch| ch.is_ascii_digit() && ch != '0') {
        rendered.insert(0, '-');
    }
    rendered
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// Renders an amount with the fixed currency symbol prefix, e.g. `₹2,400.00`.
pub fn format_amount(value: f64, locale: &LocaleConfig) -> String {
    let body = format_number(locale, value, locale.minor_units);
    match body.strip_prefix('-') {
        Some(unsigned) => format!("-{}{}", locale.currency_symbol, unsigned),
        None => format!("{}{}", locale.currency_symbol, body),
    }
}

/// Finest precision used for share rounding. Larger settings are clamped.
pub const MAX_MINOR_UNITS: u8 = 4;

/// Largest magnitude an `f64` holds with integer precision (2^53).
const MAX_EXACT_MINOR: f64 = 9_007_199_254_740_992.0;

fn scale(minor_units: u8) -> f64 {
    10f64.powi(i32::from(minor_units))
}

/// Converts an amount to whole minor units, or `None` when the scaled value
/// is too large to count exactly.
pub fn to_minor_units(value: f64, minor_units: u8) -> Option<i64> {
    let scaled = (sanitize_amount(value) * scale(minor_units)).round();
    (scaled <= MAX_EXACT_MINOR).then(|| scaled as i64)
}

pub fn from_minor_units(value: i64, minor_units: u8) -> f64 {
    value as f64 / scale(minor_units)
}

/// Rounds a sanitized amount to the nearest minor unit. Amounts too large
/// for minor-unit counting have no fractional part left and pass through.
pub fn round_to_minor_units(value: f64, minor_units: u8) -> f64 {
    match to_minor_units(value, minor_units) {
        Some(minor) => from_minor_units(minor, minor_units),
        None => sanitize_amount(value),
    }
}

/// Splits `total` into `count` parts that differ by at most one minor unit
/// and sum exactly to the rounded total.
///
/// Leftover minor units go to the earliest parts, so allocation is stable
/// for a given member order. Totals beyond exact minor-unit range are divided
/// plainly. Returns an empty vector when `count` is zero.
pub fn allocate_evenly(total: f64, count: usize, minor_units: u8) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let Some(total_minor) = to_minor_units(total, minor_units) else {
        return vec![sanitize_amount(total) / count as f64; count];
    };
    let parts = count as i64;
    let base = total_minor / parts;
    let remainder = total_minor % parts;
    (0..parts)
        .map(|index| {
            let extra = if index < remainder { 1 } else { 0 };
            from_minor_units(base + extra, minor_units)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_and_keeps_precision() {
        let locale = LocaleConfig::default();
        assert_eq!(format_number(&locale, 1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(&locale, 12.0, 0), "12");
    }

    #[test]
    fn formats_with_symbol_prefix() {
        let locale = LocaleConfig::default();
        assert_eq!(format_amount(2400.0, &locale), "₹2,400.00");
        assert_eq!(format_amount(-12.5, &locale), "-₹12.50");
    }

    #[test]
    fn parses_formatted_and_malformed_input() {
        let locale = LocaleConfig::default();
        assert_eq!(parse_amount("₹2,400", &locale), 2400.0);
        assert_eq!(parse_amount(" 1 250.75 ", &locale), 1250.75);
        assert_eq!(parse_amount("abc", &locale), 0.0);
        assert_eq!(parse_amount("", &locale), 0.0);
        assert_eq!(parse_amount("-40", &locale), 0.0);
        assert_eq!(parse_amount("NaN", &locale), 0.0);
    }

    #[test]
    fn parses_with_european_separators() {
        let locale = LocaleConfig {
            currency_symbol: "€".into(),
            decimal_separator: ',',
            grouping_separator: '.',
            minor_units: 2,
        };
        assert_eq!(parse_amount("€1.234,50", &locale), 1234.5);
        assert_eq!(format_amount(1234.5, &locale), "€1.234,50");
    }

    #[test]
    fn allocation_distributes_leftover_cents_first() {
        let parts = allocate_evenly(100.0, 3, 2);
        assert_eq!(parts, vec![33.34, 33.33, 33.33]);
        let sum: i64 = parts.iter().map(|part| to_minor_units(*part, 2).unwrap()).sum();
        assert_eq!(sum, 10_000);
    }

    #[test]
    fn allocation_handles_zero_members_and_whole_units() {
        assert!(allocate_evenly(50.0, 0, 2).is_empty());
        assert_eq!(allocate_evenly(10.0, 3, 0), vec![4.0, 3.0, 3.0]);
    }

    #[test]
    fn oversized_totals_fall_back_to_plain_division() {
        assert_eq!(to_minor_units(1e17, 2), None);
        assert_eq!(allocate_evenly(1e17, 2, 2), vec![5e16, 5e16]);
        assert_eq!(round_to_minor_units(1e17, 2), 1e17);
    }

    #[test]
    fn rounds_to_nearest_minor_unit() {
        assert_eq!(round_to_minor_units(100.007, 2), 100.01);
        assert_eq!(round_to_minor_units(12.4, 0), 12.0);
        assert_eq!(round_to_minor_units(-3.0, 2), 0.0);
    }
}
