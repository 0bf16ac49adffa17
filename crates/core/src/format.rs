//! Display formatting for money and dates.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Placeholder shown for absent values.
pub const MISSING: &str = "-";

/// Format an amount as currency with Indian digit grouping.
///
/// INR amounts use `₹`; every other currency is shown with `$`. Always two
/// decimals, e.g. `$12,34,567.89`. `None` renders as `-`.
#[must_use]
pub fn format_currency(amount: Option<Decimal>, currency: &str) -> String {
    let Some(amount) = amount else {
        return MISSING.to_string();
    };
    let symbol = if currency.eq_ignore_ascii_case("INR") {
        "₹"
    } else {
        "$"
    };
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{symbol}{}", group_amount(rounded.abs()))
}

/// `1234567.8` → `12,34,567.80`.
fn group_amount(amount: Decimal) -> String {
    let text = format!("{amount:.2}");
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{}.{fraction}", group_indian(whole))
}

/// Lakh/crore grouping: the last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (mut head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = vec![tail];
    while head.len() > 2 {
        let (rest, pair) = head.split_at(head.len() - 2);
        groups.push(pair);
        head = rest;
    }
    if !head.is_empty() {
        groups.push(head);
    }
    groups.reverse();
    groups.join(",")
}

/// `05 Mar 2026`, or `-` when absent.
#[must_use]
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| MISSING.to_string(), |d| d.format("%d %b %Y").to_string())
}

/// Plain two-decimal amount for spreadsheet cells and inputs.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_currency(Some(dec("1234567.891")), "USD"), "$12,34,567.89");
        assert_eq!(format_currency(Some(dec("123456789")), "INR"), "₹12,34,56,789.00");
        assert_eq!(format_currency(Some(dec("999")), "USD"), "$999.00");
        assert_eq!(format_currency(Some(dec("1000")), "USD"), "$1,000.00");
    }

    #[test]
    fn test_non_inr_uses_dollar() {
        assert_eq!(format_currency(Some(dec("12.5")), "EUR"), "$12.50");
    }

    #[test]
    fn test_negative_and_missing() {
        assert_eq!(format_currency(Some(dec("-2500.5")), "USD"), "-$2,500.50");
        assert_eq!(format_currency(None, "USD"), "-");
        assert_eq!(format_currency(Some(dec("-0.001")), "USD"), "$0.00");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2026, 3, 5)), "05 Mar 2026");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec("1.005")), "1.01");
        assert_eq!(format_amount(dec("42")), "42.00");
    }
}
