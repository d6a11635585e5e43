//! Display formatting for money, rates and timestamps.

use loanpay_core::types::Timestamp;
use num_format::{Locale, ToFormattedString};

/// Format an amount as dollars with thousands separators: `$12,345.60`.
///
/// Negative amounts keep the sign after the currency symbol (`$-50.00`).
/// Values too large to group (or not finite) are printed plainly.
pub fn money(amount: f64) -> String {
    let scaled = (amount.abs() * 100.0).round();
    if !scaled.is_finite() || scaled >= u128::MAX as f64 {
        return format!("${amount:.2}");
    }
    let cents = scaled as u128;
    let whole = (cents / 100).to_formatted_string(&Locale::en);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("${sign}{whole}.{:02}", cents % 100)
}

/// A stored interest rate, always with at least one decimal: `10.0%`, `12.5%`.
pub fn rate(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}%")
    } else {
        format!("{value}%")
    }
}

/// A derived rate rounded to one decimal.
pub fn average_rate(value: f64) -> String {
    format!("{value:.1}%")
}

/// Payment timestamp to minute precision, `2024-02-01 09:30`.
pub fn timestamp(value: &Timestamp) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(0.0), "$0.00");
        assert_eq!(money(250.0), "$250.00");
        assert_eq!(money(2200.5), "$2,200.50");
        assert_eq!(money(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn money_beyond_u64_range_is_exact() {
        assert_eq!(money(1e18), "$1,000,000,000,000,000,000.00");
        assert_eq!(money(-2e20), "$-200,000,000,000,000,000,000.00");
    }

    #[test]
    fn money_out_of_grouping_range_prints_plainly() {
        let out = money(1e300);
        assert!(out.starts_with("$1000000"));
        assert!(out.ends_with(".00"));
        assert_eq!(money(f64::INFINITY), "$inf");
    }

    #[test]
    fn money_keeps_sign() {
        assert_eq!(money(-50.0), "$-50.00");
        assert_eq!(money(-0.001), "$0.00");
    }

    #[test]
    fn rate_shows_one_decimal_minimum() {
        assert_eq!(rate(10.0), "10.0%");
        assert_eq!(rate(12.5), "12.5%");
        assert_eq!(rate(11.25), "11.25%");
        assert_eq!(average_rate(11.233_333), "11.2%");
        assert_eq!(average_rate(0.0), "0.0%");
    }

    #[test]
    fn timestamp_to_minutes() {
        let ts = Utc.with_ymd_and_hms(2024, 2, 1, 9, 30, 59).unwrap();
        assert_eq!(timestamp(&ts), "2024-02-01 09:30");
    }
}
