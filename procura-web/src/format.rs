//! Display helpers for money and dates.

use chrono::{DateTime, Utc};

/// Currency for amounts that carry none of their own, such as budgets.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Format an amount in minor units, e.g. `123456, "USD"` → `$1,234.56`.
pub fn format_money(minor: i64, currency: &str) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    let whole = group_thousands(abs / 100);
    let cents = abs % 100;
    let prefix = match currency {
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        other => format!("{other} "),
    };
    format!("{sign}{prefix}{whole}.{cents:02}")
}

/// Format a total that may have overflowed, showing `fallback` when it did.
pub fn format_total(minor: Option<i64>, currency: &str, fallback: &str) -> String {
    minor.map_or_else(|| fallback.to_string(), |minor| format_money(minor, currency))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use test_case::test_case;

    #[test_case(0, "USD", "$0.00")]
    #[test_case(5, "USD", "$0.05")]
    #[test_case(123_456, "USD", "$1,234.56")]
    #[test_case(100_000_000, "EUR", "€1,000,000.00")]
    #[test_case(-2_500, "GBP", "-£25.00")]
    #[test_case(99_900, "CHF", "CHF 999.00")]
    fn formats_money(minor: i64, currency: &str, expected: &str) {
        assert_eq!(format_money(minor, currency), expected);
    }

    #[test]
    fn formats_extreme_values_without_overflow() {
        assert_eq!(
            format_money(i64::MIN, "USD"),
            "-$92,233,720,368,547,758.08"
        );
    }

    #[test]
    fn overflowed_total_shows_fallback() {
        assert_eq!(format_total(Some(1_050), "EUR", "n/a"), "€10.50");
        assert_eq!(format_total(None, "EUR", "n/a"), "n/a");
    }

    #[test]
    fn formats_date_as_iso_day() {
        let value = Utc.with_ymd_and_hms(2024, 2, 9, 23, 59, 0).unwrap();
        assert_eq!(format_date(&value), "2024-02-09");
    }
}
