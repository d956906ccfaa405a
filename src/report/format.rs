//! Value formatting for the console report
//!
//! Pure helpers: dates, currency, grouped counts, labels and the color cycle.

use std::fmt::Display;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use colored::{Color, Colorize};

use crate::error::ReportError;

/// Shown wherever a value is absent
pub const PLACEHOLDER: &str = "N/A";

/// Colors used to tell adjacent list entries apart
const PALETTE: [Color; 5] = [
    Color::Blue,
    Color::Green,
    Color::Magenta,
    Color::Cyan,
    Color::Red,
];

/// Offset-less layouts accepted after RFC 3339 fails; interpreted as UTC.
const NAIVE_LAYOUTS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Render an ISO-8601 timestamp as `YYYY-MM-DD HH:MM:SS UTC`.
///
/// Absent or blank input yields [`PLACEHOLDER`]. A trailing `Z` is read as
/// `+00:00`; explicit offsets are converted to UTC. Unparseable input is an
/// error.
pub fn format_date(value: Option<&str>) -> Result<String, ReportError> {
    let Some(raw) = value.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(PLACEHOLDER.to_string());
    };

    parse_timestamp(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .map_err(|source| ReportError::Date {
            value: raw.to_string(),
            source,
        })
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let normalized = raw
        .strip_suffix(['Z', 'z'])
        .map_or_else(|| raw.to_string(), |s| format!("{s}+00:00"));

    DateTime::parse_from_rfc3339(&normalized)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|err| {
            NAIVE_LAYOUTS
                .iter()
                .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
                .or_else(|| {
                    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                        .ok()
                        .map(|date| date.and_time(NaiveTime::MIN))
                })
                .map(|naive| naive.and_utc())
                .ok_or(err)
        })
}

/// Currency text wrapped in yellow, e.g. `$1,234,567.50`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    currency_text(amount).yellow().to_string()
}

/// Currency text without color.
#[must_use]
pub fn currency_text(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${amount}");
    }

    let raw = format!("{amount:.2}");
    let (sign, digits) = raw
        .strip_prefix('-')
        .map_or(("", raw.as_str()), |rest| ("-", rest));
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

    format!("${sign}{}.{fraction}", group_thousands(whole))
}

/// Integer with comma thousands separators, e.g. `12,345`.
#[must_use]
pub fn format_count(count: i64) -> String {
    let sign = if count < 0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(&count.unsigned_abs().to_string()))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Display color for the entry at `index`; repeats every five entries.
#[must_use]
pub const fn get_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// Turn an API key into a heading: `new_contract_awards` -> `New Contract Awards`.
///
/// A letter is capitalized when the character before it is not a letter;
/// every other letter is lowercased.
#[must_use]
pub fn format_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len());
    let mut prev_alpha = false;
    for ch in key.chars().map(|c| if c == '_' { ' ' } else { c }) {
        if prev_alpha {
            label.extend(ch.to_lowercase());
        } else {
            label.extend(ch.to_uppercase());
        }
        prev_alpha = ch.is_alphabetic();
    }
    label
}

/// Text value or [`PLACEHOLDER`]
#[must_use]
pub fn text_or_placeholder(value: Option<&str>) -> &str {
    value.unwrap_or(PLACEHOLDER)
}

/// Any displayable value or [`PLACEHOLDER`]
#[must_use]
pub fn display_or_placeholder<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_absent() {
        assert_eq!(format_date(None).unwrap(), "N/A");
        assert_eq!(format_date(Some("")).unwrap(), "N/A");
        assert_eq!(format_date(Some("   ")).unwrap(), "N/A");
    }

    #[test]
    fn test_format_date_zulu() {
        assert_eq!(
            format_date(Some("2023-01-01T00:00:00Z")).unwrap(),
            "2023-01-01 00:00:00 UTC"
        );
    }

    #[test]
    fn test_format_date_fractional_seconds() {
        assert_eq!(
            format_date(Some("2024-03-15T14:22:31.123456Z")).unwrap(),
            "2024-03-15 14:22:31 UTC"
        );
    }

    #[test]
    fn test_format_date_converts_offset_to_utc() {
        assert_eq!(
            format_date(Some("2024-03-15T09:00:00-05:00")).unwrap(),
            "2024-03-15 14:00:00 UTC"
        );
    }

    #[test]
    fn test_format_date_without_offset_is_utc() {
        assert_eq!(
            format_date(Some("2024-03-15T09:30:00")).unwrap(),
            "2024-03-15 09:30:00 UTC"
        );
        assert_eq!(
            format_date(Some("2024-03-15")).unwrap(),
            "2024-03-15 00:00:00 UTC"
        );
    }

    #[test]
    fn test_format_date_malformed_is_error() {
        let err = format_date(Some("last tuesday")).unwrap_err();
        assert!(matches!(err, ReportError::Date { ref value, .. } if value == "last tuesday"));
    }

    #[test]
    fn test_currency_text() {
        assert_eq!(currency_text(0.0), "$0.00");
        assert_eq!(currency_text(1_234_567.5), "$1,234,567.50");
        assert_eq!(currency_text(999.999), "$1,000.00");
        assert_eq!(currency_text(100.0), "$100.00");
        assert_eq!(currency_text(-1234.5), "$-1,234.50");
    }

    #[test]
    fn test_format_currency_wraps_text() {
        assert!(format_currency(0.0).contains("$0.00"));
        assert!(format_currency(1_234_567.5).contains("$1,234,567.50"));
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(12_345_678), "12,345,678");
        assert_eq!(format_count(-4500), "-4,500");
    }

    #[test]
    fn test_get_color_cycles_every_five() {
        for i in 0..20 {
            assert_eq!(get_color(i), get_color(i + 5));
        }
        assert_eq!(get_color(0), Color::Blue);
        assert_eq!(get_color(4), Color::Red);
        assert_ne!(get_color(0), get_color(1));
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label("contracts"), "Contracts");
        assert_eq!(format_label("new_award_count"), "New Award Count");
        assert_eq!(format_label("toptier_code"), "Toptier Code");
        assert_eq!(format_label("IDV_awards"), "Idv Awards");
        assert_eq!(format_label("fy2024_total"), "Fy2024 Total");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(text_or_placeholder(None), "N/A");
        assert_eq!(text_or_placeholder(Some("DOJ")), "DOJ");
        assert_eq!(display_or_placeholder::<i64>(None), "N/A");
        assert_eq!(display_or_placeholder(Some(17)), "17");
    }
}
