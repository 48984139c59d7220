use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static DASHED_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})-(\d{1,2})-(\d{4}|\d{2})$").unwrap());

#[derive(Debug, Clone, Copy)]
enum DateOrder {
    DayMonthYear,
    MonthDayYear,
    DayMonthShortYear,
}

/// Tried in this order; the first that yields a real calendar date wins.
const DATE_ORDERS: [DateOrder; 3] = [
    DateOrder::DayMonthYear,
    DateOrder::MonthDayYear,
    DateOrder::DayMonthShortYear,
];

fn expand_short_year(yy: i32) -> i32 {
    if yy < 69 {
        2000 + yy
    } else {
        1900 + yy
    }
}

/// Parse `dd-mm-yyyy`, `mm-dd-yyyy` or `dd-mm-yy`, day-first wins on ambiguity.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let caps = DASHED_DATE.captures(raw.trim())?;
    let a: u32 = caps[1].parse().ok()?;
    let b: u32 = caps[2].parse().ok()?;
    let year_str = &caps[3];
    let year: i32 = year_str.parse().ok()?;
    let four_digit = year_str.len() == 4;

    DATE_ORDERS.iter().find_map(|order| match order {
        DateOrder::DayMonthYear if four_digit => NaiveDate::from_ymd_opt(year, b, a),
        DateOrder::MonthDayYear if four_digit => NaiveDate::from_ymd_opt(year, a, b),
        DateOrder::DayMonthShortYear if !four_digit => {
            NaiveDate::from_ymd_opt(expand_short_year(year), b, a)
        }
        _ => None,
    })
}

/// Lenient amount parser: keeps digits, '.' and '-', scales "cr" / "lakh".
/// Anything unparseable is 0.0.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return 0.0;
    }
    let Ok(value) = cleaned.parse::<f64>() else {
        return 0.0;
    };
    let lower = raw.to_lowercase();
    if lower.contains("cr") {
        value * 1e7
    } else if lower.contains("lakh") {
        value * 1e5
    } else {
        value
    }
}

/// [`parse_amount`] for an optional cell; an absent cell is 0.0.
pub fn parse_amount_opt(raw: Option<&str>) -> f64 {
    raw.map(parse_amount).unwrap_or(0.0)
}

/// Strict numeric cell: absent or blank is `Some(0.0)`, other non-numbers are `None`.
pub fn parse_number(raw: Option<&str>) -> Option<f64> {
    match raw.map(str::trim) {
        None | Some("") => Some(0.0),
        Some(s) => s.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[rstest]
    #[case("05-03-2023", ymd(2023, 3, 5))]
    #[case("03-04-2023", ymd(2023, 4, 3))]
    #[case("12-25-2023", ymd(2023, 12, 25))]
    #[case("5-3-2023", ymd(2023, 3, 5))]
    #[case(" 31-01-2024 ", ymd(2024, 1, 31))]
    #[case("15-08-23", ymd(2023, 8, 15))]
    #[case("01-01-99", ymd(1999, 1, 1))]
    #[case("29-02-2024", ymd(2024, 2, 29))]
    fn test_parse_date_accepts_known_formats(#[case] raw: &str, #[case] expected: Option<NaiveDate>) {
        assert_eq!(parse_date(raw), expected);
    }

    #[rstest]
    #[case("")]
    #[case("2023-03-05")]
    #[case("05/03/2023")]
    #[case("31-31-2023")]
    #[case("29-02-2023")]
    #[case("12-25-23")]
    #[case("05-03-023")]
    #[case("Domestic Transactions")]
    fn test_parse_date_rejects_other_text(#[case] raw: &str) {
        assert_eq!(parse_date(raw), None);
    }

    #[test]
    fn test_parse_amount_units() {
        assert_eq!(parse_amount("1.5cr"), 15_000_000.0);
        assert_eq!(parse_amount("2lakh"), 200_000.0);
        assert_eq!(parse_amount("2 Lakh"), 200_000.0);
        assert_eq!(parse_amount("3 CR"), 30_000_000.0);
    }

    #[test]
    fn test_parse_amount_strips_noise() {
        assert_eq!(parse_amount("1,234.50"), 1234.5);
        assert_eq!(parse_amount("INR 500"), 500.0);
        assert_eq!(parse_amount("-250.75"), -250.75);
        assert_eq!(parse_amount("  42  "), 42.0);
    }

    #[test]
    fn test_parse_amount_falls_back_to_zero() {
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("-"), 0.0);
        assert_eq!(parse_amount("1.2.3"), 0.0);
        assert_eq!(parse_amount("5-3"), 0.0);
        assert_eq!(parse_amount_opt(None), 0.0);
        assert_eq!(parse_amount_opt(Some("7")), 7.0);
    }

    #[test]
    fn test_parse_number_is_strict() {
        assert_eq!(parse_number(None), Some(0.0));
        assert_eq!(parse_number(Some("  ")), Some(0.0));
        assert_eq!(parse_number(Some(" 100 ")), Some(100.0));
        assert_eq!(parse_number(Some("99.5")), Some(99.5));
        assert_eq!(parse_number(Some("1,000")), None);
        assert_eq!(parse_number(Some("abc")), None);
    }
}
