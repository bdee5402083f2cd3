use crate::dates::{DateParser, compare_recency};
use chrono::NaiveDate;

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn parses_iso_prefix() {
    let parser = DateParser::new();
    assert_eq!(parser.parse("2024-01-05"), Some(d(2024, 1, 5)));
    assert_eq!(parser.parse("2024-01-05T14:30:00"), Some(d(2024, 1, 5)));
}

#[test]
fn parses_german_short_and_long_years() {
    let parser = DateParser::new();
    assert_eq!(parser.parse("3.2.24"), Some(d(2024, 2, 3)));
    assert_eq!(parser.parse("3.2.2024"), Some(d(2024, 2, 3)));
    assert_eq!(parser.parse("24.12.99"), Some(d(1999, 12, 24)));
    assert_eq!(parser.parse("1.1.70"), Some(d(1970, 1, 1)));
    assert_eq!(parser.parse("1.1.69"), Some(d(2069, 1, 1)));
}

#[test]
fn rejects_empty_and_invalid_calendar_dates() {
    let parser = DateParser::new();
    assert_eq!(parser.parse(""), None);
    assert_eq!(parser.parse("   "), None);
    assert_eq!(parser.parse("32.1.24"), None);
    assert_eq!(parser.parse("2024-13-01"), None);
    assert_eq!(parser.parse("not a date"), None);
}

#[test]
fn trims_and_strips_commas_before_parsing() {
    let parser = DateParser::new();
    assert_eq!(parser.parse("  2024-01-05  "), Some(d(2024, 1, 5)));
    assert_eq!(parser.parse("August 5, 2024"), Some(d(2024, 8, 5)));
}

#[test]
fn memoized_result_is_stable() {
    let parser = DateParser::new();
    let first = parser.parse("3.2.24");
    let second = parser.parse(" 3.2.24 ");
    assert_eq!(first, second);
}

#[test]
fn recency_orders_dated_before_undated() {
    use std::cmp::Ordering;
    let newer = Some(d(2024, 2, 3));
    let older = Some(d(2024, 1, 5));
    assert_eq!(compare_recency(newer, older), Ordering::Less);
    assert_eq!(compare_recency(older, newer), Ordering::Greater);
    assert_eq!(compare_recency(newer, None), Ordering::Less);
    assert_eq!(compare_recency(None, newer), Ordering::Greater);
    assert_eq!(compare_recency(None, None), Ordering::Equal);
}
