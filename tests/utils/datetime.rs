use chrono::{DateTime, Local, NaiveDate, Utc};
use gradebook::utils::datetime::*;

#[test]
fn test_format_ymd() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    assert_eq!(format_ymd(date), "2025-01-15");
}

#[test]
fn test_parse_date() {
    assert_eq!(parse_date("2004-05-17").unwrap(), NaiveDate::from_ymd_opt(2004, 5, 17).unwrap());
    assert_eq!(parse_date(" 2004-05-17 ").unwrap(), NaiveDate::from_ymd_opt(2004, 5, 17).unwrap());
    assert!(parse_date("17/05/2004").is_err());
    assert!(parse_date("2004-02-30").is_err());
    assert!(parse_date("").is_err());
}

#[test]
fn test_format_date_with_display_format() {
    let date = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
    assert_eq!(format_date(date, API_DATE_FORMAT), "2024-09-02");
    assert_eq!(format_date(date, "%d/%m/%Y"), "02/09/2024");
    assert_eq!(format_date(date, "%b %-d, %Y"), "Sep 2, 2024");
}

#[test]
fn test_format_timestamp_date() {
    // Displayed in the local timezone
    let ts: DateTime<Utc> = "2024-10-01T12:00:00Z".parse().unwrap();
    let local = ts.with_timezone(&Local).date_naive();
    assert_eq!(format_timestamp_date(&ts, "%d/%m/%Y"), local.format("%d/%m/%Y").to_string());
}

#[test]
fn test_is_valid_format() {
    assert!(is_valid_format("%Y-%m-%d"));
    assert!(is_valid_format("%d.%m.%y"));
    assert!(!is_valid_format("%Q"));
}
