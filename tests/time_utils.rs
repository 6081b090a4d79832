//! Integration tests for time utilities.

use chrono::{Datelike, Timelike};
use eventcatalog::util::time::{compose_schedule_datetime, format_duration, parse_clock_time, schedule_epoch_millis};

#[test]
fn format_duration_sub_second() {
    let d = std::time::Duration::from_millis(350);
    let s = format_duration(d);
    assert!(s.contains("0.4") || s.contains("0.3"), "Expected ~0.3-0.4s, got: {s}");
}

#[test]
fn format_duration_seconds() {
    assert_eq!(format_duration(std::time::Duration::from_secs(5)), "5.0s");
}

#[test]
fn format_duration_minutes() {
    let s = format_duration(std::time::Duration::from_secs(90));
    assert!(s.contains("1.5m"), "Expected 1.5m, got: {s}");
}

#[test]
fn clock_time_degrades_to_zero() {
    assert_eq!(parse_clock_time("9"), (9, 0));
    assert_eq!(parse_clock_time("ab:15"), (0, 15));
    assert_eq!(parse_clock_time(""), (0, 0));
}

#[test]
fn schedule_day_overflow_rolls_into_next_month() {
    let dt = compose_schedule_datetime(2023, 2, 31, None).unwrap();
    assert_eq!((dt.month(), dt.day()), (3, 3));
}

#[test]
fn schedule_month_thirteen_is_next_january() {
    let dt = compose_schedule_datetime(2024, 13, 1, Some("08:05")).unwrap();
    assert_eq!((dt.year(), dt.month(), dt.day()), (2025, 1, 1));
    assert_eq!((dt.hour(), dt.minute()), (8, 5));
}

#[test]
fn epoch_millis_is_utc() {
    assert_eq!(schedule_epoch_millis(1970, 1, 2, None), Some(86_400_000));
    assert_eq!(schedule_epoch_millis(1970, 1, 1, Some("01:00")), Some(3_600_000));
}

#[test]
fn unrepresentable_schedule_parts_are_none() {
    assert_eq!(compose_schedule_datetime(2024, 6, 1, Some("9999999999999999:00")), None);
    assert_eq!(compose_schedule_datetime(2024, 6, 1, Some("-9999999999999999:00")), None);
    assert_eq!(compose_schedule_datetime(2024, i32::MIN, 1, None), None);
    assert_eq!(compose_schedule_datetime(2024, 6, i32::MIN, None), None);
    assert_eq!(schedule_epoch_millis(i32::MAX, 12, 31, Some("23:59")), None);
}
