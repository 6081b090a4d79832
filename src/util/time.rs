//! Date/time helpers for EventCatalog.
//!
//! Schedules store their date parts and `HH:MM` clock strings separately;
//! these helpers compose them into comparable timestamps and keep the
//! display formats consistent across the UI.

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Parse an `HH:MM` clock string into `(hours, minutes)`.
///
/// Each component that is missing or not a number degrades to `0`
/// instead of failing, so `"9"` is `(9, 0)` and `"ab:15"` is `(0, 15)`.
/// Anything after the second `:` is ignored.
pub fn parse_clock_time(input: &str) -> (i64, i64) {
    let mut parts = input.trim().split(':');
    let hours = parts.next().map(parse_component).unwrap_or(0);
    let minutes = parts.next().map(parse_component).unwrap_or(0);
    (hours, minutes)
}

fn parse_component(part: &str) -> i64 {
    part.trim().parse::<i64>().unwrap_or(0)
}

/// Compose a schedule's date parts and optional start time into a naive
/// date-time.
///
/// Out-of-range parts roll over the way a calendar would when counting
/// forward: day 31 of February lands in early March, month 13 is January
/// of the following year, `"25:00"` is 01:00 the next day. Returns `None`
/// when any part is too large to represent or the resulting date falls
/// outside chrono's supported range.
pub fn compose_schedule_datetime(
    year: i32,
    month: i32,
    day_of_month: i32,
    start_time: Option<&str>,
) -> Option<NaiveDateTime> {
    let month_index = month.checked_sub(1)?;
    let year = year.checked_add(month_index.div_euclid(12))?;
    let month = (month_index.rem_euclid(12) + 1) as u32;

    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (hours, minutes) = start_time.map(parse_clock_time).unwrap_or((0, 0));

    let midnight = first.and_hms_opt(0, 0, 0)?;
    midnight
        .checked_add_signed(Duration::try_days(i64::from(day_of_month) - 1)?)?
        .checked_add_signed(Duration::try_hours(hours)?)?
        .checked_add_signed(Duration::try_minutes(minutes)?)
}

/// Epoch milliseconds of a composed schedule date-time, interpreted as UTC.
pub fn schedule_epoch_millis(
    year: i32,
    month: i32,
    day_of_month: i32,
    start_time: Option<&str>,
) -> Option<i64> {
    compose_schedule_datetime(year, month, day_of_month, start_time)
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Format a `std::time::Duration` into a human-readable string.
///
/// Used in the status bar to show how long the catalog took to load.
/// Examples: `4.0ms`, `1.2s`, `1.5m`.
pub fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.01 {
        format!("{:.1}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = secs / 60.0;
        format!("{mins:.1}m")
    }
}
