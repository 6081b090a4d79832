//! Bilingual display of event schedules.
//!
//! A schedule renders as up to three parts joined by `" / "`: the
//! month-day date, the weekday, and the `start - end` time range. Parts
//! whose inputs are missing or out of range are left out.

use crate::core::event_record::{CulturalEvent, Schedule};

/// Display language for formatted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Arabic,
}

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_AR: [&str; 12] = [
    "كانون الثاني",
    "شباط",
    "آذار",
    "نيسان",
    "أيار",
    "حزيران",
    "تموز",
    "آب",
    "أيلول",
    "تشرين الأول",
    "تشرين الثاني",
    "كانون الأول",
];

// Monday first: day_of_week 1 is Monday, 7 is Sunday.
const WEEKDAYS_EN: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const WEEKDAYS_AR: [&str; 7] = [
    "الاثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
    "الأحد",
];

fn lookup<'a>(table: &[&'a str], one_based: i32) -> Option<&'a str> {
    let idx = usize::try_from(one_based).ok()?.checked_sub(1)?;
    table.get(idx).copied()
}

/// Month name for `month` (1–12).
pub fn month_name(month: i32, lang: Language) -> Option<&'static str> {
    match lang {
        Language::English => lookup(&MONTHS_EN, month),
        Language::Arabic => lookup(&MONTHS_AR, month),
    }
}

/// Weekday name for `day` (1 = Monday … 7 = Sunday).
pub fn weekday_name(day: i32, lang: Language) -> Option<&'static str> {
    match lang {
        Language::English => lookup(&WEEKDAYS_EN, day),
        Language::Arabic => lookup(&WEEKDAYS_AR, day),
    }
}

fn non_blank(s: &Option<String>) -> Option<&str> {
    s.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn schedule_parts(schedule: &Schedule, lang: Language, with_year: bool) -> Vec<String> {
    let mut parts = Vec::with_capacity(3);

    let date = match (schedule.month, schedule.day_of_month) {
        (Some(m), Some(d)) => month_name(m, lang).map(|name| format!("{name}-{d}")),
        _ => None,
    };
    match (date, schedule.year.filter(|_| with_year)) {
        (Some(date), Some(year)) => parts.push(format!("{date}-{year}")),
        (Some(date), None) => parts.push(date),
        (None, Some(year)) => parts.push(year.to_string()),
        (None, None) => {}
    }

    if let Some(day) = schedule.day_of_week.and_then(|d| weekday_name(d, lang)) {
        parts.push(day.to_owned());
    }

    if let (Some(start), Some(end)) = (non_blank(&schedule.start_time), non_blank(&schedule.end_time)) {
        parts.push(format!("{start} - {end}"));
    }

    parts
}

/// Compact form used in the table's Date column.
pub fn format_schedule(schedule: &Schedule, lang: Language) -> String {
    schedule_parts(schedule, lang, false).join(" / ")
}

/// Detail-pane form: like [`format_schedule`] but includes the year.
pub fn format_schedule_full(schedule: &Schedule, lang: Language) -> String {
    schedule_parts(schedule, lang, true).join(" / ")
}

/// English and Arabic forms joined by `" | "`, omitting an empty half.
pub fn format_schedule_bilingual(schedule: &Schedule) -> String {
    let en = format_schedule_full(schedule, Language::English);
    let ar = format_schedule_full(schedule, Language::Arabic);
    match (en.is_empty(), ar.is_empty()) {
        (false, false) => format!("{en} | {ar}"),
        (false, true) => en,
        (true, false) => ar,
        (true, true) => String::new(),
    }
}

/// Date cell text for an event: its first schedule, or `""`.
pub fn event_date_label(event: &CulturalEvent, lang: Language) -> String {
    event
        .primary_schedule()
        .map(|s| format_schedule(s, lang))
        .unwrap_or_default()
}
