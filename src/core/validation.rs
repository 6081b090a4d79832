//! Form validation for events and navigation categories.
//!
//! Each failing field produces a [`FieldIssue`] carrying an English and an
//! Arabic message, so the editor can show both next to the input.

use crate::core::category::{find_by_name, NavigationCategory};
use crate::core::event_record::{CulturalEvent, Schedule};
use crate::util::error::{CatalogError, Result};

/// One failed field in a submitted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// JSON name of the field, e.g. `"title_left"` or `"schedules"`.
    pub field: &'static str,
    pub message_en: String,
    pub message_ar: String,
}

impl FieldIssue {
    fn new(field: &'static str, en: &str, ar: &str) -> Self {
        Self {
            field,
            message_en: en.to_owned(),
            message_ar: ar.to_owned(),
        }
    }

    /// Both messages on one line, English first.
    pub fn bilingual(&self) -> String {
        format!("{} / {}", self.message_en, self.message_ar)
    }
}

fn is_blank(v: &Option<String>) -> bool {
    v.as_deref().map_or(true, |s| s.trim().is_empty())
}

/// Check an event before create or update. Returns every issue found.
pub fn validate_event(event: &CulturalEvent) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    if event.category_id().is_none() {
        issues.push(FieldIssue::new(
            "navigationCategory",
            "Category is required.",
            "الفئة مطلوبة.",
        ));
    }
    if is_blank(&event.name_left) {
        issues.push(FieldIssue::new("nameOrOrganizer_left", "Name is required.", "الاسم مطلوب."));
    }
    if is_blank(&event.title_left) {
        issues.push(FieldIssue::new("title_left", "Title is required.", "العنوان مطلوب."));
    }
    if is_blank(&event.description_table_left) {
        issues.push(FieldIssue::new(
            "description_table_left",
            "One line description is required.",
            "وصف من سطر واحد مطلوب.",
        ));
    }
    if event.schedules.is_empty() {
        issues.push(FieldIssue::new(
            "schedules",
            "At least one date is required.",
            "مطلوب إدخال تاريخ واحد على الأقل",
        ));
    }
    for schedule in &event.schedules {
        issues.extend(validate_schedule(schedule));
    }
    if let Some(lat) = event.latitude {
        if !(-90.0..=90.0).contains(&lat) {
            issues.push(coordinate_issue("latitude"));
        }
    }
    if let Some(lon) = event.longitude {
        if !(-180.0..=180.0).contains(&lon) {
            issues.push(coordinate_issue("longitude"));
        }
    }

    issues
}

/// Range checks for one schedule. Missing values are always fine.
pub fn validate_schedule(schedule: &Schedule) -> Vec<FieldIssue> {
    let mut issues = Vec::new();
    let out_of = |v: Option<i32>, lo: i32, hi: i32| v.is_some_and(|v| !(lo..=hi).contains(&v));

    if out_of(schedule.month, 1, 12) {
        issues.push(FieldIssue::new("month", "Month must be 1-12.", "يجب أن يكون الشهر بين 1 و 12."));
    }
    if out_of(schedule.day_of_month, 1, 31) {
        issues.push(FieldIssue::new(
            "dayOfMonth",
            "Day of month must be 1-31.",
            "يجب أن يكون اليوم بين 1 و 31.",
        ));
    }
    if out_of(schedule.day_of_week, 1, 7) {
        issues.push(FieldIssue::new(
            "dayOfWeek",
            "Day of week must be 1-7.",
            "يجب أن يكون يوم الأسبوع بين 1 و 7.",
        ));
    }
    for (field, value) in [("startTime", &schedule.start_time), ("endTime", &schedule.end_time)] {
        if let Some(t) = value.as_deref().filter(|t| !t.trim().is_empty()) {
            if !is_clock_time(t) {
                issues.push(FieldIssue::new(field, "Time must be HH:MM.", "يجب أن يكون الوقت بصيغة HH:MM."));
            }
        }
    }
    issues
}

fn is_clock_time(t: &str) -> bool {
    let Some((h, m)) = t.trim().split_once(':') else {
        return false;
    };
    matches!((h.parse::<u32>(), m.parse::<u32>()), (Ok(h), Ok(m)) if h < 24 && m < 60)
}

fn coordinate_issue(field: &'static str) -> FieldIssue {
    if field == "latitude" {
        FieldIssue::new(field, "Latitude must be a number between -90 and 90.", "يجب أن يكون خط العرض رقماً بين -90 و 90.")
    } else {
        FieldIssue::new(
            field,
            "Longitude must be a number between -180 and 180.",
            "يجب أن يكون خط الطول رقماً بين -180 و 180.",
        )
    }
}

/// Parse a latitude/longitude text input. Empty input is `Ok(None)`.
pub fn parse_coordinate(input: &str, field: &'static str) -> std::result::Result<Option<f64>, FieldIssue> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    let limit = if field == "latitude" { 90.0 } else { 180.0 };
    match input.parse::<f64>() {
        Ok(v) if v.is_finite() && v.abs() <= limit => Ok(Some(v)),
        _ => Err(coordinate_issue(field)),
    }
}

/// Trim schedule time strings and turn blank ones into `None`.
pub fn normalize_schedules(schedules: &mut [Schedule]) {
    for s in schedules {
        for t in [&mut s.start_time, &mut s.end_time] {
            *t = t
                .take()
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty());
        }
    }
}

/// Check a navigation category before create or update.
pub fn validate_category(category: &NavigationCategory) -> Vec<FieldIssue> {
    let mut issues = Vec::new();
    if category.name.trim().is_empty() {
        issues.push(FieldIssue::new("name", "Name is required.", "الاسم مطلوب."));
    }
    issues
}

/// Reject a name already used by another category (ignoring case).
pub fn check_unique_name(
    category: &NavigationCategory,
    existing: &[NavigationCategory],
) -> Option<FieldIssue> {
    find_by_name(existing, &category.name)
        .filter(|other| category.id.is_none() || other.id != category.id)
        .map(|_| {
            FieldIssue::new(
                "name",
                "A category with this name already exists.",
                "توجد فئة بهذا الاسم بالفعل.",
            )
        })
}

/// Turn a non-empty issue list into [`CatalogError::Validation`].
pub fn into_result(issues: Vec<FieldIssue>) -> Result<()> {
    if issues.is_empty() {
        Ok(())
    } else {
        Err(CatalogError::Validation(issues))
    }
}
