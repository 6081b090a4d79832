//! Sort-key extraction and the stable sort stage of the table view.
//!
//! Every sortable column maps a row to a [`SortKey`]. Keys compare
//! numerically when both sides are numbers (or numeric-looking text) and
//! as strings otherwise. That fallback means a dated row (numeric key) and
//! an undated row (empty key) are compared as strings, which puts undated
//! rows first in ascending order.

use std::borrow::Cow;
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::event_record::{CulturalEvent, FieldValue};

/// A sortable column of the event table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortField {
    Name,
    Type,
    Publish,
    /// Start of the first schedule.
    StartDateTime,
    Description,
    City,
    /// Any other backend field, by JSON name.
    Raw(String),
}

impl SortField {
    /// Column identifier as used by the backend's table definition.
    pub fn column_key(&self) -> &str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::Publish => "publish",
            Self::StartDateTime => "startDateTime",
            Self::Description => "description",
            Self::City => "city",
            Self::Raw(name) => name.as_str(),
        }
    }

    /// Parse a column identifier. Unknown identifiers become
    /// [`SortField::Raw`].
    pub fn from_column_key(key: &str) -> Self {
        match key {
            "name" => Self::Name,
            "type" => Self::Type,
            "publish" => Self::Publish,
            "startDateTime" | "date" => Self::StartDateTime,
            "description" => Self::Description,
            "city" => Self::City,
            other => Self::Raw(other.to_owned()),
        }
    }
}

/// Sort direction of the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Header glyph for this direction.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "\u{25B2}",
            Self::Descending => "\u{25BC}",
        }
    }
}

/// A comparable value extracted from a row.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    fn empty() -> Self {
        Self::Text(String::new())
    }

    /// The key as a number, if it is one or its text parses as one.
    fn as_number(&self) -> Option<f64> {
        let n = match self {
            Self::Number(n) => *n,
            Self::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return None;
                }
                s.parse::<f64>().ok()?
            }
        };
        n.is_finite().then_some(n)
    }

    /// The key as text; integral numbers render without a fraction.
    fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s.as_str()),
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                Cow::Owned(format!("{}", *n as i64))
            }
            Self::Number(n) => Cow::Owned(n.to_string()),
        }
    }
}

/// Compare two keys: numerically if both are numbers, else as strings.
pub fn compare_keys(a: &SortKey, b: &SortKey) -> Ordering {
    match (a.as_number(), b.as_number()) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.as_text().cmp(&b.as_text()),
    }
}

/// Extract the sort key of `event` for `field`.
pub fn sort_key(event: &CulturalEvent, field: &SortField) -> SortKey {
    match field {
        SortField::Name => SortKey::Text(event.sort_name().to_lowercase()),
        SortField::Type => SortKey::Number(event.kind.priority_rank() as f64),
        SortField::Publish => SortKey::Number(if event.publish { 1.0 } else { 0.0 }),
        SortField::StartDateTime => event
            .primary_schedule()
            .and_then(|s| s.start_epoch_millis())
            .map_or_else(SortKey::empty, |ms| SortKey::Number(ms as f64)),
        SortField::Description => SortKey::Text(event.display_description().to_lowercase()),
        SortField::City => SortKey::Text(event.display_city().to_lowercase()),
        SortField::Raw(name) => match event.field_value(name) {
            FieldValue::Missing => SortKey::empty(),
            FieldValue::Text(s) => SortKey::Text(s.to_lowercase()),
            FieldValue::Number(n) => SortKey::Number(n),
            FieldValue::Bool(b) => SortKey::Number(if b { 1.0 } else { 0.0 }),
            FieldValue::Json(v) => SortKey::Text(v.to_string().to_lowercase()),
        },
    }
}

/// Stable-sort `indices` (into `rows`) by `field` in `direction`.
///
/// Keys are extracted once per row. Descending order reverses the
/// comparator, so ties keep their incoming relative order in both
/// directions.
pub fn sort_indices(
    rows: &[CulturalEvent],
    indices: &mut Vec<usize>,
    field: &SortField,
    direction: SortDirection,
) {
    let mut keyed: Vec<(usize, SortKey)> = indices
        .iter()
        .filter_map(|&i| rows.get(i).map(|row| (i, sort_key(row, field))))
        .collect();

    keyed.sort_by(|(_, a), (_, b)| {
        let ord = compare_keys(a, b);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    indices.clear();
    indices.extend(keyed.into_iter().map(|(i, _)| i));
}
