//! Canonical data structures for a cultural event and its schedules.
//!
//! Records are deserialised once at the backend boundary from the catalog's
//! JSON field names (`nameOrOrganizer_left`, `description_table_right`, ...)
//! into explicit optional fields. Unknown keys are preserved in
//! [`CulturalEvent::extra`] so a load/save cycle never drops data.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::util::constants::TYPE_PRIORITY;

/// Deserialise `null` the same way as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ── Media kind ──────────────────────────────────────────────────────────

/// The media kind of an event or attachment.
///
/// Serialised as the backend's lowercase tag. Tags this crate does not know
/// are kept verbatim in [`MediaKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaKind {
    Pdf,
    Epub,
    Excel,
    Word,
    #[default]
    Text,
    Photo,
    Video,
    Audio,
    /// Generic attachment the uploader could not classify.
    File,
    Other(String),
}

impl MediaKind {
    /// The backend tag for this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pdf => "pdf",
            Self::Epub => "epub",
            Self::Excel => "excel",
            Self::Word => "word",
            Self::Text => "text",
            Self::Photo => "photo",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::File => "file",
            Self::Other(s) => s.as_str(),
        }
    }

    /// Human-readable label for table cells and badges.
    pub fn label(&self) -> &str {
        match self {
            Self::Pdf => "PDF",
            Self::Epub => "EPUB",
            Self::Excel => "Excel",
            Self::Word => "Word",
            Self::Text => "Text",
            Self::Photo => "Photo",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::File => "File",
            Self::Other(s) => s.as_str(),
        }
    }

    /// Rank of this kind in the Type column's sort order.
    ///
    /// Known kinds take their index in [`TYPE_PRIORITY`]; everything else
    /// ranks at `TYPE_PRIORITY.len() + 1`.
    pub fn priority_rank(&self) -> usize {
        TYPE_PRIORITY
            .iter()
            .position(|t| *t == self.as_str())
            .unwrap_or(TYPE_PRIORITY.len() + 1)
    }
}

impl From<String> for MediaKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "pdf" => Self::Pdf,
            "epub" => Self::Epub,
            "excel" => Self::Excel,
            "word" => Self::Word,
            "text" => Self::Text,
            "photo" => Self::Photo,
            "video" => Self::Video,
            "audio" => Self::Audio,
            "file" => Self::File,
            _ => Self::Other(tag),
        }
    }
}

impl From<MediaKind> for String {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Other(s) => s,
            other => other.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Schedule ────────────────────────────────────────────────────────────

/// One recurring or one-off occurrence of an event.
///
/// Every field is optional; `None` means "not specified", never zero.
/// `day_of_week` counts Monday as 1 and Sunday as 7.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day_of_month: Option<i32>,
    pub day_of_week: Option<i32>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl Schedule {
    /// Returns `true` if no field is set.
    pub fn is_blank(&self) -> bool {
        self.year.is_none()
            && self.month.is_none()
            && self.day_of_month.is_none()
            && self.day_of_week.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
    }

    /// Epoch milliseconds of this schedule's start, if year, month and day
    /// are all present. Time defaults to midnight.
    pub fn start_epoch_millis(&self) -> Option<i64> {
        let (year, month, day) = (self.year?, self.month?, self.day_of_month?);
        crate::util::time::schedule_epoch_millis(year, month, day, self.start_time.as_deref())
    }
}

// ── Attachments and category reference ──────────────────────────────────

/// A media attachment stored by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFile {
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: MediaKind,
    /// Preview image for PDF attachments.
    pub pdf_image_url: Option<String>,
}

/// Reference from an event to its navigation category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: Option<u64>,
    pub name: Option<String>,
}

// ── Cultural event ──────────────────────────────────────────────────────

/// A single cultural event record.
///
/// `_left` fields hold the left-to-right language (English), `_right`
/// fields the right-to-left language (Arabic).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CulturalEvent {
    pub id: Option<u64>,

    #[serde(rename = "nameOrOrganizer_left")]
    pub name_left: Option<String>,
    #[serde(rename = "nameOrOrganizer_right")]
    pub name_right: Option<String>,
    /// Plain name used by older records that predate the bilingual fields.
    pub name: Option<String>,

    pub title_left: Option<String>,
    pub title_right: Option<String>,
    pub about_left: Option<String>,
    pub about_right: Option<String>,
    pub category_left: Option<String>,
    pub category_right: Option<String>,
    pub keyword: Option<String>,

    #[serde(rename = "hostPlace_left")]
    pub host_place_left: Option<String>,
    #[serde(rename = "hostPlace_right")]
    pub host_place_right: Option<String>,
    pub city_left: Option<String>,
    pub city_right: Option<String>,
    pub country_left: Option<String>,
    pub country_right: Option<String>,
    pub address_left: Option<String>,
    pub address_right: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    #[serde(rename = "materialsMedium_left")]
    pub materials_left: Option<String>,
    #[serde(rename = "materialsMedium_right")]
    pub materials_right: Option<String>,

    /// Full description.
    pub description_left: Option<String>,
    pub description_right: Option<String>,
    /// One-line description shown in tables.
    pub description_table_left: Option<String>,
    pub description_table_right: Option<String>,
    /// Short wall text.
    #[serde(rename = "additionalNotes_left")]
    pub notes_left: Option<String>,
    #[serde(rename = "additionalNotes_right")]
    pub notes_right: Option<String>,

    #[serde(
        rename = "usefullExternalLinks",
        default,
        deserialize_with = "null_as_default"
    )]
    pub external_links: Vec<String>,

    #[serde(rename = "navigationCategory")]
    pub navigation_category: Option<CategoryRef>,

    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: MediaKind,

    #[serde(rename = "isShowInHome", default, deserialize_with = "null_as_default")]
    pub show_in_home: bool,

    #[serde(
        rename = "public",
        alias = "publish",
        default,
        deserialize_with = "null_as_default"
    )]
    pub publish: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub schedules: Vec<Schedule>,

    #[serde(rename = "mediaFiles", default, deserialize_with = "null_as_default")]
    pub media_files: Vec<MediaFile>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<String>,

    /// Backend fields this crate does not model.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// A raw field value looked up by its JSON name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Missing,
    Text(&'a str),
    Number(f64),
    Bool(bool),
    Json(&'a serde_json::Value),
}

/// First non-empty (after trimming) of two optional strings.
pub fn first_non_empty<'a>(a: Option<&'a str>, b: Option<&'a str>) -> Option<&'a str> {
    a.filter(|s| !s.trim().is_empty())
        .or_else(|| b.filter(|s| !s.trim().is_empty()))
}

impl CulturalEvent {
    /// Name shown in lists: left name, else right name, else `""`.
    pub fn display_name(&self) -> &str {
        first_non_empty(self.name_left.as_deref(), self.name_right.as_deref()).unwrap_or("")
    }

    /// Name used for sorting: like [`display_name`](Self::display_name)
    /// but falls back to the legacy plain `name` field.
    pub fn sort_name(&self) -> &str {
        first_non_empty(self.name_left.as_deref(), self.name_right.as_deref())
            .or_else(|| self.name.as_deref())
            .unwrap_or("")
    }

    /// One-line description: left, else right, else `""`.
    pub fn display_description(&self) -> &str {
        first_non_empty(
            self.description_table_left.as_deref(),
            self.description_table_right.as_deref(),
        )
        .unwrap_or("")
    }

    /// Title: left, else right, else `""`.
    pub fn display_title(&self) -> &str {
        first_non_empty(self.title_left.as_deref(), self.title_right.as_deref()).unwrap_or("")
    }

    /// City: left, else right, else `""`.
    pub fn display_city(&self) -> &str {
        first_non_empty(self.city_left.as_deref(), self.city_right.as_deref()).unwrap_or("")
    }

    /// Navigation category name, if the backend supplied one.
    pub fn category_name(&self) -> &str {
        self.navigation_category
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .unwrap_or("")
    }

    /// Navigation category id, if any.
    pub fn category_id(&self) -> Option<u64> {
        self.navigation_category.as_ref().and_then(|c| c.id)
    }

    /// The schedule displayed in tables: the first one.
    pub fn primary_schedule(&self) -> Option<&Schedule> {
        self.schedules.first()
    }

    /// Look up a field by its JSON name.
    ///
    /// Used for sorting by columns that have no dedicated key extractor.
    pub fn field_value(&self, json_name: &str) -> FieldValue<'_> {
        fn opt(v: &Option<String>) -> FieldValue<'_> {
            v.as_deref().map_or(FieldValue::Missing, FieldValue::Text)
        }
        fn num(v: Option<f64>) -> FieldValue<'static> {
            v.map_or(FieldValue::Missing, FieldValue::Number)
        }
        match json_name {
            "id" => num(self.id.map(|id| id as f64)),
            "nameOrOrganizer_left" => opt(&self.name_left),
            "nameOrOrganizer_right" => opt(&self.name_right),
            "name" => opt(&self.name),
            "title_left" => opt(&self.title_left),
            "title_right" => opt(&self.title_right),
            "about_left" => opt(&self.about_left),
            "about_right" => opt(&self.about_right),
            "category_left" => opt(&self.category_left),
            "category_right" => opt(&self.category_right),
            "keyword" => opt(&self.keyword),
            "hostPlace_left" => opt(&self.host_place_left),
            "hostPlace_right" => opt(&self.host_place_right),
            "city_left" => opt(&self.city_left),
            "city_right" => opt(&self.city_right),
            "country_left" => opt(&self.country_left),
            "country_right" => opt(&self.country_right),
            "address_left" => opt(&self.address_left),
            "address_right" => opt(&self.address_right),
            "latitude" => num(self.latitude),
            "longitude" => num(self.longitude),
            "materialsMedium_left" => opt(&self.materials_left),
            "materialsMedium_right" => opt(&self.materials_right),
            "description_left" => opt(&self.description_left),
            "description_right" => opt(&self.description_right),
            "description_table_left" => opt(&self.description_table_left),
            "description_table_right" => opt(&self.description_table_right),
            "additionalNotes_left" => opt(&self.notes_left),
            "additionalNotes_right" => opt(&self.notes_right),
            "type" => FieldValue::Text(self.kind.as_str()),
            "isShowInHome" => FieldValue::Bool(self.show_in_home),
            "public" | "publish" => FieldValue::Bool(self.publish),
            other => match self.extra.get(other) {
                None | Some(serde_json::Value::Null) => FieldValue::Missing,
                Some(serde_json::Value::String(s)) => FieldValue::Text(s.as_str()),
                Some(serde_json::Value::Bool(b)) => FieldValue::Bool(*b),
                Some(serde_json::Value::Number(n)) => {
                    n.as_f64().map_or(FieldValue::Missing, FieldValue::Number)
                }
                Some(v) => FieldValue::Json(v),
            },
        }
    }
}
