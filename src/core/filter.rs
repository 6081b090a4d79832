//! In-memory filter stage of the table view.
//!
//! [`FilterState`] holds the user's filter criteria. The free-text query
//! matches the display name or the one-line description of an event; the
//! remaining criteria are off by default, so a fresh `FilterState` passes
//! every row. Filtering returns indices into the source slice and never
//! touches the rows themselves.

use crate::core::event_record::CulturalEvent;

/// Holds all active filter criteria.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Free-text query typed into the filter box.
    pub text_search: String,

    /// Pre-computed lowercase version of `text_search`. Updated by
    /// [`update_search_cache`](Self::update_search_cache).
    pub text_search_lower: String,

    /// Treat `text_search` as a case-insensitive regular expression.
    pub use_regex: bool,

    /// Compiled form of `text_search` when `use_regex` is set.
    pub compiled_regex: Option<regex::Regex>,

    /// Error from the last regex compilation, shown next to the filter box.
    pub regex_error: Option<String>,

    /// Only events in this navigation category.
    pub category_id: Option<u64>,

    /// Location substring matched against host place, city and country.
    pub location: String,

    /// Pre-computed lowercase version of `location`.
    pub location_lower: String,

    /// Only events flagged for the home page.
    pub home_only: bool,

    /// Only published events.
    pub published_only: bool,
}

impl FilterState {
    /// A filter with only a free-text query set.
    pub fn with_query(query: &str) -> Self {
        let mut state = Self {
            text_search: query.to_owned(),
            ..Self::default()
        };
        state.update_search_cache();
        state
    }

    /// Refresh the cached lowercase strings and the compiled regex.
    ///
    /// Call this after modifying `text_search`, `location` or `use_regex`.
    pub fn update_search_cache(&mut self) {
        self.text_search_lower = self.text_search.to_lowercase();
        self.location_lower = self.location.trim().to_lowercase();
        self.compiled_regex = None;
        self.regex_error = None;

        if self.use_regex && !self.text_search.is_empty() {
            match regex::RegexBuilder::new(&self.text_search)
                .case_insensitive(true)
                .build()
            {
                Ok(re) => self.compiled_regex = Some(re),
                Err(e) => {
                    tracing::debug!("Invalid filter pattern {:?}: {}", self.text_search, e);
                    self.regex_error = Some(e.to_string());
                }
            }
        }
    }

    /// Test whether the given event matches **all** active criteria.
    ///
    /// String criteria are read from the cache built by
    /// [`update_search_cache`](Self::update_search_cache), so edits to
    /// `text_search` take effect only once the cache is refreshed.
    /// Cheap flag checks run before the string searches.
    pub fn matches(&self, event: &CulturalEvent) -> bool {
        if self.published_only && !event.publish {
            return false;
        }
        if self.home_only && !event.show_in_home {
            return false;
        }
        if let Some(id) = self.category_id {
            if event.category_id() != Some(id) {
                return false;
            }
        }
        if !self.location_lower.is_empty() && !self.location_matches(event) {
            return false;
        }
        if !self.text_search_lower.is_empty() && !self.text_matches(event) {
            return false;
        }
        true
    }

    /// Query against display name or display description.
    ///
    /// Regex mode applies only once the pattern has been compiled (or has
    /// failed to compile); until then the cached query matches as plain text.
    fn text_matches(&self, event: &CulturalEvent) -> bool {
        if self.use_regex {
            if let Some(re) = &self.compiled_regex {
                return re.is_match(event.display_name()) || re.is_match(event.display_description());
            }
            if self.regex_error.is_some() {
                return false;
            }
        }
        let q = self.text_search_lower.as_str();
        event.display_name().to_lowercase().contains(q)
            || event.display_description().to_lowercase().contains(q)
    }

    fn location_matches(&self, event: &CulturalEvent) -> bool {
        let q = self.location_lower.as_str();
        [
            &event.host_place_left,
            &event.host_place_right,
            &event.city_left,
            &event.city_right,
            &event.country_left,
            &event.country_right,
        ]
        .into_iter()
        .flatten()
        .any(|v| v.to_lowercase().contains(q))
    }

    /// Returns `true` if all filters are at their default (pass-all) state.
    pub fn is_empty(&self) -> bool {
        self.text_search.is_empty()
            && self.category_id.is_none()
            && self.location.trim().is_empty()
            && !self.home_only
            && !self.published_only
    }

    /// Reset all filters to their default (pass-all) state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Indices of the rows that pass `filter`, in source order.
pub fn filter_rows(rows: &[CulturalEvent], filter: &FilterState) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, event)| filter.matches(event))
        .map(|(i, _)| i)
        .collect()
}

/// Indices of the rows whose display name or description contains `query`,
/// ignoring case. An empty query keeps every row.
pub fn filter_by_query(rows: &[CulturalEvent], query: &str) -> Vec<usize> {
    filter_rows(rows, &FilterState::with_query(query))
}
