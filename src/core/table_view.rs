//! The tabular view engine: filter → sort → paginate.
//!
//! [`ViewState`] is the user-controlled state of one table (query, sort
//! column and direction, page, page size, hovered header). Every change is
//! followed by [`ViewState::refresh`], which derives a fresh [`TableView`]
//! from the current rows. Nothing here performs I/O or can fail.

use crate::core::event_record::CulturalEvent;
use crate::core::filter::{filter_rows, FilterState};
use crate::core::pagination::{clamp_page, page_count, PageSize, PageWindow};
use crate::core::sort::{sort_indices, SortDirection, SortField};

/// How a column header should draw its sort indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderIndicator {
    /// Column is not sorted and not hovered.
    None,
    /// Column is the active sort column.
    Active(SortDirection),
    /// Column is hovered: the direction a click would apply.
    Preview(SortDirection),
}

/// User-controlled state of a table view.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub filter: FilterState,
    /// Active sort column. `None` keeps filter order.
    pub sort_field: Option<SortField>,
    pub sort_direction: SortDirection,
    /// Zero-based page index; kept within `[0, page_count)` by `refresh`.
    pub page_index: usize,
    pub page_size: PageSize,
    /// Header under the pointer, for the indicator preview.
    pub hover_field: Option<SortField>,
    /// Row count seen by the last `refresh`, used for page navigation.
    last_total: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter: FilterState::default(),
            sort_field: Some(SortField::Name),
            sort_direction: SortDirection::Ascending,
            page_index: 0,
            page_size: PageSize::default(),
            hover_field: None,
            last_total: 0,
        }
    }
}

/// The derived output of a view: what to render this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    /// Indices into the source rows, filtered and sorted (all pages).
    pub indices: Vec<usize>,
    pub window: PageWindow,
    pub sort_field: Option<SortField>,
    pub sort_direction: SortDirection,
}

impl TableView {
    /// Source indices of the rows on the current page.
    pub fn page_indices(&self) -> &[usize] {
        self.window.slice(&self.indices)
    }

    /// The rows on the current page, each with its index into `rows`.
    pub fn page_rows<'a>(&self, rows: &'a [CulturalEvent]) -> Vec<(usize, &'a CulturalEvent)> {
        self.page_indices()
            .iter()
            .filter_map(|&i| rows.get(i).map(|event| (i, event)))
            .collect()
    }

    /// All filtered rows in display order, across every page.
    pub fn all_rows<'a>(&self, rows: &'a [CulturalEvent]) -> Vec<&'a CulturalEvent> {
        self.indices.iter().filter_map(|&i| rows.get(i)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Derive the view of `rows` under `state` without mutating anything.
///
/// An out-of-range `page_index` shows the first page.
pub fn compute_view(rows: &[CulturalEvent], state: &ViewState) -> TableView {
    let mut indices = filter_rows(rows, &state.filter);
    if let Some(field) = &state.sort_field {
        sort_indices(rows, &mut indices, field, state.sort_direction);
    }

    let total = indices.len();
    let page_index = if state.page_index < page_count(total, state.page_size) {
        state.page_index
    } else {
        0
    };

    TableView {
        window: PageWindow::new(page_index, total, state.page_size),
        indices,
        sort_field: state.sort_field.clone(),
        sort_direction: state.sort_direction,
    }
}

impl ViewState {
    /// Recompute the view and write back the reconciled page index.
    pub fn refresh(&mut self, rows: &[CulturalEvent]) -> TableView {
        let view = compute_view(rows, self);
        if view.window.page_index != self.page_index {
            tracing::debug!(
                "Page {} out of range for {} rows, showing first page",
                self.page_index,
                view.window.total
            );
        }
        self.page_index = view.window.page_index;
        self.last_total = view.window.total;
        view
    }

    /// Replace the free-text query and rebuild the search cache.
    pub fn set_filter_text(&mut self, text: &str) {
        self.filter.text_search = text.to_owned();
        self.filter.update_search_cache();
    }

    /// Handle a click on a column header.
    ///
    /// The active column toggles direction; any other column becomes
    /// active in ascending order.
    pub fn click_header(&mut self, field: SortField) {
        if self.sort_field.as_ref() == Some(&field) {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = Some(field);
            self.sort_direction = SortDirection::Ascending;
        }
        tracing::debug!(
            "Sort by {} {:?}",
            self.sort_field.as_ref().map_or("", SortField::column_key),
            self.sort_direction
        );
    }

    /// Set or clear the hovered header.
    pub fn set_hover(&mut self, field: Option<SortField>) {
        self.hover_field = field;
    }

    /// Direction the active column is sorted in, if `field` is active.
    pub fn active_direction(&self, field: &SortField) -> Option<SortDirection> {
        (self.sort_field.as_ref() == Some(field)).then_some(self.sort_direction)
    }

    /// Indicator to draw on `field`'s header.
    ///
    /// A hovered header previews the direction a click would apply.
    pub fn header_indicator(&self, field: &SortField) -> HeaderIndicator {
        let active = self.active_direction(field);
        if self.hover_field.as_ref() == Some(field) {
            let preview = active.map_or(SortDirection::Ascending, SortDirection::toggled);
            return HeaderIndicator::Preview(preview);
        }
        active.map_or(HeaderIndicator::None, HeaderIndicator::Active)
    }

    /// Change the page size and go back to the first page.
    pub fn set_page_size(&mut self, size: PageSize) {
        if self.page_size != size {
            tracing::debug!("Page size {} -> {}", self.page_size.label(), size.label());
        }
        self.page_size = size;
        self.page_index = 0;
    }

    /// Jump to `page`, clamped to the last page.
    pub fn go_to_page(&mut self, page: usize) {
        self.page_index = clamp_page(page, self.last_total, self.page_size);
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page_index.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.page_index.saturating_sub(1));
    }

    pub fn first_page(&mut self) {
        self.page_index = 0;
    }

    pub fn last_page(&mut self) {
        self.go_to_page(usize::MAX);
    }
}
