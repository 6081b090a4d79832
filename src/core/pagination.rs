//! Page-window bookkeeping for the table view.

use serde::{Deserialize, Serialize};

use crate::util::constants::DEFAULT_PAGE_SIZE;

/// Rows per page: a fixed count or every row on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSize {
    Rows(usize),
    All,
}

impl Default for PageSize {
    fn default() -> Self {
        Self::Rows(DEFAULT_PAGE_SIZE)
    }
}

impl PageSize {
    /// Rows per page for a list of `total` rows. Never zero.
    pub fn effective(self, total: usize) -> usize {
        match self {
            Self::Rows(n) => n.max(1),
            Self::All => total.max(1),
        }
    }

    /// Label for the page-size selector.
    pub fn label(self) -> String {
        match self {
            Self::Rows(n) => n.to_string(),
            Self::All => "All".to_owned(),
        }
    }
}

/// Number of pages needed for `total` rows. At least one, even when empty.
pub fn page_count(total: usize, page_size: PageSize) -> usize {
    total.div_ceil(page_size.effective(total)).max(1)
}

/// Clamp a requested page index into `[0, page_count)`.
pub fn clamp_page(requested: usize, total: usize, page_size: PageSize) -> usize {
    requested.min(page_count(total, page_size) - 1)
}

/// The visible window over a filtered and sorted row list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Zero-based page index.
    pub page_index: usize,
    pub page_count: usize,
    /// First row of the page (inclusive).
    pub start: usize,
    /// End of the page (exclusive).
    pub end: usize,
    pub total: usize,
}

impl PageWindow {
    /// Compute the window for `page_index`. The index must already be in
    /// range; out-of-range values yield an empty slice at the end.
    pub fn new(page_index: usize, total: usize, page_size: PageSize) -> Self {
        let size = page_size.effective(total);
        let start = page_index.saturating_mul(size).min(total);
        let end = start.saturating_add(size).min(total);
        Self {
            page_index,
            page_count: page_count(total, page_size),
            start,
            end,
            total,
        }
    }

    /// `"{start+1}-{end} of {total}"`, or `"0 of 0"` for an empty list.
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            "0 of 0".to_owned()
        } else {
            format!("{}-{} of {}", self.start + 1, self.end, self.total)
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.page_count
    }

    /// Slice `items` to this window.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end.min(items.len());
        let start = self.start.min(end);
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(5, PageSize::Rows(2)), 3);
        assert_eq!(page_count(4, PageSize::Rows(2)), 2);
        assert_eq!(page_count(0, PageSize::Rows(2)), 1);
        assert_eq!(page_count(0, PageSize::All), 1);
        assert_eq!(page_count(120, PageSize::All), 1);
    }

    #[test]
    fn test_partial_last_page() {
        let w = PageWindow::new(2, 5, PageSize::Rows(2));
        assert_eq!((w.start, w.end), (4, 5));
        assert!(!w.has_next());
        assert!(w.has_previous());
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(5, 5, PageSize::Rows(2)), 2);
        assert_eq!(clamp_page(1, 0, PageSize::Rows(2)), 0);
    }

    #[test]
    fn test_range_label() {
        assert_eq!(PageWindow::new(0, 0, PageSize::Rows(10)).range_label(), "0 of 0");
        assert_eq!(PageWindow::new(1, 25, PageSize::Rows(10)).range_label(), "11-20 of 25");
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        assert_eq!(PageSize::Rows(0).effective(10), 1);
        assert_eq!(page_count(3, PageSize::Rows(0)), 3);
    }

    #[test]
    fn test_slice() {
        let data = [1, 2, 3, 4, 5];
        let w = PageWindow::new(1, data.len(), PageSize::Rows(2));
        assert_eq!(w.slice(&data), &[3, 4]);
    }
}
