//! Validates that compile-time constants are internally consistent.
#![allow(clippy::assertions_on_constants)]

use eventcatalog::util::constants::*;

#[test]
fn default_page_size_is_offered() {
    assert!(DEFAULT_PAGE_SIZE > 0);
    assert!(
        PAGE_SIZE_OPTIONS.contains(&DEFAULT_PAGE_SIZE),
        "DEFAULT_PAGE_SIZE should appear in the page-size selector"
    );
}

#[test]
fn page_size_options_are_ascending() {
    assert!(PAGE_SIZE_OPTIONS.windows(2).all(|w| w[0] < w[1]));
    assert!(PAGE_SIZE_OPTIONS.iter().all(|&n| n > 0));
}

#[test]
fn type_priority_has_no_duplicates() {
    for (i, a) in TYPE_PRIORITY.iter().enumerate() {
        assert!(!TYPE_PRIORITY[i + 1..].contains(a), "duplicate kind {a}");
    }
}

#[test]
fn channel_bound_is_positive() {
    assert!(CHANNEL_BOUND > 0, "CHANNEL_BOUND must be > 0");
}

#[test]
fn max_errors_is_bounded() {
    assert!(MAX_ERRORS > 0, "MAX_ERRORS must be > 0");
    assert!(MAX_ERRORS <= 10_000, "MAX_ERRORS should be bounded");
}

#[test]
fn debounce_is_reasonable() {
    assert!(FILTER_DEBOUNCE_MS >= 50, "Debounce too low");
    assert!(FILTER_DEBOUNCE_MS <= 2000, "Debounce too high");
}

#[test]
fn media_preview_shows_something() {
    assert!(MEDIA_GROUP_PREVIEW >= 1);
}

#[test]
fn app_metadata_is_populated() {
    assert!(!APP_NAME.is_empty(), "APP_NAME must not be empty");
    assert!(!APP_VERSION.is_empty(), "APP_VERSION must not be empty");
    assert!(DEFAULT_CATALOG_FILE.ends_with(".json"));
}

#[test]
fn log_rotation_limit_is_sane() {
    assert!(MAX_LOG_FILE_SIZE >= 1024 * 1024);
    assert!(LOG_FILE_NAME.ends_with(".log"));
}
