//! Integration tests for error type construction and display.

use eventcatalog::core::validation::{validate_category, FieldIssue};
use eventcatalog::core::category::NavigationCategory;
use eventcatalog::util::error::{backend_err, CatalogError};

#[test]
fn backend_error_preserves_context() {
    let err = backend_err("replacing catalog.json: permission denied");
    let msg = err.to_string();
    assert!(msg.contains("catalog.json"), "Should contain context: {msg}");
    assert!(msg.starts_with("Catalog backend error"), "Unexpected prefix: {msg}");
}

#[test]
fn not_found_names_entity_and_id() {
    let err = CatalogError::NotFound { entity: "event", id: 17 };
    assert_eq!(err.to_string(), "event with id 17 not found");
}

#[test]
fn validation_error_lists_english_messages() {
    let issues = validate_category(&NavigationCategory::default());
    assert!(!issues.is_empty());
    let err = CatalogError::Validation(issues);
    let msg = err.to_string();
    assert!(msg.starts_with("Validation failed:"), "Unexpected message: {msg}");
    assert!(msg.to_lowercase().contains("name"), "Should mention the field: {msg}");
}

#[test]
fn field_issue_shows_both_languages() {
    let issues = validate_category(&NavigationCategory::default());
    let issue: &FieldIssue = &issues[0];
    let text = issue.bilingual();
    assert!(text.contains(&issue.message_en));
    assert!(text.contains(&issue.message_ar));
}

#[test]
fn export_error_preserves_message() {
    let err = CatalogError::Export("disk full".into());
    let msg = err.to_string();
    assert!(msg.contains("disk full"), "Should contain detail: {msg}");
}

#[test]
fn io_error_converts() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no access");
    let err: CatalogError = io_err.into();
    let msg = err.to_string();
    assert!(msg.contains("no access"), "Should preserve IO error: {msg}");
}

#[test]
fn json_error_converts() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: CatalogError = json_err.into();
    assert!(err.to_string().starts_with("JSON error"));
}

#[test]
fn error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    // Errors cross the loader and export threads.
    assert_send_sync::<CatalogError>();
}
