//! Unified error types for EventCatalog.
//!
//! All fallible operations outside the table view engine return
//! `Result<T, CatalogError>`. The engine itself never fails: malformed rows
//! degrade to neutral sort keys instead.

use crate::core::validation::FieldIssue;

/// Unified error type used throughout EventCatalog.
///
/// Each variant captures enough context to produce an actionable message for
/// the status bar or for log output.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog store could not complete an operation. `context`
    /// describes which operation failed.
    #[error("Catalog backend error: {0}")]
    Backend(String),

    /// An update or delete referenced a record that does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound {
        /// Kind of record, e.g. `"event"` or `"category"`.
        entity: &'static str,
        /// The id that was looked up.
        id: u64,
    },

    /// A mutation was attempted without the required role.
    #[error("Not authorised: {0}")]
    Unauthorized(String),

    /// A submitted form failed validation. Carries every failing field.
    #[error("Validation failed: {}", summarize_issues(.0))]
    Validation(Vec<FieldIssue>),

    /// Export (CSV or JSON) failed.
    #[error("Export failed: {0}")]
    Export(String),

    /// The catalog document could not be (de)serialised.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for I/O errors (catalog reads and writes, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Build a [`CatalogError::Backend`] with the given context string.
///
/// # Example
/// ```ignore
/// backend_err(format!("rename {} failed", path.display()))
/// ```
pub fn backend_err(context: impl Into<String>) -> CatalogError {
    CatalogError::Backend(context.into())
}

/// Join the English messages of all issues into one line.
fn summarize_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| i.message_en.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
