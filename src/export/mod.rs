//! Export of the currently filtered and sorted rows.

pub mod csv_export;
pub mod json_export;

use std::path::Path;

use crate::util::error::{CatalogError, Result};

/// Check that `path` can be written before starting an export: it must
/// name a file, and its parent directory must exist.
pub fn validate_export_path(path: &Path) -> Result<()> {
    if path.file_name().is_none() {
        return Err(CatalogError::Export(format!(
            "{} is not a file path",
            path.display()
        )));
    }
    if path.is_dir() {
        return Err(CatalogError::Export(format!("{} is a directory", path.display())));
    }
    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) if !parent.is_dir() => Err(CatalogError::Export(format!(
            "Directory {} does not exist",
            parent.display()
        ))),
        _ => Ok(()),
    }
}
