//! JSON export for filtered event rows.
//!
//! Serialises the rows as a pretty-printed JSON array using the catalog's
//! own field names, so an export can be merged back into a catalog file.

use std::io::Write;
use std::path::Path;

use crate::core::event_record::CulturalEvent;
use crate::util::error::{CatalogError, Result};

/// Export `events` to a JSON file at `path`.
///
/// # Errors
/// Returns [`CatalogError::Export`] if the file cannot be created or written.
pub fn export_json(events: &[&CulturalEvent], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| CatalogError::Export(format!("Failed to create JSON file: {e}")))?;

    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, events)
        .map_err(|e| CatalogError::Export(format!("Failed to write JSON: {e}")))?;

    // BufWriter::drop swallows errors.
    writer
        .flush()
        .map_err(|e| CatalogError::Export(format!("Failed to flush JSON output: {e}")))?;

    tracing::info!("Exported {} events to JSON: {}", events.len(), path.display());
    Ok(())
}
