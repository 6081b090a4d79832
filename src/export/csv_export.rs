//! CSV export for filtered event rows.
//!
//! Writes the rows in display order with one column per table column.

use std::io::Write;
use std::path::Path;

use crate::core::event_record::CulturalEvent;
use crate::core::schedule_format::{event_date_label, Language};
use crate::util::error::{CatalogError, Result};

/// Header row of an event CSV export.
pub const CSV_COLUMNS: [&str; 7] = ["Name", "Type", "Date", "Description", "Category", "City", "Public"];

/// Write `events` as CSV to any writer.
pub fn write_csv<W: Write>(events: &[&CulturalEvent], writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);

    writer
        .write_record(CSV_COLUMNS)
        .map_err(|e| CatalogError::Export(format!("Failed to write CSV header: {e}")))?;

    for event in events {
        let date = event_date_label(event, Language::English);
        writer
            .write_record([
                event.display_name(),
                event.kind.label(),
                date.as_str(),
                event.display_description(),
                event.category_name(),
                event.display_city(),
                if event.publish { "Yes" } else { "No" },
            ])
            .map_err(|e| CatalogError::Export(format!("Failed to write CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| CatalogError::Export(format!("Failed to flush CSV: {e}")))?;
    Ok(())
}

/// Export `events` to a CSV file at `path`.
///
/// # Errors
/// Returns [`CatalogError::Export`] if the file cannot be created or written.
pub fn export_csv(events: &[&CulturalEvent], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| CatalogError::Export(format!("Failed to create CSV file: {e}")))?;
    write_csv(events, file)?;

    tracing::info!("Exported {} events to CSV: {}", events.len(), path.display());
    Ok(())
}
