//! Catalog store backed by a single JSON document on disk.
//!
//! The whole catalog is read into memory on open. Each successful mutation
//! rewrites the file through a temporary sibling and a rename, so a crash
//! mid-write never leaves a truncated catalog behind.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::backend::{AuthContext, CatalogBackend};
use crate::core::category::NavigationCategory;
use crate::core::event_record::{CategoryRef, CulturalEvent};
use crate::core::media::derive_event_kind;
use crate::core::validation::{
    check_unique_name, into_result, normalize_schedules, validate_category, validate_event,
};
use crate::util::error::{backend_err, CatalogError, Result};

/// On-disk layout of a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub events: Vec<CulturalEvent>,
    #[serde(default)]
    pub categories: Vec<NavigationCategory>,
}

/// A [`CatalogBackend`] over one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
    doc: CatalogDocument,
}

fn next_id(ids: impl Iterator<Item = Option<u64>>) -> u64 {
    ids.flatten().max().map_or(1, |max| max + 1)
}

impl JsonFileBackend {
    /// Open `path`. A missing file yields an empty catalog that is created
    /// on the first save.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let doc = match std::fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => CatalogDocument::default(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("Catalog {} does not exist yet, starting empty", path.display());
                CatalogDocument::default()
            }
            Err(e) => return Err(e.into()),
        };
        tracing::info!(
            "Opened catalog {} ({} events, {} categories)",
            path.display(),
            doc.events.len(),
            doc.categories.len()
        );
        Ok(Self { path, doc })
    }

    /// A backend over an in-memory document, written to `path` on save.
    pub fn with_document(path: impl Into<PathBuf>, doc: CatalogDocument) -> Self {
        Self {
            path: path.into(),
            doc,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &CatalogDocument {
        &self.doc
    }

    /// Write `doc` to disk, then adopt it as the current state.
    fn commit(&mut self, doc: CatalogDocument) -> Result<()> {
        write_atomically(&self.path, &doc)?;
        self.doc = doc;
        Ok(())
    }

    /// Fill in the category name from the catalog's categories and fail if
    /// the referenced category does not exist.
    fn resolve_category(&self, event: &mut CulturalEvent) -> Result<()> {
        let Some(id) = event.category_id() else {
            return Ok(());
        };
        let category = self
            .doc
            .categories
            .iter()
            .find(|c| c.id == Some(id))
            .ok_or(CatalogError::NotFound { entity: "category", id })?;
        event.navigation_category = Some(CategoryRef {
            id: Some(id),
            name: Some(category.name.clone()),
        });
        Ok(())
    }

    fn prepare_event(&self, event: &mut CulturalEvent) -> Result<()> {
        normalize_schedules(&mut event.schedules);
        into_result(validate_event(event))?;
        self.resolve_category(event)?;
        if !event.media_files.is_empty() {
            event.kind = derive_event_kind(&event.media_files);
        }
        Ok(())
    }
}

/// Serialise `doc` to a temporary file beside `path` and rename it over
/// `path`.
pub fn write_atomically(path: &Path, doc: &CatalogDocument) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let json = serde_json::to_string_pretty(doc)?;
    std::fs::write(&tmp, json)
        .map_err(|e| backend_err(format!("writing {}: {e}", tmp.display())))?;
    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        backend_err(format!("replacing {}: {e}", path.display()))
    })?;
    tracing::debug!("Saved catalog to {}", path.display());
    Ok(())
}

impl CatalogBackend for JsonFileBackend {
    fn list_events(&self) -> Result<Vec<CulturalEvent>> {
        Ok(self.doc.events.clone())
    }

    fn get_event(&self, id: u64) -> Result<CulturalEvent> {
        self.doc
            .events
            .iter()
            .find(|e| e.id == Some(id))
            .cloned()
            .ok_or(CatalogError::NotFound { entity: "event", id })
    }

    fn create_event(&mut self, auth: &AuthContext, mut event: CulturalEvent) -> Result<CulturalEvent> {
        auth.require_create_event()?;
        self.prepare_event(&mut event)?;

        let mut doc = self.doc.clone();
        event.id = Some(next_id(doc.events.iter().map(|e| e.id)));
        doc.events.push(event.clone());
        self.commit(doc)?;

        tracing::info!("Created event {:?} ({})", event.id, event.display_name());
        Ok(event)
    }

    fn update_event(&mut self, auth: &AuthContext, mut event: CulturalEvent) -> Result<CulturalEvent> {
        auth.require_edit_event()?;
        let id = event
            .id
            .ok_or_else(|| backend_err("cannot update an event without an id"))?;
        self.prepare_event(&mut event)?;

        let mut doc = self.doc.clone();
        let slot = doc
            .events
            .iter_mut()
            .find(|e| e.id == Some(id))
            .ok_or(CatalogError::NotFound { entity: "event", id })?;
        *slot = event.clone();
        self.commit(doc)?;

        tracing::info!("Updated event {id}");
        Ok(event)
    }

    fn delete_event(&mut self, auth: &AuthContext, id: u64) -> Result<()> {
        auth.require_edit_event()?;
        let mut doc = self.doc.clone();
        let before = doc.events.len();
        doc.events.retain(|e| e.id != Some(id));
        if doc.events.len() == before {
            return Err(CatalogError::NotFound { entity: "event", id });
        }
        self.commit(doc)?;
        tracing::info!("Deleted event {id}");
        Ok(())
    }

    fn list_categories(&self) -> Result<Vec<NavigationCategory>> {
        Ok(self.doc.categories.clone())
    }

    fn create_category(
        &mut self,
        auth: &AuthContext,
        mut category: NavigationCategory,
    ) -> Result<NavigationCategory> {
        auth.require_manage_categories()?;
        category.name = category.name.trim().to_owned();
        let mut issues = validate_category(&category);
        issues.extend(check_unique_name(&category, &self.doc.categories));
        into_result(issues)?;

        let mut doc = self.doc.clone();
        category.id = Some(next_id(doc.categories.iter().map(|c| c.id)));
        doc.categories.push(category.clone());
        self.commit(doc)?;

        tracing::info!("Created category {:?} ({})", category.id, category.name);
        Ok(category)
    }

    fn update_category(
        &mut self,
        auth: &AuthContext,
        mut category: NavigationCategory,
    ) -> Result<NavigationCategory> {
        auth.require_manage_categories()?;
        let id = category
            .id
            .ok_or_else(|| backend_err("cannot update a category without an id"))?;
        category.name = category.name.trim().to_owned();
        let mut issues = validate_category(&category);
        issues.extend(check_unique_name(&category, &self.doc.categories));
        into_result(issues)?;

        let mut doc = self.doc.clone();
        let slot = doc
            .categories
            .iter_mut()
            .find(|c| c.id == Some(id))
            .ok_or(CatalogError::NotFound { entity: "category", id })?;
        *slot = category.clone();

        // Keep the denormalised name on events in step with the category.
        for event in doc.events.iter_mut() {
            if let Some(r) = event.navigation_category.as_mut().filter(|r| r.id == Some(id)) {
                r.name = Some(category.name.clone());
            }
        }
        self.commit(doc)?;

        tracing::info!("Updated category {id}");
        Ok(category)
    }

    fn delete_category(&mut self, auth: &AuthContext, id: u64) -> Result<()> {
        auth.require_manage_categories()?;
        if !self.doc.categories.iter().any(|c| c.id == Some(id)) {
            return Err(CatalogError::NotFound { entity: "category", id });
        }
        let in_use = self.doc.events.iter().filter(|e| e.category_id() == Some(id)).count();
        if in_use > 0 {
            return Err(backend_err(format!(
                "category {id} is still used by {in_use} event(s)"
            )));
        }

        let mut doc = self.doc.clone();
        doc.categories.retain(|c| c.id != Some(id));
        self.commit(doc)?;
        tracing::info!("Deleted category {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id() {
        assert_eq!(next_id(std::iter::empty()), 1);
        assert_eq!(next_id([Some(3), None, Some(7)].into_iter()), 8);
    }

    #[test]
    fn test_document_defaults() {
        let doc: CatalogDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.events.is_empty());
        assert!(doc.categories.is_empty());
    }
}
