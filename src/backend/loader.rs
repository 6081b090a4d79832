//! Background catalog loader thread.
//!
//! Opening and parsing a catalog file runs off the UI thread. The result
//! is sent over a [`crossbeam_channel`] which the UI polls each frame with
//! non-blocking `try_recv`.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::Sender;

use crate::backend::{CatalogBackend, JsonFileBackend};
use crate::core::category::NavigationCategory;
use crate::core::event_record::CulturalEvent;

/// Messages sent from the loader thread to the UI thread.
#[derive(Debug)]
pub enum LoaderMessage {
    /// The catalog was read. The backend is handed over for later writes.
    Loaded {
        backend: Box<dyn CatalogBackend>,
        events: Vec<CulturalEvent>,
        categories: Vec<NavigationCategory>,
        elapsed: Duration,
    },
    /// The catalog could not be opened or parsed.
    Error(String),
}

/// Spawn a thread that opens the catalog at `path`.
///
/// Set `cancel` to drop the result of a load that has been superseded.
pub fn spawn_loader_thread(
    path: PathBuf,
    sender: Sender<LoaderMessage>,
    cancel: Arc<AtomicBool>,
) -> std::io::Result<std::thread::JoinHandle<()>> {
    std::thread::Builder::new()
        .name("catalog-loader".into())
        .spawn(move || {
            let message = load_catalog(path);
            if cancel.load(Ordering::Relaxed) {
                tracing::debug!("Catalog load cancelled, dropping result");
                return;
            }
            let _ = sender.send(message);
        })
}

/// Open the catalog and collect its contents into a [`LoaderMessage`].
pub fn load_catalog(path: PathBuf) -> LoaderMessage {
    let start = Instant::now();
    let result = JsonFileBackend::open(&path).and_then(|backend| {
        let events = backend.list_events()?;
        let categories = backend.list_categories()?;
        Ok((backend, events, categories))
    });
    match result {
        Ok((backend, events, categories)) => LoaderMessage::Loaded {
            backend: Box::new(backend),
            events,
            categories,
            elapsed: start.elapsed(),
        },
        Err(e) => {
            tracing::error!("Failed to load catalog {}: {e}", path.display());
            LoaderMessage::Error(e.to_string())
        }
    }
}
