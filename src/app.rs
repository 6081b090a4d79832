//! Top-level application state.
//!
//! `CatalogApp` owns the loaded catalog, the table's [`ViewState`], the
//! session's [`AuthContext`] and the channels to background threads.
//! Rendering is delegated to panel sub-modules in `ui/`; the frame loop
//! lives in `app_update.rs` and user actions in `app_actions.rs`.

use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;

use eventcatalog::backend::loader::LoaderMessage;
use eventcatalog::backend::{AuthContext, CatalogBackend};
use eventcatalog::core::category::NavigationCategory;
use eventcatalog::core::event_record::CulturalEvent;
use eventcatalog::core::pagination::PageSize;
use eventcatalog::core::schedule_format::Language;
use eventcatalog::core::sort::{SortDirection, SortField};
use eventcatalog::core::table_view::{compute_view, TableView, ViewState};
use eventcatalog::util::constants;

use crate::ui::category_manager::CategoryManager;
use crate::ui::event_editor::EventEditor;

// ── Storage keys ────────────────────────────────────────────────────────

pub(crate) const KEY_DARK_MODE: &str = "dark_mode";
pub(crate) const KEY_PAGE_SIZE: &str = "page_size";
pub(crate) const KEY_CATALOG_PATH: &str = "catalog_path";
pub(crate) const KEY_SORT_COLUMN: &str = "sort_column";
pub(crate) const KEY_SORT_DIRECTION: &str = "sort_direction";

// ── Enums ───────────────────────────────────────────────────────────────

/// Which tab is active in the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTab {
    Details,
    Media,
}

/// Settings resolved in `main` before the window opens.
#[derive(Debug, Clone)]
pub struct StartupOptions {
    /// Catalog given on the command line, if any.
    pub catalog_path: Option<PathBuf>,
    pub auth: AuthContext,
}

// ── App state ───────────────────────────────────────────────────────────

/// Central application state for EventCatalog.
pub struct CatalogApp {
    // ── Catalog ─────────────────────────────────────────────────
    pub catalog_path: PathBuf,
    /// Store used for writes. `None` until the first load completes.
    pub backend: Option<Box<dyn CatalogBackend>>,
    /// All events in store order.
    pub events: Vec<CulturalEvent>,
    pub categories: Vec<NavigationCategory>,
    pub auth: AuthContext,

    // ── Table view ──────────────────────────────────────────────
    pub view_state: ViewState,
    /// Output of the last refresh.
    pub view: TableView,
    /// Flag: recompute `view` on the next frame.
    pub needs_refresh: bool,
    /// Index into `events` of the selected row.
    pub selected: Option<usize>,
    /// Set by Ctrl+F; the filter box takes focus on its next render.
    pub focus_filter: bool,

    // ── Background loader ───────────────────────────────────────
    pub loader_rx: Option<Receiver<LoaderMessage>>,
    pub cancel_flag: Option<Arc<AtomicBool>>,
    pub is_loading: bool,

    // ── Status ──────────────────────────────────────────────────
    pub status_text: String,
    pub load_elapsed: Option<Duration>,
    /// Errors since the last load, newest last.
    pub errors: Vec<String>,

    // ── Detail panel ────────────────────────────────────────────
    pub detail_tab: DetailTab,
    pub detail_language: Language,
    /// Media groups expanded past the preview count, by kind tag.
    pub expanded_media: Vec<String>,

    // ── Dialogs ─────────────────────────────────────────────────
    pub show_about: bool,
    pub editor: Option<EventEditor>,
    pub category_manager: Option<CategoryManager>,
    /// Event id awaiting delete confirmation.
    pub confirm_delete: Option<u64>,

    // ── Theme ───────────────────────────────────────────────────
    pub dark_mode: bool,

    // ── Export feedback ─────────────────────────────────────────
    pub export_rx: Option<Receiver<String>>,
    pub export_message: Option<(String, Instant)>,

    // ── Filter debounce ─────────────────────────────────────────
    /// Text of the search box, committed to the view state once typing
    /// pauses.
    pub filter_input: String,
    /// Time of the last keystroke in the filter box. The query is applied
    /// once [`constants::FILTER_DEBOUNCE_MS`] have passed.
    pub debounce_timer: Option<Instant>,
}

// ── Construction ────────────────────────────────────────────────────────

impl CatalogApp {
    /// Create the app, restore saved preferences and start loading the
    /// catalog.
    pub fn new(cc: &eframe::CreationContext<'_>, options: StartupOptions) -> Self {
        let mut dark_mode = true;
        let mut view_state = ViewState::default();
        let mut stored_path: Option<PathBuf> = None;

        if let Some(storage) = cc.storage {
            if let Some(dark) = eframe::get_value::<bool>(storage, KEY_DARK_MODE) {
                dark_mode = dark;
            }
            if let Some(size) = eframe::get_value::<PageSize>(storage, KEY_PAGE_SIZE) {
                view_state.set_page_size(size);
            }
            if let Some(key) = eframe::get_value::<String>(storage, KEY_SORT_COLUMN) {
                view_state.sort_field = Some(SortField::from_column_key(&key));
            }
            if let Some(dir) = eframe::get_value::<SortDirection>(storage, KEY_SORT_DIRECTION) {
                view_state.sort_direction = dir;
            }
            stored_path = eframe::get_value::<PathBuf>(storage, KEY_CATALOG_PATH);
        }
        crate::ui::theme::apply(&cc.egui_ctx, dark_mode);

        let catalog_path = options
            .catalog_path
            .or(stored_path)
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_CATALOG_FILE));

        tracing::info!(
            "Session role: {} ({})",
            options.auth.role.label(),
            if options.auth.is_authenticated() { "token present" } else { "no token" }
        );

        let view = compute_view(&[], &view_state);
        let mut app = Self {
            catalog_path,
            backend: None,
            events: Vec::new(),
            categories: Vec::new(),
            auth: options.auth,

            view_state,
            view,
            needs_refresh: false,
            selected: None,
            focus_filter: false,

            loader_rx: None,
            cancel_flag: None,
            is_loading: false,

            status_text: "Starting...".into(),
            load_elapsed: None,
            errors: Vec::new(),

            detail_tab: DetailTab::Details,
            detail_language: Language::English,
            expanded_media: Vec::new(),

            show_about: false,
            editor: None,
            category_manager: None,
            confirm_delete: None,

            dark_mode,

            export_rx: None,
            export_message: None,

            filter_input: String::new(),
            debounce_timer: None,
        };

        app.start_loading();
        app
    }
}

// ── Queries ─────────────────────────────────────────────────────────────

impl CatalogApp {
    /// The selected event, if any.
    pub fn selected_event(&self) -> Option<&CulturalEvent> {
        self.events.get(self.selected?)
    }

    /// The filtered rows in display order, cloned for a background export.
    pub fn filtered_event_list(&self) -> Vec<CulturalEvent> {
        self.view.all_rows(&self.events).into_iter().cloned().collect()
    }

    /// Name of the category with `id`, or `""`.
    pub fn category_label(&self, id: Option<u64>) -> &str {
        id.and_then(|id| self.categories.iter().find(|c| c.id == Some(id)))
            .map_or("", |c| c.name.as_str())
    }

    /// Record a user-visible error and log it.
    pub fn push_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!("{message}");
        if self.errors.len() >= constants::MAX_ERRORS {
            self.errors.remove(0);
        }
        self.errors.push(message);
    }

    /// Show a transient message in the status bar.
    pub fn flash(&mut self, message: impl Into<String>) {
        self.export_message = Some((message.into(), Instant::now()));
    }
}
