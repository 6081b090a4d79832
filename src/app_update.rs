//! Frame-by-frame update loop and catalog loading.
//!
//! Contains the [`eframe::App`] implementation for `CatalogApp`, plus the
//! loader-message processing and view recomputation the loop depends on.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use eventcatalog::backend::loader::{self, LoaderMessage};
use eventcatalog::util::constants;

use crate::app::{
    CatalogApp, KEY_CATALOG_PATH, KEY_DARK_MODE, KEY_PAGE_SIZE, KEY_SORT_COLUMN, KEY_SORT_DIRECTION,
};

// ── Core logic ──────────────────────────────────────────────────────────

impl CatalogApp {
    /// Start (or restart) loading the catalog at `catalog_path`.
    ///
    /// Cancels any in-progress load and spawns a new loader thread. The
    /// current rows stay visible until the new catalog arrives.
    pub fn start_loading(&mut self) {
        self.cancel_loading();

        let (tx, rx) = crossbeam_channel::bounded::<LoaderMessage>(constants::CHANNEL_BOUND);
        let cancel = Arc::new(AtomicBool::new(false));

        if let Err(e) = loader::spawn_loader_thread(self.catalog_path.clone(), tx, cancel.clone()) {
            self.push_error(format!("Could not start catalog loader: {e}"));
            self.status_text = "Load failed".into();
            return;
        }

        self.loader_rx = Some(rx);
        self.cancel_flag = Some(cancel);
        self.is_loading = true;
        self.status_text = format!("Loading {}\u{2026}", self.catalog_path.display());
    }

    /// Request cancellation of the current loader thread.
    pub fn cancel_loading(&mut self) {
        if let Some(flag) = &self.cancel_flag {
            flag.store(true, Ordering::Relaxed);
        }
        self.is_loading = false;
        self.loader_rx = None;
        self.cancel_flag = None;
    }

    /// Drain the loader channel. Called once per frame, never blocks.
    pub(crate) fn process_messages(&mut self) {
        let rx = match &self.loader_rx {
            Some(rx) => rx.clone(),
            None => return,
        };

        while let Ok(msg) = rx.try_recv() {
            self.is_loading = false;
            self.loader_rx = None;
            self.cancel_flag = None;
            match msg {
                LoaderMessage::Loaded {
                    backend,
                    events,
                    categories,
                    elapsed,
                } => {
                    tracing::info!(
                        "Load complete: {} events, {} categories in {:?}",
                        events.len(),
                        categories.len(),
                        elapsed
                    );
                    self.status_text = format!("Loaded {} events", events.len());
                    self.backend = Some(backend);
                    self.events = events;
                    self.categories = categories;
                    self.load_elapsed = Some(elapsed);
                    self.selected = None;
                    self.errors.clear();
                    self.needs_refresh = true;
                }
                LoaderMessage::Error(error) => {
                    self.status_text = "Load failed".into();
                    self.backend = None;
                    self.events.clear();
                    self.categories.clear();
                    self.selected = None;
                    self.push_error(error);
                    self.needs_refresh = true;
                }
            }
        }
    }

    /// Re-run filter, sort and pagination over the current rows.
    pub fn refresh_view(&mut self) {
        self.view = self.view_state.refresh(&self.events);

        if let Some(sel) = self.selected {
            if !self.view.indices.contains(&sel) {
                self.selected = None;
            }
        }
        self.needs_refresh = false;
    }

    /// Replace the rows after a write, keeping the view state.
    pub(crate) fn reload_from_backend(&mut self) {
        let Some(backend) = &self.backend else {
            return;
        };
        let rows = backend.list_events().and_then(|events| {
            backend.list_categories().map(|categories| (events, categories))
        });
        match rows {
            Ok((events, categories)) => {
                self.events = events;
                self.categories = categories;
                self.needs_refresh = true;
            }
            Err(e) => self.push_error(format!("Reading catalog failed: {e}")),
        }
    }
}

// ── eframe::App implementation ──────────────────────────────────────────

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 1. Messages from the loader thread
        self.process_messages();

        // 2. Export completion messages
        self.process_export_messages();

        // 3. Debounce: apply the query after FILTER_DEBOUNCE_MS of inactivity
        if let Some(timer) = self.debounce_timer {
            let debounce = std::time::Duration::from_millis(constants::FILTER_DEBOUNCE_MS);
            let elapsed = timer.elapsed();
            if elapsed >= debounce {
                self.view_state.set_filter_text(&self.filter_input);
                self.needs_refresh = true;
                self.debounce_timer = None;
            } else {
                ctx.request_repaint_after(debounce - elapsed);
            }
        }

        // 4. Keyboard shortcuts may change page or selection
        self.handle_keyboard_shortcuts(ctx);

        // 5. Recompute the view if anything changed
        if self.needs_refresh {
            self.refresh_view();
        }

        // 6. Keep repainting while loading (to poll messages)
        if self.is_loading || self.export_rx.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // ── Top toolbar ─────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .exact_height(38.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                self.render_toolbar(ui);
            });

        // ── Bottom status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(28.0)
            .show(ctx, |ui| {
                self.render_status_bar(ui);
            });

        // ── Bottom detail panel ─────────────────────────────────────
        egui::TopBottomPanel::bottom("detail_panel")
            .resizable(true)
            .default_height(260.0)
            .min_height(100.0)
            .show(ctx, |ui| {
                self.render_detail_panel(ui);
            });

        // ── Left filter panel ───────────────────────────────────────
        egui::SidePanel::left("filter_panel")
            .resizable(true)
            .default_width(230.0)
            .min_width(180.0)
            .max_width(380.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.render_filter_panel(ui);
                });
            });

        // ── Central event table and pager ───────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::TopBottomPanel::bottom("pager")
                .frame(egui::Frame::new())
                .show_inside(ui, |ui| {
                    ui.add_space(4.0);
                    self.render_pager(ui);
                });
            self.render_event_table(ui);
        });

        // ── Floating windows ────────────────────────────────────────
        self.render_event_editor(ctx);
        self.render_category_manager(ctx);
        self.render_delete_confirmation(ctx);
        self.render_about_dialog(ctx);

        // Windows may have changed page size or rows
        if self.needs_refresh {
            ctx.request_repaint();
        }
    }

    /// Match the GPU clear colour to the themed background.
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        if self.dark_mode {
            crate::ui::theme::BG_DARK.to_normalized_gamma_f32()
        } else {
            crate::ui::theme::BG_LIGHT.to_normalized_gamma_f32()
        }
    }

    /// Persist user preferences to eframe storage on shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, KEY_DARK_MODE, &self.dark_mode);
        eframe::set_value(storage, KEY_PAGE_SIZE, &self.view_state.page_size);
        eframe::set_value(storage, KEY_CATALOG_PATH, &self.catalog_path);
        if let Some(field) = &self.view_state.sort_field {
            eframe::set_value(storage, KEY_SORT_COLUMN, &field.column_key().to_owned());
        }
        eframe::set_value(storage, KEY_SORT_DIRECTION, &self.view_state.sort_direction);
    }
}
