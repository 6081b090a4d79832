//! User actions for [`CatalogApp`]: export, keyboard shortcuts, catalog
//! writes through the backend, and the About dialog.
//!
//! These are `impl` blocks on the app struct, split out from `app.rs` to
//! keep file sizes manageable.

use std::time::{Duration, Instant};

use eventcatalog::core::category::NavigationCategory;
use eventcatalog::core::event_record::CulturalEvent;
use eventcatalog::export::{self, csv_export, json_export};
use eventcatalog::util::constants;
use eventcatalog::util::error::CatalogError;

use crate::app::CatalogApp;
use crate::ui::category_manager::CategoryManager;
use crate::ui::event_editor::EventEditor;

// ── Export actions ──────────────────────────────────────────────────────

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn label(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Json => "JSON",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl CatalogApp {
    /// Export the filtered rows (all pages, display order) via a native
    /// save dialog.
    ///
    /// Runs on a background thread and reports back through `export_rx`.
    pub fn export(&mut self, format: ExportFormat) {
        if self.export_rx.is_some() {
            self.flash("Export already in progress");
            return;
        }

        let events = self.filtered_event_list();
        if events.is_empty() {
            self.flash("No events to export");
            return;
        }

        let (tx, rx) = crossbeam_channel::bounded::<String>(1);
        self.export_rx = Some(rx);

        let spawned = std::thread::Builder::new()
            .name("catalog-export".into())
            .spawn(move || {
                let Some(path) = rfd::FileDialog::new()
                    .add_filter(format.label(), &[format.extension()])
                    .set_file_name(format!("EventCatalog_export.{}", format.extension()))
                    .save_file()
                else {
                    return;
                };

                let rows: Vec<&CulturalEvent> = events.iter().collect();
                let result = export::validate_export_path(&path).and_then(|()| match format {
                    ExportFormat::Csv => csv_export::export_csv(&rows, &path),
                    ExportFormat::Json => json_export::export_json(&rows, &path),
                });
                let message = match result {
                    Ok(()) => format!("Exported {} events to {}", rows.len(), format.label()),
                    Err(e) => {
                        tracing::error!("{} export failed: {e}", format.label());
                        format!("{} export failed: {e}", format.label())
                    }
                };
                let _ = tx.send(message);
            });

        if let Err(e) = spawned {
            self.export_rx = None;
            self.push_error(format!("Could not start export: {e}"));
        }
    }

    /// Poll the export channel and expire stale status messages.
    pub fn process_export_messages(&mut self) {
        if let Some(rx) = &self.export_rx {
            match rx.try_recv() {
                Ok(msg) => {
                    self.export_message = Some((msg, Instant::now()));
                    self.export_rx = None;
                }
                Err(crossbeam_channel::TryRecvError::Disconnected) => {
                    // Save dialog was cancelled.
                    self.export_rx = None;
                }
                Err(crossbeam_channel::TryRecvError::Empty) => {}
            }
        }
        if let Some((_, at)) = &self.export_message {
            if at.elapsed() > Duration::from_secs(constants::EXPORT_MESSAGE_SECS) {
                self.export_message = None;
            }
        }
    }
}

// ── Keyboard shortcuts ──────────────────────────────────────────────────

impl CatalogApp {
    /// Handle global keyboard shortcuts.
    ///
    /// - **Ctrl+F**: focus the filter box
    /// - **Left/Right**: previous/next page (when no text field has focus)
    /// - **Escape**: close the topmost dialog, else clear the selection
    /// - **F5**: reload the catalog
    pub fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let typing = ctx.wants_keyboard_input();
        ctx.input(|i| {
            if i.modifiers.command && i.key_pressed(egui::Key::F) {
                self.focus_filter = true;
            }

            if i.key_pressed(egui::Key::F5) {
                self.start_loading();
            }

            if !typing && i.key_pressed(egui::Key::ArrowLeft) {
                self.view_state.previous_page();
                self.needs_refresh = true;
            }
            if !typing && i.key_pressed(egui::Key::ArrowRight) {
                self.view_state.next_page();
                self.needs_refresh = true;
            }

            if i.key_pressed(egui::Key::Escape) {
                if self.confirm_delete.is_some() {
                    self.confirm_delete = None;
                } else if self.editor.is_some() {
                    self.editor = None;
                } else if self.category_manager.is_some() {
                    self.category_manager = None;
                } else if self.show_about {
                    self.show_about = false;
                } else {
                    self.selected = None;
                }
            }
        });
    }
}

// ── Event writes ────────────────────────────────────────────────────────

impl CatalogApp {
    /// Open the editor for a new event.
    pub fn open_new_event(&mut self) {
        if !self.auth.can_create_events() {
            self.flash("Your role cannot create events");
            return;
        }
        self.editor = Some(EventEditor::for_new());
    }

    /// Open the editor on the selected event.
    pub fn open_edit_selected(&mut self) {
        if !self.auth.can_edit_events() {
            self.flash("Your role cannot edit events");
            return;
        }
        if let Some(event) = self.selected_event() {
            self.editor = Some(EventEditor::for_existing(event));
        }
    }

    /// Validate the open editor and create or update through the backend.
    pub fn save_event_editor(&mut self) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        editor.error = None;
        editor.issues.clear();
        let event = match editor.build() {
            Ok(event) => event,
            Err(issues) => {
                editor.issues = issues;
                return;
            }
        };
        let is_new = editor.is_new;

        let Some(backend) = self.backend.as_mut() else {
            self.push_error("No catalog is loaded");
            return;
        };
        let result = if is_new {
            backend.create_event(&self.auth, event)
        } else {
            backend.update_event(&self.auth, event)
        };

        match result {
            Ok(saved) => {
                self.editor = None;
                self.flash(if is_new { "Event created" } else { "Event saved" });
                self.reload_from_backend();
                self.selected = self.events.iter().position(|e| e.id == saved.id);
            }
            Err(CatalogError::Validation(issues)) => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.issues = issues;
                }
            }
            Err(e) => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.error = Some(e.to_string());
                }
                self.push_error(format!("Saving event failed: {e}"));
            }
        }
    }

    /// Ask for confirmation before deleting the selected event.
    pub fn request_delete_selected(&mut self) {
        if !self.auth.can_edit_events() {
            self.flash("Your role cannot delete events");
            return;
        }
        self.confirm_delete = self.selected_event().and_then(|e| e.id);
    }

    pub fn delete_event(&mut self, id: u64) {
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        match backend.delete_event(&self.auth, id) {
            Ok(()) => {
                self.selected = None;
                self.flash("Event deleted");
                self.reload_from_backend();
            }
            Err(e) => self.push_error(format!("Deleting event {id} failed: {e}")),
        }
    }

    /// Render the delete confirmation window.
    pub fn render_delete_confirmation(&mut self, ctx: &egui::Context) {
        let Some(id) = self.confirm_delete else {
            return;
        };
        let name = self
            .events
            .iter()
            .find(|e| e.id == Some(id))
            .map(|e| e.display_name().to_owned())
            .unwrap_or_default();

        let mut confirmed = false;
        let mut cancelled = false;
        egui::Window::new("Delete event")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([300.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!("Delete \"{name}\"? This cannot be undone."));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui
                        .button(egui::RichText::new("Delete").color(crate::ui::theme::error_color(self.dark_mode)))
                        .clicked()
                    {
                        confirmed = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if confirmed {
            self.confirm_delete = None;
            self.delete_event(id);
        } else if cancelled {
            self.confirm_delete = None;
        }
    }
}

// ── Category writes ─────────────────────────────────────────────────────

impl CatalogApp {
    pub fn open_category_manager(&mut self) {
        self.category_manager = Some(CategoryManager::default());
    }

    /// Create or update the category in the manager's form.
    pub fn save_category(&mut self, category: NavigationCategory) {
        let Some(backend) = self.backend.as_mut() else {
            self.push_error("No catalog is loaded");
            return;
        };
        let is_new = category.id.is_none();
        let result = if is_new {
            backend.create_category(&self.auth, category)
        } else {
            backend.update_category(&self.auth, category)
        };

        match result {
            Ok(saved) => {
                self.flash(format!("Category \"{}\" saved", saved.name));
                self.reload_from_backend();
                if let Some(manager) = self.category_manager.as_mut() {
                    manager.edit(&saved);
                }
            }
            Err(CatalogError::Validation(issues)) => {
                if let Some(manager) = self.category_manager.as_mut() {
                    manager.issues = issues;
                }
            }
            Err(e) => {
                if let Some(manager) = self.category_manager.as_mut() {
                    manager.error = Some(e.to_string());
                }
                self.push_error(format!("Saving category failed: {e}"));
            }
        }
    }

    pub fn delete_category(&mut self, id: u64) {
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        match backend.delete_category(&self.auth, id) {
            Ok(()) => {
                if self.view_state.filter.category_id == Some(id) {
                    self.view_state.filter.category_id = None;
                }
                if let Some(manager) = self.category_manager.as_mut() {
                    *manager = CategoryManager::default();
                }
                self.flash("Category deleted");
                self.reload_from_backend();
            }
            Err(e) => {
                if let Some(manager) = self.category_manager.as_mut() {
                    manager.error = Some(e.to_string());
                }
                self.push_error(format!("Deleting category {id} failed: {e}"));
            }
        }
    }
}

// ── About dialog ────────────────────────────────────────────────────────

impl CatalogApp {
    /// Render the About dialog window.
    pub fn render_about_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_about {
            return;
        }

        let dark = self.dark_mode;
        let mut open = true;
        egui::Window::new("About")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([320.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(constants::APP_NAME)
                            .color(crate::ui::theme::accent(dark))
                            .strong()
                            .size(20.0),
                    );
                    ui.label(
                        egui::RichText::new(format!("v{}", constants::APP_VERSION))
                            .color(crate::ui::theme::text_secondary(dark)),
                    );
                    ui.add_space(8.0);
                    ui.label("Browse and edit a bilingual cultural-events catalog");
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(self.catalog_path.display().to_string())
                            .color(crate::ui::theme::text_dim(dark))
                            .small(),
                    );
                    ui.add_space(8.0);
                });
            });

        if !open {
            self.show_about = false;
        }
    }
}
