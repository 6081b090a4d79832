//! Top toolbar: reload, catalog picker, editing actions and export.

use crate::app::CatalogApp;
use crate::app_actions::ExportFormat;
use crate::ui::theme;

impl CatalogApp {
    /// Render the top toolbar within the given `Ui` region.
    pub fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;
        ui.horizontal_centered(|ui| {
            ui.spacing_mut().item_spacing.x = 8.0;

            // ── Reload / Cancel ─────────────────────────────────────
            if self.is_loading {
                ui.spinner();
                if ui.button("\u{23F9} Stop").clicked() {
                    self.cancel_loading();
                }
            } else if ui
                .button("\u{1F504} Reload")
                .on_hover_text("Re-read the catalog file (F5)")
                .clicked()
            {
                self.start_loading();
            }

            if ui
                .button("\u{1F4C2} Open...")
                .on_hover_text("Open another catalog file")
                .clicked()
            {
                self.pick_catalog_file();
            }

            ui.separator();

            // ── Editing ─────────────────────────────────────────────
            let has_backend = self.backend.is_some();
            let has_selection = self.selected.is_some();
            if ui
                .add_enabled(
                    has_backend && self.auth.can_create_events(),
                    egui::Button::new("\u{2795} New event"),
                )
                .clicked()
            {
                self.open_new_event();
            }
            if ui
                .add_enabled(
                    has_backend && has_selection && self.auth.can_edit_events(),
                    egui::Button::new("\u{270F} Edit"),
                )
                .clicked()
            {
                self.open_edit_selected();
            }
            if ui
                .add_enabled(
                    has_backend && has_selection && self.auth.can_edit_events(),
                    egui::Button::new("\u{1F5D1} Delete"),
                )
                .clicked()
            {
                self.request_delete_selected();
            }
            if ui
                .add_enabled(has_backend, egui::Button::new("\u{1F3F7} Categories"))
                .clicked()
            {
                self.open_category_manager();
            }

            ui.separator();

            // ── Export dropdown ─────────────────────────────────────
            ui.menu_button("\u{1F4E4} Export", |ui| {
                if ui.button("Export to CSV...").clicked() {
                    self.export(ExportFormat::Csv);
                    ui.close_menu();
                }
                if ui.button("Export to JSON...").clicked() {
                    self.export(ExportFormat::Json);
                    ui.close_menu();
                }
            });

            // ── Right-aligned title, about, theme toggle ────────────
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add(egui::Button::new(egui::RichText::new("\u{2139}").size(14.0)).min_size(egui::vec2(22.0, 22.0)))
                    .on_hover_text("About EventCatalog")
                    .clicked()
                {
                    self.show_about = true;
                }

                let (icon, tip) = if dark {
                    ("\u{2600}", "Switch to light mode")
                } else {
                    ("\u{1F319}", "Switch to dark mode")
                };
                if ui
                    .add(egui::Button::new(egui::RichText::new(icon).size(14.0)).min_size(egui::vec2(22.0, 22.0)))
                    .on_hover_text(tip)
                    .clicked()
                {
                    self.dark_mode = !self.dark_mode;
                    theme::apply(ui.ctx(), self.dark_mode);
                }

                ui.label(
                    egui::RichText::new(format!("Role: {}", self.auth.role.label()))
                        .color(theme::text_secondary(dark))
                        .small(),
                );
                ui.label(
                    egui::RichText::new("EventCatalog")
                        .color(theme::accent(dark))
                        .strong()
                        .size(16.0),
                );
            });
        });
    }

    /// Ask for a catalog file and load it.
    ///
    /// The dialog is modal, so this blocks the frame until it closes.
    fn pick_catalog_file(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Catalog", &["json"])
            .set_title("Open catalog")
            .pick_file();
        if let Some(path) = picked {
            tracing::info!("Switching catalog to {}", path.display());
            self.catalog_path = path;
            self.backend = None;
            self.start_loading();
        }
    }
}
