//! Bottom status bar: row counts, load time, and loading status.

use eventcatalog::util::time::format_duration;

use crate::app::CatalogApp;
use crate::ui::theme;

impl CatalogApp {
    /// Render the status bar at the bottom of the window.
    ///
    /// Shows: filtered/total counts | load time | status | errors.
    pub fn render_status_bar(&self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;
        ui.horizontal_centered(|ui| {
            // ── Event count ─────────────────────────────────────────
            let filtered = self.view.window.total;
            let total = self.events.len();
            let count_text = if filtered == total {
                format!("{total} events")
            } else {
                format!("Showing {filtered} of {total} events")
            };
            ui.label(egui::RichText::new(count_text).color(theme::text_secondary(dark)));

            ui.separator();

            if let Some(elapsed) = self.load_elapsed {
                ui.label(
                    egui::RichText::new(format!("Loaded in {}", format_duration(elapsed)))
                        .color(theme::text_dim(dark)),
                );
                ui.separator();
            }

            // ── Status ──────────────────────────────────────────────
            if self.is_loading {
                ui.spinner();
            }
            ui.label(egui::RichText::new(&self.status_text).color(theme::text_secondary(dark)));

            if let Some((msg, _)) = &self.export_message {
                ui.separator();
                ui.label(egui::RichText::new(msg).color(theme::success_color(dark)));
            }

            // ── Errors indicator ────────────────────────────────────
            if !self.errors.is_empty() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let err_text = format!("!! {} error(s)", self.errors.len());
                    let response = ui.label(egui::RichText::new(err_text).color(theme::error_color(dark)));
                    response.on_hover_ui(|ui| {
                        for msg in &self.errors {
                            ui.label(
                                egui::RichText::new(msg)
                                    .color(theme::error_color(dark))
                                    .small(),
                            );
                        }
                    });
                });
            }
        });
    }
}
