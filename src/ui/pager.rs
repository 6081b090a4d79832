//! Pager strip under the event table.

use eventcatalog::core::pagination::PageSize;
use eventcatalog::util::constants::PAGE_SIZE_OPTIONS;

use crate::app::CatalogApp;
use crate::ui::theme;

impl CatalogApp {
    /// Render page navigation, the row range and the page-size selector.
    pub fn render_pager(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;
        let window = self.view.window;

        ui.horizontal(|ui| {
            if ui
                .add_enabled(window.has_previous(), egui::Button::new("\u{23EE}"))
                .on_hover_text("First page")
                .clicked()
            {
                self.view_state.first_page();
                self.needs_refresh = true;
            }
            if ui
                .add_enabled(window.has_previous(), egui::Button::new("\u{25C0}"))
                .on_hover_text("Previous page (\u{2190})")
                .clicked()
            {
                self.view_state.previous_page();
                self.needs_refresh = true;
            }
            ui.label(format!("Page {} of {}", window.page_index + 1, window.page_count));
            if ui
                .add_enabled(window.has_next(), egui::Button::new("\u{25B6}"))
                .on_hover_text("Next page (\u{2192})")
                .clicked()
            {
                self.view_state.next_page();
                self.needs_refresh = true;
            }
            if ui
                .add_enabled(window.has_next(), egui::Button::new("\u{23ED}"))
                .on_hover_text("Last page")
                .clicked()
            {
                self.view_state.last_page();
                self.needs_refresh = true;
            }

            ui.separator();
            ui.label(egui::RichText::new(window.range_label()).color(theme::text_secondary(dark)));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let current = self.view_state.page_size;
                let mut chosen = current;
                egui::ComboBox::from_id_salt("page_size")
                    .selected_text(current.label())
                    .width(60.0)
                    .show_ui(ui, |ui| {
                        for &n in PAGE_SIZE_OPTIONS {
                            ui.selectable_value(&mut chosen, PageSize::Rows(n), n.to_string());
                        }
                        ui.selectable_value(&mut chosen, PageSize::All, "All");
                    });
                ui.label(egui::RichText::new("Rows per page").color(theme::text_dim(dark)));

                if chosen != current {
                    self.view_state.set_page_size(chosen);
                    self.needs_refresh = true;
                }
            });
        });
    }
}
