//! Left-side filter panel: text query, category list, location and flags.

use eventcatalog::core::category::navbar_categories;

use crate::app::CatalogApp;
use crate::ui::theme;

impl CatalogApp {
    /// Render the filter panel within the given `Ui` region.
    ///
    /// Typing in the search box is debounced; every other control applies
    /// immediately.
    pub fn render_filter_panel(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;
        ui.heading(egui::RichText::new("\u{1F50D} Filters").color(theme::accent(dark)));
        ui.separator();

        let mut changed = false;

        // ── Text search ─────────────────────────────────────────────
        ui.label("Search");
        let search = ui.add(
            egui::TextEdit::singleline(&mut self.filter_input)
                .hint_text("Name or description")
                .desired_width(f32::INFINITY),
        );
        if self.focus_filter {
            search.request_focus();
            self.focus_filter = false;
        }
        if search.changed() {
            self.debounce_timer = Some(std::time::Instant::now());
        }
        search.on_hover_text("Matches the event name or its one-line description (Ctrl+F)");

        if ui
            .checkbox(&mut self.view_state.filter.use_regex, "Regular expression")
            .changed()
        {
            changed = true;
        }
        if let Some(err) = &self.view_state.filter.regex_error {
            ui.label(
                egui::RichText::new(format!("Invalid pattern: {err}"))
                    .color(theme::error_color(dark))
                    .small(),
            );
        }
        ui.add_space(6.0);

        // ── Categories ──────────────────────────────────────────────
        ui.label("Category");
        if ui
            .selectable_label(self.view_state.filter.category_id.is_none(), "All categories")
            .clicked()
        {
            self.view_state.filter.category_id = None;
            changed = true;
        }
        let current = self.view_state.filter.category_id;
        let mut picked = None;
        for category in navbar_categories(&self.categories) {
            let selected = category.id.is_some() && current == category.id;
            if ui.selectable_label(selected, category.display_header()).clicked() {
                picked = Some(category.id);
            }
        }
        let hidden: Vec<_> = self.categories.iter().filter(|c| !c.show_in_navbar).collect();
        if !hidden.is_empty() {
            egui::CollapsingHeader::new(
                egui::RichText::new(format!("Not in menu ({})", hidden.len())).color(theme::text_dim(dark)),
            )
            .id_salt("hidden_categories")
            .show(ui, |ui| {
                for category in hidden {
                    let selected = category.id.is_some() && current == category.id;
                    if ui.selectable_label(selected, category.display_header()).clicked() {
                        picked = Some(category.id);
                    }
                }
            });
        }
        if let Some(id) = picked {
            self.view_state.filter.category_id = id;
            changed = true;
        }
        ui.add_space(6.0);

        // ── Location ────────────────────────────────────────────────
        ui.label("Location");
        if ui
            .add(
                egui::TextEdit::singleline(&mut self.view_state.filter.location)
                    .hint_text("Place, city or country")
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            changed = true;
        }
        ui.add_space(6.0);

        // ── Flags ───────────────────────────────────────────────────
        changed |= ui
            .checkbox(&mut self.view_state.filter.published_only, "Public only")
            .changed();
        changed |= ui
            .checkbox(&mut self.view_state.filter.home_only, "Home page only")
            .changed();

        ui.add_space(8.0);
        ui.separator();

        if ui.button("\u{1F5D1} Clear filters").clicked() {
            self.view_state.filter.clear();
            self.filter_input.clear();
            self.debounce_timer = None;
            changed = true;
        }

        if !self.view_state.filter.is_empty() {
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new("Filters active")
                    .color(theme::accent(dark))
                    .small(),
            );
        }

        if changed {
            self.view_state.filter.update_search_cache();
            self.needs_refresh = true;
        }
    }
}
