//! Navigation category manager window.
//!
//! Lists the catalog's categories on the left and edits the chosen one on
//! the right. Only sessions that may manage categories can save or delete.

use eventcatalog::core::category::NavigationCategory;
use eventcatalog::core::validation::FieldIssue;

use crate::app::CatalogApp;
use crate::ui::theme;

/// State of the open category manager.
#[derive(Debug, Clone, Default)]
pub struct CategoryManager {
    /// Form contents. `id == None` means a new category.
    pub draft: NavigationCategory,
    pub issues: Vec<FieldIssue>,
    pub error: Option<String>,
}

impl CategoryManager {
    /// Load `category` into the form.
    pub fn edit(&mut self, category: &NavigationCategory) {
        self.draft = category.clone();
        self.issues.clear();
        self.error = None;
    }

    /// Clear the form for a new category.
    pub fn start_new(&mut self) {
        *self = Self::default();
    }
}

fn opt_field(ui: &mut egui::Ui, label: &str, value: &mut Option<String>) {
    ui.label(label);
    let mut text = value.clone().unwrap_or_default();
    if ui
        .add(egui::TextEdit::singleline(&mut text).desired_width(f32::INFINITY))
        .changed()
    {
        *value = (!text.is_empty()).then_some(text);
    }
    ui.end_row();
}

impl CatalogApp {
    /// Render the category manager window, if open.
    pub fn render_category_manager(&mut self, ctx: &egui::Context) {
        let Some(mut manager) = self.category_manager.take() else {
            return;
        };
        let dark = self.dark_mode;
        let can_edit = self.auth.can_manage_categories();
        let mut open = true;
        let mut save = false;
        let mut delete = None;

        egui::Window::new("Categories")
            .open(&mut open)
            .collapsible(false)
            .resizable(true)
            .default_size([620.0, 420.0])
            .show(ctx, |ui| {
                ui.horizontal_top(|ui| {
                    // ── Category list ───────────────────────────────
                    ui.vertical(|ui| {
                        ui.set_width(180.0);
                        if ui.add_enabled(can_edit, egui::Button::new("+ New category")).clicked() {
                            manager.start_new();
                        }
                        ui.separator();
                        egui::ScrollArea::vertical().id_salt("category_list").show(ui, |ui| {
                            for c in &self.categories {
                                let selected = manager.draft.id.is_some() && manager.draft.id == c.id;
                                let mut text = egui::RichText::new(&c.name);
                                if c.show_in_navbar {
                                    text = text.strong();
                                }
                                if ui.selectable_label(selected, text).clicked() {
                                    manager.edit(c);
                                }
                            }
                        });
                    });

                    ui.separator();

                    // ── Form ────────────────────────────────────────
                    ui.vertical(|ui| {
                        let heading = if manager.draft.id.is_some() { "Edit category" } else { "New category" };
                        ui.label(egui::RichText::new(heading).color(theme::accent(dark)).strong());

                        egui::Grid::new("category_form").num_columns(2).show(ui, |ui| {
                            let d = &mut manager.draft;
                            ui.label("Name");
                            ui.add(egui::TextEdit::singleline(&mut d.name).desired_width(f32::INFINITY));
                            ui.end_row();
                            opt_field(ui, "Header", &mut d.header_left);
                            opt_field(ui, "Header (AR)", &mut d.header_right);
                            opt_field(ui, "Sub-header", &mut d.sub_header_left);
                            opt_field(ui, "Sub-header (AR)", &mut d.sub_header_right);
                            opt_field(ui, "Title", &mut d.title_left);
                            opt_field(ui, "Title (AR)", &mut d.title_right);
                            opt_field(ui, "Description", &mut d.description_left);
                            opt_field(ui, "Description (AR)", &mut d.description_right);
                            opt_field(ui, "Image URL", &mut d.image_url);
                        });
                        ui.checkbox(&mut manager.draft.show_in_navbar, "Show in navigation bar");
                        ui.checkbox(&mut manager.draft.show_in_works_page, "Show on works page");
                        ui.checkbox(&mut manager.draft.show_all_locations, "Show all locations");

                        for issue in &manager.issues {
                            ui.label(
                                egui::RichText::new(issue.bilingual())
                                    .color(theme::error_color(dark))
                                    .small(),
                            );
                        }
                        if let Some(err) = &manager.error {
                            ui.label(egui::RichText::new(err).color(theme::error_color(dark)));
                        }

                        ui.add_space(6.0);
                        ui.horizontal(|ui| {
                            if ui.add_enabled(can_edit, egui::Button::new("Save")).clicked() {
                                save = true;
                            }
                            let deletable = can_edit && manager.draft.id.is_some();
                            if ui.add_enabled(deletable, egui::Button::new("Delete")).clicked() {
                                delete = manager.draft.id;
                            }
                        });
                        if !can_edit {
                            ui.label(
                                egui::RichText::new("Read-only: your role cannot manage categories")
                                    .color(theme::text_dim(dark))
                                    .small(),
                            );
                        }
                    });
                });
            });

        if !open {
            return;
        }
        let draft = manager.draft.clone();
        if save || delete.is_some() {
            manager.issues.clear();
            manager.error = None;
        }
        self.category_manager = Some(manager);

        if save {
            self.save_category(draft);
        } else if let Some(id) = delete {
            self.delete_category(id);
        }
    }
}
