//! Central event table with sortable headers.
//!
//! Only the rows of the current page are laid out. Header clicks and
//! hovers are fed back into the [`ViewState`](eventcatalog::core::table_view::ViewState)
//! after the table has been drawn.

use egui_extras::{Column, TableBuilder};

use eventcatalog::core::schedule_format::event_date_label;
use eventcatalog::core::sort::{SortDirection, SortField};
use eventcatalog::core::table_view::HeaderIndicator;
use eventcatalog::util::constants::{TABLE_ROW_HEIGHT, TABLE_TEXT_MAX_CHARS};

use crate::app::CatalogApp;
use crate::ui::theme;

/// Columns of the event table, in display order.
const COLUMNS: [(SortField, &str); 6] = [
    (SortField::Name, "Name"),
    (SortField::Type, "Type"),
    (SortField::StartDateTime, "Date"),
    (SortField::Description, "Description"),
    (SortField::City, "City"),
    (SortField::Publish, "Public"),
];

/// Cut `text` to `max` characters, adding an ellipsis when shortened.
fn truncate_chars(text: &str, max: usize) -> std::borrow::Cow<'_, str> {
    match text.char_indices().nth(max) {
        Some((end, _)) => format!("{}\u{2026}", &text[..end]).into(),
        None => text.into(),
    }
}

impl CatalogApp {
    /// Render the current page of the event table.
    ///
    /// Clicking a header sorts by that column (toggling on repeat clicks);
    /// hovering shows the direction a click would apply. Clicking a row
    /// selects it; double-clicking opens it in the editor.
    pub fn render_event_table(&mut self, ui: &mut egui::Ui) {
        let dark = self.dark_mode;

        if self.view.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() / 3.0);
                let text = if self.is_loading { "Loading\u{2026}" } else { "No rows" };
                ui.label(egui::RichText::new(text).color(theme::text_dim(dark)).size(14.0));
            });
            self.view_state.set_hover(None);
            return;
        }

        let page = self.view.page_rows(&self.events);
        let mut hovered: Option<SortField> = None;
        let mut clicked_header: Option<SortField> = None;
        let mut clicked_row: Option<(usize, bool)> = None;

        let table = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(200.0).at_least(120.0).clip(true)) // Name
            .column(Column::initial(70.0).at_least(55.0)) // Type
            .column(Column::initial(220.0).at_least(100.0).clip(true)) // Date
            .column(Column::remainder().at_least(160.0).clip(true)) // Description
            .column(Column::initial(110.0).at_least(70.0).clip(true)) // City
            .column(Column::initial(60.0).at_least(50.0)) // Public
            .sense(egui::Sense::click());

        table
            .header(24.0, |mut header| {
                for (field, label) in &COLUMNS {
                    header.col(|ui| {
                        let response = self.render_sort_header(ui, field, label);
                        if response.hovered() {
                            hovered = Some(field.clone());
                        }
                        if response.clicked() {
                            clicked_header = Some(field.clone());
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(TABLE_ROW_HEIGHT, page.len(), |mut row| {
                    let Some(&(src, event)) = page.get(row.index()) else {
                        return;
                    };
                    row.set_selected(self.selected == Some(src));

                    row.col(|ui| {
                        ui.label(event.display_name());
                    });
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(event.kind.label()).color(theme::text_secondary(dark)),
                        );
                    });
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(event_date_label(event, self.detail_language))
                                .color(theme::text_secondary(dark))
                                .small(),
                        );
                    });
                    row.col(|ui| {
                        ui.label(truncate_chars(event.display_description(), TABLE_TEXT_MAX_CHARS).as_ref());
                    });
                    row.col(|ui| {
                        ui.label(event.display_city());
                    });
                    row.col(|ui| {
                        if event.publish {
                            ui.label(egui::RichText::new("\u{2714}").color(theme::success_color(dark)));
                        } else {
                            ui.label(egui::RichText::new("\u{2013}").color(theme::text_dim(dark)));
                        }
                    });

                    let response = row.response();
                    if response.double_clicked() {
                        clicked_row = Some((src, true));
                    } else if response.clicked() {
                        clicked_row = Some((src, false));
                    }
                });
            });

        self.view_state.set_hover(hovered);
        if let Some(field) = clicked_header {
            self.view_state.click_header(field);
            self.needs_refresh = true;
        }
        if let Some((src, open)) = clicked_row {
            self.selected = Some(src);
            if open && self.auth.can_edit_events() {
                self.open_edit_selected();
            }
        }
    }

    /// Draw one header cell and return its response.
    fn render_sort_header(&self, ui: &mut egui::Ui, field: &SortField, label: &str) -> egui::Response {
        let dark = self.dark_mode;
        let (arrow, color) = match self.view_state.header_indicator(field) {
            HeaderIndicator::Active(dir) => (dir.arrow(), theme::accent(dark)),
            HeaderIndicator::Preview(dir) => (dir.arrow(), theme::preview_color(dark)),
            HeaderIndicator::None => ("", theme::text_primary(dark)),
        };

        let mut job = egui::text::LayoutJob::default();
        job.append(
            label,
            0.0,
            egui::TextFormat {
                color: theme::text_primary(dark),
                ..Default::default()
            },
        );
        if !arrow.is_empty() {
            job.append(
                arrow,
                6.0,
                egui::TextFormat {
                    color,
                    ..Default::default()
                },
            );
        }

        let hint = match self.view_state.active_direction(field) {
            Some(dir) => format!("Sorted {}; click to reverse", direction_word(dir)),
            None => "Click to sort ascending".to_owned(),
        };
        ui.add(egui::Label::new(job).sense(egui::Sense::click()).selectable(false))
            .on_hover_text(hint)
    }
}

fn direction_word(dir: SortDirection) -> &'static str {
    match dir {
        SortDirection::Ascending => "ascending",
        SortDirection::Descending => "descending",
    }
}
