//! Detail panel: every field of the selected event.
//!
//! Two tabs: **Details** (bilingual text, location and schedules) and
//! **Media** (attachments grouped by kind, each group previewing a few
//! entries with a "Load more" toggle).

use eventcatalog::core::event_record::{first_non_empty, CulturalEvent};
use eventcatalog::core::media::{group_by_kind, hero_photo};
use eventcatalog::core::schedule_format::{format_schedule_bilingual, format_schedule_full, Language};
use eventcatalog::util::constants::MEDIA_GROUP_PREVIEW;

use crate::app::{CatalogApp, DetailTab};
use crate::ui::theme;

/// Text of a bilingual field in `lang`, falling back to the other side.
fn localized<'a>(left: &'a Option<String>, right: &'a Option<String>, lang: Language) -> Option<&'a str> {
    match lang {
        Language::English => first_non_empty(left.as_deref(), right.as_deref()),
        Language::Arabic => first_non_empty(right.as_deref(), left.as_deref()),
    }
}

impl CatalogApp {
    /// Render the bottom detail panel for the selected event.
    pub fn render_detail_panel(&mut self, ui: &mut egui::Ui) {
        let event = match self.selected_event() {
            Some(e) => e.clone(),
            None => {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() / 3.0);
                    ui.label(
                        egui::RichText::new("\u{1F446} Select an event above to view its details")
                            .color(theme::text_dim(self.dark_mode))
                            .size(13.0),
                    );
                });
                return;
            }
        };

        // ── Tab bar ─────────────────────────────────────────────────
        ui.horizontal(|ui| {
            ui.selectable_value(
                &mut self.detail_tab,
                DetailTab::Details,
                egui::RichText::new("\u{1F4DD} Details").strong(),
            );
            ui.selectable_value(
                &mut self.detail_tab,
                DetailTab::Media,
                egui::RichText::new(format!("\u{1F5BC} Media ({})", event.media_files.len())).strong(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .small_button("\u{1F4CB} JSON")
                    .on_hover_text("Copy the event as JSON to the clipboard")
                    .clicked()
                {
                    match serde_json::to_string_pretty(&event) {
                        Ok(json) => ui.ctx().copy_text(json),
                        Err(e) => tracing::warn!("Could not serialise event for copy: {e}"),
                    }
                }
                if ui
                    .small_button("\u{1F4CB} Name")
                    .on_hover_text("Copy the event name to the clipboard")
                    .clicked()
                {
                    ui.ctx().copy_text(event.display_name().to_owned());
                }
                ui.separator();
                ui.selectable_value(&mut self.detail_language, Language::Arabic, "عربي");
                ui.selectable_value(&mut self.detail_language, Language::English, "EN");
            });
        });

        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| match self.detail_tab {
            DetailTab::Details => self.render_detail_fields(ui, &event),
            DetailTab::Media => self.render_detail_media(ui, &event),
        });
    }

    fn render_detail_fields(&self, ui: &mut egui::Ui, event: &CulturalEvent) {
        let dark = self.dark_mode;
        let lang = self.detail_language;

        let title = localized(&event.name_left, &event.name_right, lang)
            .or(event.name.as_deref())
            .unwrap_or("(unnamed)");
        ui.label(
            egui::RichText::new(title)
                .color(theme::accent(dark))
                .strong()
                .size(16.0),
        );
        if let Some(subtitle) = localized(&event.title_left, &event.title_right, lang) {
            ui.label(egui::RichText::new(subtitle).color(theme::text_secondary(dark)));
        }
        ui.add_space(6.0);

        // ── Summary grid ────────────────────────────────────────────
        let rows: [(&str, Option<&str>); 8] = [
            ("Category", Some(self.category_label(event.category_id())).filter(|s| !s.is_empty())),
            ("Type", Some(event.kind.label())),
            ("Host place", localized(&event.host_place_left, &event.host_place_right, lang)),
            ("City", localized(&event.city_left, &event.city_right, lang)),
            ("Country", localized(&event.country_left, &event.country_right, lang)),
            ("Address", localized(&event.address_left, &event.address_right, lang)),
            ("Materials", localized(&event.materials_left, &event.materials_right, lang)),
            ("Keyword", event.keyword.as_deref().filter(|s| !s.trim().is_empty())),
        ];
        egui::Grid::new("detail_summary_grid")
            .num_columns(2)
            .spacing([20.0, 4.0])
            .show(ui, |ui| {
                for (label, value) in rows {
                    let Some(value) = value else { continue };
                    ui.label(egui::RichText::new(label).color(theme::text_dim(dark)));
                    ui.label(value);
                    ui.end_row();
                }
                if let (Some(lat), Some(lon)) = (event.latitude, event.longitude) {
                    ui.label(egui::RichText::new("Coordinates").color(theme::text_dim(dark)));
                    ui.label(format!("{lat:.5}, {lon:.5}"));
                    ui.end_row();
                }
                ui.label(egui::RichText::new("Flags").color(theme::text_dim(dark)));
                let mut flags = Vec::new();
                if event.publish {
                    flags.push("public");
                }
                if event.show_in_home {
                    flags.push("home page");
                }
                ui.label(if flags.is_empty() { "none".to_owned() } else { flags.join(", ") });
                ui.end_row();
            });

        // ── Schedules ───────────────────────────────────────────────
        if !event.schedules.is_empty() {
            section_heading(ui, "\u{1F4C5} Schedule", dark);
            for schedule in &event.schedules {
                let text = format_schedule_full(schedule, lang);
                let text = if text.is_empty() { "(no date)".to_owned() } else { text };
                ui.label(text).on_hover_text(format_schedule_bilingual(schedule));
            }
        }

        // ── Long text ───────────────────────────────────────────────
        let texts = [
            ("Summary", localized(&event.description_table_left, &event.description_table_right, lang)),
            ("About", localized(&event.about_left, &event.about_right, lang)),
            ("Description", localized(&event.description_left, &event.description_right, lang)),
            ("Notes", localized(&event.notes_left, &event.notes_right, lang)),
        ];
        for (label, text) in texts {
            if let Some(text) = text {
                section_heading(ui, label, dark);
                ui.label(egui::RichText::new(text).color(theme::text_primary(dark)));
            }
        }

        // ── Links ───────────────────────────────────────────────────
        let links: Vec<&String> = event.external_links.iter().filter(|l| !l.trim().is_empty()).collect();
        if !links.is_empty() {
            section_heading(ui, "\u{1F517} Links", dark);
            for link in links {
                ui.hyperlink(link);
            }
        }
    }

    fn render_detail_media(&mut self, ui: &mut egui::Ui, event: &CulturalEvent) {
        let dark = self.dark_mode;
        if event.media_files.is_empty() {
            ui.label(
                egui::RichText::new("No attachments")
                    .color(theme::text_dim(dark))
                    .italics(),
            );
            return;
        }

        if let Some(hero) = hero_photo(&event.media_files) {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Cover").color(theme::text_dim(dark)));
                ui.hyperlink_to(hero.name.as_str(), &hero.url);
            });
            ui.add_space(4.0);
        }

        let mut toggled: Option<String> = None;
        for (kind, files) in group_by_kind(&event.media_files) {
            let tag = kind.as_str().to_owned();
            let expanded = self.expanded_media.contains(&tag);
            section_heading(ui, &format!("{} ({})", kind.label(), files.len()), dark);

            let shown = if expanded { files.len() } else { files.len().min(MEDIA_GROUP_PREVIEW) };
            for file in &files[..shown] {
                ui.horizontal(|ui| {
                    let name = if file.name.is_empty() { file.url.as_str() } else { file.name.as_str() };
                    ui.hyperlink_to(name, &file.url);
                    if let Some(preview) = &file.pdf_image_url {
                        ui.hyperlink_to(egui::RichText::new("preview").small(), preview);
                    }
                });
            }
            if files.len() > MEDIA_GROUP_PREVIEW {
                let label = if expanded {
                    "Show less".to_owned()
                } else {
                    format!("Load more ({})", files.len() - MEDIA_GROUP_PREVIEW)
                };
                if ui.small_button(label).clicked() {
                    toggled = Some(tag);
                }
            }
        }

        if let Some(tag) = toggled {
            if let Some(pos) = self.expanded_media.iter().position(|t| *t == tag) {
                self.expanded_media.remove(pos);
            } else {
                self.expanded_media.push(tag);
            }
        }
    }
}

fn section_heading(ui: &mut egui::Ui, text: &str, dark: bool) {
    ui.add_space(8.0);
    ui.label(egui::RichText::new(text).color(theme::accent(dark)).strong());
    ui.separator();
}
