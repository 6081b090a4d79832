//! Event editor window: create or edit a single event.
//!
//! Text inputs edit a working copy of the event. Numeric inputs (year,
//! day, coordinates) stay as text until **Save**, when [`EventEditor::build`]
//! parses them and runs the same validation the backend applies.

use eventcatalog::core::event_record::{CategoryRef, CulturalEvent, MediaFile, Schedule};
use eventcatalog::core::media::detect_media_kind;
use eventcatalog::core::schedule_format::{month_name, weekday_name, Language};
use eventcatalog::core::validation::{parse_coordinate, validate_event, FieldIssue};

use crate::app::CatalogApp;
use crate::ui::theme;

/// Form state of one schedule row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleDraft {
    pub year: String,
    pub month: Option<i32>,
    pub day_of_month: String,
    pub day_of_week: Option<i32>,
    pub start_time: String,
    pub end_time: String,
}

fn int_text(v: Option<i32>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

fn parse_int(input: &str, field: &'static str, en: &str, ar: &str) -> Result<Option<i32>, FieldIssue> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    input.parse::<i32>().map(Some).map_err(|_| FieldIssue {
        field,
        message_en: en.to_owned(),
        message_ar: ar.to_owned(),
    })
}

fn opt_string(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_owned())
}

impl ScheduleDraft {
    pub fn from_schedule(s: &Schedule) -> Self {
        Self {
            year: int_text(s.year),
            month: s.month,
            day_of_month: int_text(s.day_of_month),
            day_of_week: s.day_of_week,
            start_time: s.start_time.clone().unwrap_or_default(),
            end_time: s.end_time.clone().unwrap_or_default(),
        }
    }

    pub fn to_schedule(&self) -> Result<Schedule, Vec<FieldIssue>> {
        let year = parse_int(&self.year, "year", "Year must be a number.", "يجب أن تكون السنة رقماً.");
        let day = parse_int(
            &self.day_of_month,
            "dayOfMonth",
            "Day of month must be a number.",
            "يجب أن يكون اليوم رقماً.",
        );
        match (year, day) {
            (Ok(year), Ok(day_of_month)) => Ok(Schedule {
                year,
                month: self.month,
                day_of_month,
                day_of_week: self.day_of_week,
                start_time: opt_string(&self.start_time),
                end_time: opt_string(&self.end_time),
            }),
            (year, day) => Err([year.err(), day.err()].into_iter().flatten().collect()),
        }
    }
}

/// State of the open editor window.
#[derive(Debug, Clone, Default)]
pub struct EventEditor {
    /// Working copy; text fields are edited in place.
    pub event: CulturalEvent,
    pub is_new: bool,
    pub category_id: Option<u64>,
    pub latitude: String,
    pub longitude: String,
    pub schedules: Vec<ScheduleDraft>,
    pub new_media_name: String,
    pub new_media_url: String,
    pub issues: Vec<FieldIssue>,
    /// Non-validation error from the last save attempt.
    pub error: Option<String>,
}

impl EventEditor {
    pub fn for_new() -> Self {
        Self {
            is_new: true,
            schedules: vec![ScheduleDraft::default()],
            ..Default::default()
        }
    }

    pub fn for_existing(event: &CulturalEvent) -> Self {
        Self {
            event: event.clone(),
            is_new: false,
            category_id: event.category_id(),
            latitude: event.latitude.map(|v| v.to_string()).unwrap_or_default(),
            longitude: event.longitude.map(|v| v.to_string()).unwrap_or_default(),
            schedules: event.schedules.iter().map(ScheduleDraft::from_schedule).collect(),
            ..Default::default()
        }
    }

    /// Assemble the event from the form, or every problem found.
    pub fn build(&self) -> Result<CulturalEvent, Vec<FieldIssue>> {
        let mut issues = Vec::new();
        let mut event = self.event.clone();

        match parse_coordinate(&self.latitude, "latitude") {
            Ok(v) => event.latitude = v,
            Err(issue) => issues.push(issue),
        }
        match parse_coordinate(&self.longitude, "longitude") {
            Ok(v) => event.longitude = v,
            Err(issue) => issues.push(issue),
        }

        event.schedules.clear();
        for draft in &self.schedules {
            match draft.to_schedule() {
                Ok(s) if s.is_blank() => {}
                Ok(s) => event.schedules.push(s),
                Err(errs) => issues.extend(errs),
            }
        }

        event.navigation_category = self.category_id.map(|id| CategoryRef {
            id: Some(id),
            name: None,
        });

        issues.extend(validate_event(&event));
        if issues.is_empty() {
            Ok(event)
        } else {
            Err(issues)
        }
    }

    fn issue_for(&self, field: &str) -> Option<&FieldIssue> {
        self.issues.iter().find(|i| i.field == field)
    }

    /// Attach the pending media entry, classifying it by file name.
    pub fn add_media(&mut self) {
        let name = self.new_media_name.trim();
        let url = self.new_media_url.trim();
        if name.is_empty() && url.is_empty() {
            return;
        }
        let file_name = if name.is_empty() { url } else { name };
        self.event.media_files.push(MediaFile {
            id: None,
            url: url.to_owned(),
            name: file_name.to_owned(),
            kind: detect_media_kind("", file_name),
            pdf_image_url: None,
        });
        self.new_media_name.clear();
        self.new_media_url.clear();
    }
}

// ── Rendering ───────────────────────────────────────────────────────────

/// Single-line edit of an optional string; empty input clears it.
fn opt_text(ui: &mut egui::Ui, label: &str, value: &mut Option<String>) {
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

fn opt_multiline(ui: &mut egui::Ui, label: &str, value: &mut Option<String>) {
    ui.label(label);
    let mut text = value.clone().unwrap_or_default();
    if ui
        .add(
            egui::TextEdit::multiline(&mut text)
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        )
        .changed()
    {
        *value = (!text.is_empty()).then_some(text);
    }
    ui.end_row();
}

fn issue_label(ui: &mut egui::Ui, issue: Option<&FieldIssue>, dark: bool) {
    if let Some(issue) = issue {
        ui.label(
            egui::RichText::new(issue.bilingual())
                .color(theme::error_color(dark))
                .small(),
        );
    }
}

fn optional_combo(
    ui: &mut egui::Ui,
    id: impl std::hash::Hash,
    value: &mut Option<i32>,
    count: i32,
    name: impl Fn(i32) -> &'static str,
) {
    let selected = value.map(&name).unwrap_or("-");
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected)
        .width(110.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(value, None, "-");
            for n in 1..=count {
                ui.selectable_value(value, Some(n), name(n));
            }
        });
}

impl CatalogApp {
    /// Render the event editor window, if open.
    pub fn render_event_editor(&mut self, ctx: &egui::Context) {
        let Some(mut editor) = self.editor.take() else {
            return;
        };
        let dark = self.dark_mode;
        let mut open = true;
        let mut save = false;
        let mut cancel = false;

        let title = if editor.is_new { "New event" } else { "Edit event" };
        egui::Window::new(title)
            .open(&mut open)
            .collapsible(false)
            .resizable(true)
            .default_size([560.0, 620.0])
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.render_editor_fields(ui, &mut editor, dark);
                });

                ui.separator();
                if let Some(err) = &editor.error {
                    ui.label(egui::RichText::new(err).color(theme::error_color(dark)));
                }
                ui.horizontal(|ui| {
                    if ui
                        .button(egui::RichText::new("Save").color(theme::accent(dark)))
                        .clicked()
                    {
                        save = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                    if !editor.issues.is_empty() {
                        ui.label(
                            egui::RichText::new(format!("{} problem(s) to fix", editor.issues.len()))
                                .color(theme::error_color(dark)),
                        );
                    }
                });
            });

        if open && !cancel {
            self.editor = Some(editor);
            if save {
                self.save_event_editor();
            }
        }
    }

    fn render_editor_fields(&self, ui: &mut egui::Ui, editor: &mut EventEditor, dark: bool) {
        // ── Category ────────────────────────────────────────────────
        ui.label(egui::RichText::new("Category").strong());
        let current = self.category_label(editor.category_id);
        egui::ComboBox::from_id_salt("editor_category")
            .selected_text(if current.is_empty() { "Choose a category" } else { current })
            .show_ui(ui, |ui| {
                for c in &self.categories {
                    ui.selectable_value(&mut editor.category_id, c.id, c.name.as_str());
                }
            });
        issue_label(ui, editor.issue_for("navigationCategory"), dark);
        ui.add_space(6.0);

        // ── Bilingual text fields ───────────────────────────────────
        egui::CollapsingHeader::new("English")
            .default_open(true)
            .show(ui, |ui| {
                egui::Grid::new("editor_left").num_columns(2).striped(true).show(ui, |ui| {
                    let e = &mut editor.event;
                    opt_text(ui, "Name / organizer", &mut e.name_left);
                    opt_text(ui, "Title", &mut e.title_left);
                    opt_text(ui, "One-line description", &mut e.description_table_left);
                    opt_multiline(ui, "Description", &mut e.description_left);
                    opt_text(ui, "Host place", &mut e.host_place_left);
                    opt_text(ui, "City", &mut e.city_left);
                    opt_text(ui, "Country", &mut e.country_left);
                    opt_text(ui, "Address", &mut e.address_left);
                    opt_text(ui, "Materials / medium", &mut e.materials_left);
                    opt_multiline(ui, "Wall text", &mut e.notes_left);
                });
                for field in ["nameOrOrganizer_left", "title_left", "description_table_left"] {
                    issue_label(ui, editor.issue_for(field), dark);
                }
            });

        egui::CollapsingHeader::new("العربية").show(ui, |ui| {
            egui::Grid::new("editor_right").num_columns(2).striped(true).show(ui, |ui| {
                let e = &mut editor.event;
                opt_text(ui, "الاسم", &mut e.name_right);
                opt_text(ui, "العنوان", &mut e.title_right);
                opt_text(ui, "وصف من سطر واحد", &mut e.description_table_right);
                opt_multiline(ui, "الوصف", &mut e.description_right);
                opt_text(ui, "المكان", &mut e.host_place_right);
                opt_text(ui, "المدينة", &mut e.city_right);
                opt_text(ui, "البلد", &mut e.country_right);
                opt_text(ui, "العنوان البريدي", &mut e.address_right);
                opt_text(ui, "المواد", &mut e.materials_right);
                opt_multiline(ui, "نص الجدار", &mut e.notes_right);
            });
        });

        // ── Location and flags ──────────────────────────────────────
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label("Latitude");
            ui.add(egui::TextEdit::singleline(&mut editor.latitude).desired_width(90.0));
            ui.label("Longitude");
            ui.add(egui::TextEdit::singleline(&mut editor.longitude).desired_width(90.0));
        });
        issue_label(ui, editor.issue_for("latitude"), dark);
        issue_label(ui, editor.issue_for("longitude"), dark);

        ui.horizontal(|ui| {
            ui.checkbox(&mut editor.event.publish, "Public");
            ui.checkbox(&mut editor.event.show_in_home, "Show on home page");
        });

        // ── Schedules ───────────────────────────────────────────────
        ui.add_space(6.0);
        ui.label(egui::RichText::new("Dates").strong());
        let mut remove = None;
        for (idx, draft) in editor.schedules.iter_mut().enumerate() {
            ui.horizontal(|ui| {
                ui.add(egui::TextEdit::singleline(&mut draft.year).hint_text("Year").desired_width(48.0));
                optional_combo(ui, ("month", idx), &mut draft.month, 12, |m| {
                    month_name(m, Language::English).unwrap_or("?")
                });
                ui.add(egui::TextEdit::singleline(&mut draft.day_of_month).hint_text("Day").desired_width(32.0));
                optional_combo(ui, ("weekday", idx), &mut draft.day_of_week, 7, |d| {
                    weekday_name(d, Language::English).unwrap_or("?")
                });
                ui.add(egui::TextEdit::singleline(&mut draft.start_time).hint_text("HH:MM").desired_width(48.0));
                ui.label("-");
                ui.add(egui::TextEdit::singleline(&mut draft.end_time).hint_text("HH:MM").desired_width(48.0));
                if ui.small_button("\u{2716}").on_hover_text("Remove this date").clicked() {
                    remove = Some(idx);
                }
            });
        }
        if let Some(idx) = remove {
            editor.schedules.remove(idx);
        }
        if ui.small_button("+ Add date").clicked() {
            editor.schedules.push(ScheduleDraft::default());
        }
        for field in ["schedules", "year", "month", "dayOfMonth", "dayOfWeek", "startTime", "endTime"] {
            issue_label(ui, editor.issue_for(field), dark);
        }

        // ── Attachments ─────────────────────────────────────────────
        ui.add_space(6.0);
        ui.label(egui::RichText::new("Attachments").strong());
        let mut remove = None;
        for (idx, file) in editor.event.media_files.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(file.kind.label()).color(theme::accent(dark)));
                ui.label(&file.name);
                if ui.small_button("\u{2716}").clicked() {
                    remove = Some(idx);
                }
            });
        }
        if let Some(idx) = remove {
            editor.event.media_files.remove(idx);
        }
        ui.horizontal(|ui| {
            ui.add(egui::TextEdit::singleline(&mut editor.new_media_name).hint_text("File name").desired_width(140.0));
            ui.add(egui::TextEdit::singleline(&mut editor.new_media_url).hint_text("URL").desired_width(200.0));
            if ui.small_button("Attach").clicked() {
                editor.add_media();
            }
        });
    }
}
