//! Colour palette and style helpers for EventCatalog's dark and light themes.
//!
//! Colour helpers take `dark: bool` so every panel follows the active mode.

use egui::Color32;

// ── Background colours ──────────────────────────────────────────────────

/// Main window background (dark mode).
pub const BG_DARK: Color32 = Color32::from_rgb(28, 30, 40);

/// Main window background (light mode).
pub const BG_LIGHT: Color32 = Color32::from_rgb(246, 244, 240);

const BG_PANEL_DARK: Color32 = Color32::from_rgb(36, 38, 52);
const BG_ROW_DARK: Color32 = Color32::from_rgb(32, 34, 46);
const BG_SELECTED_DARK: Color32 = Color32::from_rgb(70, 58, 40);

// ── Accent colours ──────────────────────────────────────────────────────

const ACCENT_DARK: Color32 = Color32::from_rgb(232, 176, 84);
const ACCENT_LIGHT: Color32 = Color32::from_rgb(168, 98, 20);

// ── Helpers ─────────────────────────────────────────────────────────────

pub fn accent(dark: bool) -> Color32 {
    if dark {
        ACCENT_DARK
    } else {
        ACCENT_LIGHT
    }
}

pub fn text_primary(dark: bool) -> Color32 {
    if dark {
        Color32::from_rgb(215, 212, 205)
    } else {
        Color32::from_rgb(40, 38, 36)
    }
}

pub fn text_secondary(dark: bool) -> Color32 {
    if dark {
        Color32::from_rgb(150, 148, 160)
    } else {
        Color32::from_rgb(95, 92, 100)
    }
}

pub fn text_dim(dark: bool) -> Color32 {
    if dark {
        Color32::from_rgb(105, 104, 118)
    } else {
        Color32::from_rgb(140, 138, 146)
    }
}

/// Colour for error text and the error counter.
pub fn error_color(dark: bool) -> Color32 {
    if dark {
        Color32::from_rgb(228, 110, 96)
    } else {
        Color32::from_rgb(180, 40, 30)
    }
}

/// Colour for success and "published" badges.
pub fn success_color(dark: bool) -> Color32 {
    if dark {
        Color32::from_rgb(120, 200, 130)
    } else {
        Color32::from_rgb(30, 130, 50)
    }
}

/// Faded colour for a header arrow shown only as a hover preview.
pub fn preview_color(dark: bool) -> Color32 {
    accent(dark).gamma_multiply(0.5)
}

/// Apply the theme matching `dark` to the given context.
pub fn apply(ctx: &egui::Context, dark: bool) {
    if dark {
        apply_dark_theme(ctx);
    } else {
        apply_light_theme(ctx);
    }
}

/// Apply the EventCatalog dark theme.
fn apply_dark_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PANEL_DARK;
    visuals.window_fill = BG_PANEL_DARK;
    visuals.extreme_bg_color = BG_DARK;
    visuals.faint_bg_color = BG_ROW_DARK;
    visuals.override_text_color = Some(text_primary(true));

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(48, 50, 66);
    visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(44, 46, 60);
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, text_secondary(true));
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(60, 62, 82);
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, text_primary(true));
    visuals.widgets.active.bg_fill = Color32::from_rgb(72, 74, 98);
    visuals.widgets.noninteractive.bg_fill = BG_PANEL_DARK;

    visuals.selection.bg_fill = BG_SELECTED_DARK;
    visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT_DARK);

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.window_stroke = egui::Stroke::new(1.0, Color32::from_rgb(58, 60, 78));

    ctx.set_visuals(visuals);
}

/// Apply the EventCatalog light theme.
fn apply_light_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();

    visuals.panel_fill = Color32::from_rgb(250, 248, 244);
    visuals.window_fill = Color32::from_rgb(252, 251, 248);
    visuals.extreme_bg_color = Color32::WHITE;
    visuals.faint_bg_color = Color32::from_rgb(240, 237, 230);
    visuals.override_text_color = Some(text_primary(false));

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(228, 224, 216);
    visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(234, 230, 222);
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(214, 208, 196);
    visuals.widgets.active.bg_fill = Color32::from_rgb(200, 192, 178);

    visuals.selection.bg_fill = Color32::from_rgb(240, 214, 170);
    visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT_LIGHT);

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.window_stroke = egui::Stroke::new(1.0, Color32::from_rgb(206, 200, 190));

    ctx.set_visuals(visuals);
}
