//! Fixed application style: light surface, rounded cards, two series
//! accents shared between widgets and the comparison chart.

use eframe::egui;
use egui::{Color32, Stroke};

/// Evaluator-entered series (always visible in the comparison chart).
pub const EVALUATOR_ACCENT: Color32 = Color32::from_rgb(249, 115, 22);
/// Applicant self-score series (revealed once the assessment is complete).
pub const APPLICANT_ACCENT: Color32 = Color32::from_rgb(99, 102, 241);

pub const CORRECT: Color32 = Color32::from_rgb(52, 168, 83);
pub const WRONG: Color32 = Color32::from_rgb(225, 29, 72);

pub fn apply_app_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    style.spacing.interact_size = egui::vec2(40.0, 30.0);

    // Keep inactive inputs visibly framed.
    style.visuals.widgets.inactive.bg_stroke =
        Stroke::new(1.0, style.visuals.widgets.noninteractive.bg_stroke.color);
    ctx.set_style(style);
}

/// The rounded card every screen renders into.
pub fn card_frame(ui: &egui::Ui) -> egui::Frame {
    egui::Frame::NONE
        .fill(ui.visuals().panel_fill)
        .stroke(Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
        .corner_radius(14.0)
        .inner_margin(egui::Margin::symmetric(20, 18))
}

/// Smaller inset panel used for list rows and the chart well.
pub fn inset_frame(ui: &egui::Ui) -> egui::Frame {
    egui::Frame::NONE
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(12, 10))
}
