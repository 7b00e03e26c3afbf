//! Custom-painted widgets: the skill comparison radar chart.

use eframe::egui;
use egui::{Color32, Pos2, Sense, Shape, Stroke, Vec2};

pub struct RadarSeries<'a> {
    pub label: &'a str,
    pub color: Color32,
    /// One value per axis, 0-100.
    pub values: &'a [f32],
}

/// Paints a spider chart for the given axes. Purely presentational: the
/// caller decides which series are passed in, so the reveal rule for the
/// second series stays in the core crate.
pub fn radar_chart(ui: &mut egui::Ui, size: f32, axes: &[&str], series: &[RadarSeries<'_>]) {
    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    if !ui.is_rect_visible(rect) || axes.is_empty() {
        return;
    }

    let painter = ui.painter_at(rect.expand(4.0));
    let center = rect.center();
    let radius = size * 0.5 - 34.0;

    let angle_for = |i: usize| -> f32 {
        std::f32::consts::TAU * (i as f32) / (axes.len() as f32) - std::f32::consts::FRAC_PI_2
    };
    let point_at = |i: usize, value: f32| -> Pos2 {
        let t = (value / 100.0).clamp(0.0, 1.0);
        let angle = angle_for(i);
        center + Vec2::new(angle.cos(), angle.sin()) * radius * t
    };

    // Grid rings and spokes.
    let grid = Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color);
    for ring in 1..=4 {
        let level = ring as f32 * 25.0;
        let points: Vec<Pos2> = (0..axes.len()).map(|i| point_at(i, level)).collect();
        painter.add(Shape::closed_line(points, grid));
    }
    for (i, axis) in axes.iter().enumerate() {
        let tip = point_at(i, 100.0);
        painter.line_segment([center, tip], grid);
        let label_pos = center + (tip - center) * 1.18;
        painter.text(
            label_pos,
            egui::Align2::CENTER_CENTER,
            *axis,
            egui::FontId::proportional(11.0),
            ui.visuals().text_color(),
        );
    }

    for entry in series {
        let points: Vec<Pos2> = (0..axes.len())
            .map(|i| point_at(i, entry.values.get(i).copied().unwrap_or(0.0)))
            .collect();
        painter.add(Shape::convex_polygon(
            points.clone(),
            entry.color.gamma_multiply(0.18),
            Stroke::new(2.0, entry.color),
        ));
        for point in points {
            painter.circle_filled(point, 2.5, entry.color);
        }
    }
}

/// One colored legend row beneath the chart.
pub fn series_legend(ui: &mut egui::Ui, series: &[RadarSeries<'_>]) {
    ui.horizontal_wrapped(|ui| {
        for entry in series {
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
            ui.painter().rect_filled(rect, 2.0, entry.color);
            ui.small(entry.label);
            ui.add_space(8.0);
        }
    });
}
