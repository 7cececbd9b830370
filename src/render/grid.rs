//! Gitter mit Achsenbeschriftung.

use super::primitives::color32;
use super::types::RenderContext;

/// Obergrenze für Gitterlinien pro Achse (verhindert Überzeichnen bei Zoom-Out).
const MAX_LINES_PER_AXIS: usize = 200;
const DASH_LENGTH_PX: f32 = 6.0;
const GAP_LENGTH_PX: f32 = 4.0;
const LABEL_FONT_SIZE: f32 = 11.0;

/// Zeichnet gestrichelte Gitterlinien und Achsenwerte am linken/unteren Rand.
pub(crate) fn paint_grid(ctx: &RenderContext) {
    let step = ctx.options.grid_step_world;
    if step.is_nan() || step <= 0.0 {
        return;
    }

    let (min, max) = ctx.visible_world_rect();
    let stroke = egui::Stroke::new(1.0, color32(ctx.options.grid_color));
    let font = egui::FontId::proportional(LABEL_FONT_SIZE);
    let label_color = egui::Color32::DARK_GRAY;

    for x in grid_values(min.x, max.x, step) {
        let top = ctx.to_screen(glam::DVec2::new(x, max.y));
        let bottom = ctx.to_screen(glam::DVec2::new(x, min.y));
        ctx.painter.extend(egui::Shape::dashed_line(
            &[top, bottom],
            stroke,
            DASH_LENGTH_PX,
            GAP_LENGTH_PX,
        ));
        ctx.painter.text(
            egui::pos2(bottom.x + 2.0, ctx.rect.bottom() - 2.0),
            egui::Align2::LEFT_BOTTOM,
            format_tick(x),
            font.clone(),
            label_color,
        );
    }

    for y in grid_values(min.y, max.y, step) {
        let left = ctx.to_screen(glam::DVec2::new(min.x, y));
        let right = ctx.to_screen(glam::DVec2::new(max.x, y));
        ctx.painter.extend(egui::Shape::dashed_line(
            &[left, right],
            stroke,
            DASH_LENGTH_PX,
            GAP_LENGTH_PX,
        ));
        ctx.painter.text(
            egui::pos2(ctx.rect.left() + 2.0, left.y - 2.0),
            egui::Align2::LEFT_BOTTOM,
            format_tick(y),
            font.clone(),
            label_color,
        );
    }
}

/// Vielfache von `step` im Intervall `[min, max]`, begrenzt auf `MAX_LINES_PER_AXIS`.
fn grid_values(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    let count = (last - first + 1).clamp(0, MAX_LINES_PER_AXIS as i64);
    (0..count).map(move |i| (first + i) as f64 * step)
}

/// Achsenwert ohne überflüssige Nachkommastellen.
fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}
