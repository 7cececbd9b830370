//! Legende in der linken oberen Ecke der Zeichenfläche.

use super::primitives::color32;
use super::types::RenderContext;
use crate::shared::{Legend, LegendKind};

const PADDING: f32 = 6.0;
const SAMPLE_WIDTH: f32 = 24.0;
const ROW_SPACING: f32 = 3.0;
const FONT_SIZE: f32 = 12.0;

/// Zeichnet die deduplizierte Legende.
pub(crate) fn paint_legend(ctx: &RenderContext, legend: &Legend) {
    if legend.is_empty() {
        return;
    }

    let font = egui::FontId::proportional(FONT_SIZE);
    let rows: Vec<_> = legend
        .entries()
        .map(|entry| {
            let galley =
                ctx.painter
                    .layout_no_wrap(entry.label.clone(), font.clone(), egui::Color32::BLACK);
            (entry, galley)
        })
        .collect();

    let text_width = rows
        .iter()
        .map(|(_, galley)| galley.size().x)
        .fold(0.0_f32, f32::max);
    let row_height = rows
        .iter()
        .map(|(_, galley)| galley.size().y)
        .fold(FONT_SIZE, f32::max);

    let width = PADDING * 3.0 + SAMPLE_WIDTH + text_width;
    let height = PADDING * 2.0 + rows.len() as f32 * (row_height + ROW_SPACING) - ROW_SPACING;
    let frame = egui::Rect::from_min_size(
        ctx.rect.min + egui::vec2(PADDING * 2.0, PADDING * 2.0),
        egui::vec2(width, height),
    );

    ctx.painter
        .rect_filled(frame, 3.0, egui::Color32::from_white_alpha(230));
    ctx.painter.rect_stroke(
        frame,
        3.0,
        egui::Stroke::new(1.0, egui::Color32::GRAY),
        egui::StrokeKind::Inside,
    );

    for (index, (entry, galley)) in rows.into_iter().enumerate() {
        let top = frame.top() + PADDING + index as f32 * (row_height + ROW_SPACING);
        let mid_y = top + row_height * 0.5;
        let sample_left = egui::pos2(frame.left() + PADDING, mid_y);
        let sample_right = sample_left + egui::vec2(SAMPLE_WIDTH, 0.0);
        let color = color32(entry.color);

        match entry.kind {
            LegendKind::Line => {
                ctx.painter
                    .line_segment([sample_left, sample_right], egui::Stroke::new(1.5, color));
            }
            LegendKind::DashedLine => {
                ctx.painter.extend(egui::Shape::dashed_line(
                    &[sample_left, sample_right],
                    egui::Stroke::new(2.0, color),
                    5.0,
                    3.0,
                ));
            }
            LegendKind::Marker => {
                ctx.painter.circle_filled(
                    sample_left + egui::vec2(SAMPLE_WIDTH * 0.5, 0.0),
                    ctx.options.marker_radius_px,
                    color,
                );
            }
        }

        ctx.painter.galley(
            egui::pos2(sample_right.x + PADDING, top),
            galley,
            egui::Color32::BLACK,
        );
    }
}
