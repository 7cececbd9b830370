//! Zeichnet Kreise, Tangenten, Schnittpunkte und die Verbindungslinie.

use super::primitives::{color32, dash_pattern, dashed_circle};
use super::types::RenderContext;
use crate::shared::RenderScene;

/// Zeichnet die Kreise gestrichelt und ungefüllt.
pub(crate) fn paint_circles(ctx: &RenderContext, scene: &RenderScene) {
    for circle in &scene.circles {
        let width = if circle.dragged {
            ctx.options.circle_drag_line_width_px
        } else {
            ctx.options.circle_line_width_px
        };
        let stroke = egui::Stroke::new(width, color32(circle.color));
        ctx.painter.extend(dashed_circle(
            ctx.to_screen(circle.center),
            ctx.length_px(circle.radius),
            stroke,
            ctx.options.circle_dash_length_px,
            ctx.options.circle_gap_length_px,
        ));
    }
}

/// Zeichnet die Tangenten-Segmente.
pub(crate) fn paint_tangents(ctx: &RenderContext, scene: &RenderScene) {
    for segment in &scene.tangent_segments {
        ctx.painter.line_segment(
            [ctx.to_screen(segment.from), ctx.to_screen(segment.to)],
            egui::Stroke::new(ctx.options.tangent_line_width_px, color32(segment.color)),
        );
    }
}

/// Zeichnet die gestrichelte Linie durch die drei Schnittpunkte.
pub(crate) fn paint_connecting_line(ctx: &RenderContext, scene: &RenderScene) {
    let Some(points) = scene.connecting_line else {
        return;
    };

    let path = points.map(|p| ctx.to_screen(p));
    let width = ctx.options.connecting_line_width_px;
    let (dash, gap) = dash_pattern(width * 4.0, width * 2.0);
    ctx.painter.extend(egui::Shape::dashed_line(
        &path,
        egui::Stroke::new(width, color32(ctx.options.connecting_line_color)),
        dash,
        gap,
    ));
}

/// Zeichnet die Schnittpunkt-Marker.
pub(crate) fn paint_markers(ctx: &RenderContext, scene: &RenderScene) {
    for marker in &scene.markers {
        ctx.painter.circle_filled(
            ctx.to_screen(marker.position),
            ctx.options.marker_radius_px,
            color32(marker.color),
        );
    }
}
