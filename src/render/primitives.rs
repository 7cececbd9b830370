//! Zeichen-Primitive: Farbkonvertierung und gestrichelte Formen.

use std::f32::consts::TAU;

/// Wandelt eine RGBA-Farbe (0.0..=1.0) in `egui::Color32` um.
pub(crate) fn color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Anzahl der Polygon-Stützpunkte für einen Kreis mit Radius in Pixeln.
pub(crate) fn circle_segment_count(radius_px: f32) -> usize {
    ((radius_px * 0.5) as usize).clamp(32, 512)
}

/// Geschlossener Polygonzug entlang einer Kreislinie.
pub(crate) fn circle_outline(center: egui::Pos2, radius_px: f32) -> Vec<egui::Pos2> {
    let count = circle_segment_count(radius_px);
    (0..=count)
        .map(|i| {
            let angle = TAU * i as f32 / count as f32;
            center + radius_px * egui::vec2(angle.cos(), angle.sin())
        })
        .collect()
}

/// Kleinste Strich- bzw. Lückenlänge in Pixeln.
const MIN_DASH_PX: f32 = 1.0;

/// Strich- und Lückenlänge, nach unten auf `MIN_DASH_PX` begrenzt.
///
/// `egui::Shape::dashed_line` terminiert nur bei positiver Summe.
pub(crate) fn dash_pattern(dash_length: f32, gap_length: f32) -> (f32, f32) {
    (dash_length.max(MIN_DASH_PX), gap_length.max(MIN_DASH_PX))
}

/// Gestrichelter Kreis als Shape-Liste.
pub(crate) fn dashed_circle(
    center: egui::Pos2,
    radius_px: f32,
    stroke: egui::Stroke,
    dash_length: f32,
    gap_length: f32,
) -> Vec<egui::Shape> {
    let (dash, gap) = dash_pattern(dash_length, gap_length);
    egui::Shape::dashed_line(&circle_outline(center, radius_px), stroke, dash, gap)
}
