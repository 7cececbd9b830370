//! Render-Adapter: zeichnet eine `RenderScene` mit dem egui-Painter.
//!
//! egui zeichnet im Immediate Mode; jeder Frame wird vollständig aus der
//! deklarativen Szene neu aufgebaut.

mod geometry_renderer;
mod grid;
mod legend;
mod primitives;
mod types;

pub use crate::shared::RenderScene;
use primitives::color32;
use types::RenderContext;

/// Zeichnet die komplette Szene in das Viewport-Rechteck.
///
/// Reihenfolge: Hintergrund, Gitter, Kreise, Tangenten, Verbindungslinie,
/// Schnittpunkte, Legende.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let ctx = RenderContext {
        painter,
        rect,
        camera: &scene.camera,
        options: &scene.options,
    };

    painter.rect_filled(rect, 0.0, color32(scene.options.background_color));

    if scene.options.grid_visible {
        grid::paint_grid(&ctx);
    }

    geometry_renderer::paint_circles(&ctx, scene);
    geometry_renderer::paint_tangents(&ctx, scene);
    geometry_renderer::paint_connecting_line(&ctx, scene);
    geometry_renderer::paint_markers(&ctx, scene);

    if scene.options.legend_visible {
        legend::paint_legend(&ctx, &scene.legend);
    }
}
