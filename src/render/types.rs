//! Rendering-Typen: gemeinsamer Kontext für alle Zeichenschritte.

use crate::core::Camera2D;
use crate::shared::ViewerOptions;
use glam::DVec2;

/// Gemeinsamer Kontext für alle Sub-Renderer.
///
/// Bündelt Painter, Zielrechteck und View-Parameter, die jeder
/// Zeichenschritt pro Frame benötigt.
pub(crate) struct RenderContext<'a> {
    /// egui-Painter, auf das Viewport-Rechteck beschnitten
    pub painter: &'a egui::Painter,
    /// Viewport-Rechteck in Bildschirmkoordinaten
    pub rect: egui::Rect,
    /// Kamera (Position + Zoom)
    pub camera: &'a Camera2D,
    /// Laufzeit-Optionen (Farben, Breiten, etc.)
    pub options: &'a ViewerOptions,
}

impl RenderContext<'_> {
    /// Viewport-Größe als Vektor.
    pub fn viewport(&self) -> DVec2 {
        DVec2::new(self.rect.width() as f64, self.rect.height() as f64)
    }

    /// Welt → Bildschirmposition.
    pub fn to_screen(&self, world: DVec2) -> egui::Pos2 {
        let local = self.camera.world_to_screen(world, self.viewport());
        self.rect.min + egui::vec2(local.x as f32, local.y as f32)
    }

    /// Welt-Länge → Pixel.
    pub fn length_px(&self, world_length: f64) -> f32 {
        (world_length * self.camera.pixels_per_world(self.viewport())) as f32
    }

    /// Sichtbares Weltrechteck `(min, max)`.
    pub fn visible_world_rect(&self) -> (DVec2, DVec2) {
        self.camera.visible_world_rect(self.viewport())
    }
}
