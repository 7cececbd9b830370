//! 2D-Kamera mit gleichem Seitenverhältnis, Pan und Zoom.

use glam::DVec2;

/// 2D-Kamera: bildet ein Weltfenster längentreu auf den Viewport ab.
///
/// Die Welt-Y-Achse zeigt nach oben, die Bildschirm-Y-Achse nach unten.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Weltpunkt in der Viewport-Mitte
    pub position: DVec2,
    /// Halbe Breite/Höhe des Weltfensters, das bei Zoom 1.0 sichtbar sein muss
    pub half_extent: DVec2,
    /// Zoom-Level (1.0 = Standardfenster, 2.0 = doppelt so groß)
    pub zoom: f64,
}

impl Camera2D {
    /// Mittelpunkt des Standardfensters x ∈ [-20, 25], y ∈ [-15, 25].
    pub const DEFAULT_POSITION: DVec2 = DVec2::new(2.5, 5.0);
    /// Halbe Ausdehnung des Standardfensters.
    pub const DEFAULT_HALF_EXTENT: DVec2 = DVec2::new(22.5, 20.0);

    /// Erstellt eine Kamera auf dem Standardfenster.
    pub fn new() -> Self {
        Self {
            position: Self::DEFAULT_POSITION,
            half_extent: Self::DEFAULT_HALF_EXTENT,
            zoom: 1.0,
        }
    }

    /// Verschiebt die Kamera (Pan) um ein Welt-Delta.
    pub fn pan(&mut self, delta: DVec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level innerhalb der gegebenen Grenzen.
    pub fn zoom_by_clamped(&mut self, factor: f64, min: f64, max: f64) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Pixel pro Welteinheit, so dass das Weltfenster vollständig sichtbar ist.
    pub fn pixels_per_world(&self, viewport_size: DVec2) -> f64 {
        let size = viewport_size.max(DVec2::ONE);
        let fit_x = size.x / (2.0 * self.half_extent.x);
        let fit_y = size.y / (2.0 * self.half_extent.y);
        fit_x.min(fit_y) * self.zoom
    }

    /// Welt → Bildschirm (relativ zur linken oberen Viewport-Ecke).
    pub fn world_to_screen(&self, world: DVec2, viewport_size: DVec2) -> DVec2 {
        let scale = self.pixels_per_world(viewport_size);
        let offset = (world - self.position) * scale;
        DVec2::new(
            viewport_size.x * 0.5 + offset.x,
            viewport_size.y * 0.5 - offset.y,
        )
    }

    /// Bildschirm (relativ zur linken oberen Viewport-Ecke) → Welt.
    pub fn screen_to_world(&self, screen: DVec2, viewport_size: DVec2) -> DVec2 {
        let scale = self.pixels_per_world(viewport_size);
        DVec2::new(
            (screen.x - viewport_size.x * 0.5) / scale,
            (viewport_size.y * 0.5 - screen.y) / scale,
        ) + self.position
    }

    /// Sichtbares Weltrechteck `(min, max)` für den Viewport.
    pub fn visible_world_rect(&self, viewport_size: DVec2) -> (DVec2, DVec2) {
        let half = viewport_size.max(DVec2::ONE) * 0.5 / self.pixels_per_world(viewport_size);
        (self.position - half, self.position + half)
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
