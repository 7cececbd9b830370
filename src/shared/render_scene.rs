//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Jeder Frame bekommt eine vollständig neue, deklarative Beschreibung.

use super::legend::Legend;
use super::options::ViewerOptions;
use crate::core::{Camera2D, CircleId, CirclePair};
use glam::DVec2;

/// Ein zu zeichnender Kreis.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    pub id: CircleId,
    pub center: DVec2,
    pub radius: f64,
    pub color: [f32; 4],
    /// Kreis wird gerade gezogen (dickere Linie)
    pub dragged: bool,
}

/// Ein Tangenten-Segment in Weltkoordinaten.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentShape {
    pub pair: CirclePair,
    pub from: DVec2,
    pub to: DVec2,
    pub color: [f32; 4],
}

/// Ein Schnittpunkt-Marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerShape {
    pub pair: CirclePair,
    pub position: DVec2,
    pub color: [f32; 4],
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Die drei Kreise in Zeichenreihenfolge
    pub circles: Vec<CircleShape>,
    /// Bis zu sechs Tangenten-Segmente (zwei pro Paar mit Schnittpunkt)
    pub tangent_segments: Vec<SegmentShape>,
    /// Bis zu drei Schnittpunkt-Marker
    pub markers: Vec<MarkerShape>,
    /// Polylinie durch die drei Schnittpunkte, falls alle existieren
    pub connecting_line: Option<[DVec2; 3]>,
    /// Deduplizierte Legende
    pub legend: Legend,
    /// Laufzeit-Optionen für Farben, Breiten, Gitter
    pub options: ViewerOptions,
}

impl RenderScene {
    /// Ist die Verbindungslinie in diesem Frame sichtbar?
    pub fn has_connecting_line(&self) -> bool {
        self.connecting_line.is_some()
    }
}
