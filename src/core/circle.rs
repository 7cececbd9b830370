//! Kreise der Szene: Identität, Mittelpunkt, Radius und Startkonfiguration.

use glam::DVec2;

/// Identität eines der drei Kreise. Die Reihenfolge entspricht der Zeichenreihenfolge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CircleId {
    /// Erster Kreis (blau)
    A,
    /// Zweiter Kreis (grün)
    B,
    /// Dritter Kreis (rot)
    C,
}

impl CircleId {
    /// Alle Kreise in Zeichenreihenfolge.
    pub const ALL: [CircleId; 3] = [CircleId::A, CircleId::B, CircleId::C];

    /// Index im Kreis-Array der Szene.
    pub fn index(self) -> usize {
        match self {
            CircleId::A => 0,
            CircleId::B => 1,
            CircleId::C => 2,
        }
    }

    /// Einsbasierte Nummer für Beschriftungen ("Kreis 1").
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// Feste Linienfarbe des Kreises (RGBA).
    pub fn color(self) -> [f32; 4] {
        match self {
            CircleId::A => CIRCLE_COLOR_A,
            CircleId::B => CIRCLE_COLOR_B,
            CircleId::C => CIRCLE_COLOR_C,
        }
    }
}

/// Farbe von Kreis A (RGBA: Blau).
pub const CIRCLE_COLOR_A: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Farbe von Kreis B (RGBA: Grün).
pub const CIRCLE_COLOR_B: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
/// Farbe von Kreis C (RGBA: Rot).
pub const CIRCLE_COLOR_C: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Startmittelpunkte der Kreise A, B, C.
pub const INITIAL_CENTERS: [DVec2; 3] = [
    DVec2::new(0.0, 0.0),
    DVec2::new(3.0, 1.0),
    DVec2::new(5.0, 3.0),
];
/// Radien der Kreise A, B, C (nach dem Start unveränderlich).
pub const INITIAL_RADII: [f64; 3] = [1.0, 1.2, 0.8];

/// Ein Kreis der Szene.
///
/// Der Radius ist nach der Erzeugung fest; nur der Mittelpunkt wird
/// durch Drag-Interaktion verändert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Identität (A, B oder C)
    pub id: CircleId,
    /// Mittelpunkt in Weltkoordinaten
    pub center: DVec2,
    radius: f64,
}

impl Circle {
    /// Erstellt einen Kreis. Der Radius muss positiv sein.
    pub fn new(id: CircleId, center: DVec2, radius: f64) -> Self {
        debug_assert!(radius > 0.0, "Kreisradius muss positiv sein");
        Self { id, center, radius }
    }

    /// Radius in Welteinheiten.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Hit-Test: liegt der Punkt innerhalb (oder auf) der Kreislinie?
    pub fn contains(&self, point: DVec2) -> bool {
        self.center.distance(point) <= self.radius
    }
}

/// Liefert die drei Kreise der festen Startkonfiguration.
pub fn initial_circles() -> [Circle; 3] {
    CircleId::ALL.map(|id| Circle::new(id, INITIAL_CENTERS[id.index()], INITIAL_RADII[id.index()]))
}
