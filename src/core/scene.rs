//! Szenen-Modell: drei Kreise plus abgeleitete Tangenten und Schnittpunkte.
//!
//! Abgeleitete Daten werden nie inkrementell gepflegt, sondern bei jedem
//! `recompute()` vollständig aus den Kreisen neu berechnet.

use super::circle::{initial_circles, Circle, CircleId};
use super::geometry::{collinearity_residual, line_intersection, outer_tangent_points, TangentPair};
use glam::DVec2;

/// Ungeordnetes Kreispaar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CirclePair {
    /// Kreise A und B
    AB,
    /// Kreise B und C
    BC,
    /// Kreise A und C
    AC,
}

impl CirclePair {
    /// Alle Paare in Berechnungsreihenfolge.
    pub const ALL: [CirclePair; 3] = [CirclePair::AB, CirclePair::BC, CirclePair::AC];

    /// Die beiden Kreise des Paars (erster, zweiter).
    pub fn circles(self) -> (CircleId, CircleId) {
        match self {
            CirclePair::AB => (CircleId::A, CircleId::B),
            CirclePair::BC => (CircleId::B, CircleId::C),
            CirclePair::AC => (CircleId::A, CircleId::C),
        }
    }

    /// Index im Paar-Array der Szene.
    pub fn index(self) -> usize {
        match self {
            CirclePair::AB => 0,
            CirclePair::BC => 1,
            CirclePair::AC => 2,
        }
    }

    /// Kurzbeschriftung wie "1-2".
    pub fn label(self) -> String {
        let (first, second) = self.circles();
        format!("{}-{}", first.number(), second.number())
    }
}

/// Ergebnis für ein Kreispaar: Tangenten und deren Schnittpunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairResult {
    pub pair: CirclePair,
    pub tangents: TangentPair,
    /// `None`, wenn die beiden Tangenten parallel sind
    pub intersection: Option<DVec2>,
    degenerate: bool,
}

impl PairResult {
    /// Berechnet Tangenten und Schnittpunkt für zwei Kreise.
    pub fn compute(pair: CirclePair, first: &Circle, second: &Circle) -> Self {
        let tangents =
            outer_tangent_points(first.center, second.center, first.radius(), second.radius());
        let (p1, p2) = tangents.first_line();
        let (q1, q2) = tangents.second_line();

        Self {
            pair,
            tangents,
            intersection: line_intersection(p1, p2, q1, q2),
            degenerate: first.center == second.center,
        }
    }

    /// Fallen die Mittelpunkte des Paars zusammen?
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }
}

/// Die komplette Szene aus drei Kreisen und den abgeleiteten Paar-Ergebnissen.
#[derive(Debug, Clone)]
pub struct Scene {
    circles: [Circle; 3],
    pairs: [PairResult; 3],
    connecting_line: Option<[DVec2; 3]>,
    stale: bool,
}

impl Scene {
    /// Erstellt eine Szene aus drei Kreisen (Reihenfolge A, B, C) und berechnet sie.
    pub fn new(circles: [Circle; 3]) -> Self {
        let pairs = Self::compute_pairs(&circles);
        let connecting_line = Self::connect(&pairs);
        Self {
            circles,
            pairs,
            connecting_line,
            stale: false,
        }
    }

    /// Berechnet alle drei Paar-Ergebnisse und die Verbindungslinie neu.
    pub fn recompute(&mut self) {
        self.pairs = Self::compute_pairs(&self.circles);
        self.connecting_line = Self::connect(&self.pairs);
        self.stale = false;

        log::trace!(
            "Szene neu berechnet: {} von 3 Schnittpunkten vorhanden",
            self.pairs.iter().filter(|p| p.intersection.is_some()).count()
        );
    }

    fn compute_pairs(circles: &[Circle; 3]) -> [PairResult; 3] {
        CirclePair::ALL.map(|pair| {
            let (first, second) = pair.circles();
            PairResult::compute(pair, &circles[first.index()], &circles[second.index()])
        })
    }

    fn connect(pairs: &[PairResult; 3]) -> Option<[DVec2; 3]> {
        Some([
            pairs[CirclePair::AB.index()].intersection?,
            pairs[CirclePair::BC.index()].intersection?,
            pairs[CirclePair::AC.index()].intersection?,
        ])
    }

    /// Verschiebt den Mittelpunkt eines Kreises. Abgeleitete Daten gelten
    /// danach als veraltet, bis `recompute()` aufgerufen wird.
    pub fn set_center(&mut self, id: CircleId, center: DVec2) {
        self.circles[id.index()].center = center;
        self.stale = true;
    }

    /// Sind die abgeleiteten Daten veraltet?
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Liefert einen Kreis.
    pub fn circle(&self, id: CircleId) -> &Circle {
        &self.circles[id.index()]
    }

    /// Alle Kreise in Zeichenreihenfolge.
    pub fn circles(&self) -> &[Circle; 3] {
        &self.circles
    }

    /// Ergebnis eines Kreispaars.
    pub fn pair(&self, pair: CirclePair) -> &PairResult {
        &self.pairs[pair.index()]
    }

    /// Alle Paar-Ergebnisse in der Reihenfolge AB, BC, AC.
    pub fn pairs(&self) -> &[PairResult; 3] {
        &self.pairs
    }

    /// Schnittpunkte `(X_AB, X_BC, X_AC)`, nur wenn alle drei existieren.
    pub fn connecting_line(&self) -> Option<[DVec2; 3]> {
        self.connecting_line
    }

    /// Abweichung der drei Schnittpunkte von einer Geraden.
    pub fn monge_residual(&self) -> Option<f64> {
        self.connecting_line
            .map(|[x, y, z]| collinearity_residual(x, y, z))
    }

    /// Hit-Test in Zeichenreihenfolge; der erste getroffene Kreis gewinnt.
    pub fn circle_at(&self, point: DVec2) -> Option<CircleId> {
        self.circles
            .iter()
            .find(|circle| circle.contains(point))
            .map(|circle| circle.id)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(initial_circles())
    }
}
