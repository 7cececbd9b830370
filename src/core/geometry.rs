//! Geometrie-Kern: Tangentenpunkte, Geradenschnitt und Kollinearität.
//!
//! Reine Funktionen ohne Zustand. Degenerierte Fälle werden über
//! Rückgabewerte signalisiert, nie über Fehler.

use glam::DVec2;

/// Endpunkte der beiden äußeren Tangenten eines Kreispaars.
///
/// `(p1, p2)` ist die in `+v`-Richtung versetzte Tangente,
/// `(q1, q2)` die in `-v`-Richtung versetzte. `p1`/`q1` liegen am ersten,
/// `p2`/`q2` am zweiten Kreis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentPair {
    pub p1: DVec2,
    pub p2: DVec2,
    pub q1: DVec2,
    pub q2: DVec2,
}

impl TangentPair {
    /// Erste (obere) Tangente als Punktpaar.
    pub fn first_line(&self) -> (DVec2, DVec2) {
        (self.p1, self.p2)
    }

    /// Zweite (untere) Tangente als Punktpaar.
    pub fn second_line(&self) -> (DVec2, DVec2) {
        (self.q1, self.q2)
    }

    /// Alle vier Endpunkte in der Reihenfolge `p1, p2, q1, q2`.
    pub fn points(&self) -> [DVec2; 4] {
        [self.p1, self.p2, self.q1, self.q2]
    }
}

/// Berechnet die Endpunkte der beiden äußeren Tangenten zweier Kreise.
///
/// Beide Geraden entstehen, indem die Mittelpunkte senkrecht zur
/// Zentralen um den jeweiligen Radius versetzt werden. Bei gleichen Radien
/// sind das exakt die äußeren Tangenten; bei ungleichen Radien berühren die
/// Geraden die Kreise nicht exakt, schneiden sich aber im äußeren
/// Ähnlichkeitszentrum des Paars.
///
/// Fallen die Mittelpunkte exakt zusammen, gibt es keine Richtung: dann
/// werden `(center_a, center_b, center_a, center_b)` unverändert zurückgegeben.
pub fn outer_tangent_points(
    center_a: DVec2,
    center_b: DVec2,
    radius_a: f64,
    radius_b: f64,
) -> TangentPair {
    let d = center_b - center_a;
    let dist = d.length();
    if dist == 0.0 {
        return TangentPair {
            p1: center_a,
            p2: center_b,
            q1: center_a,
            q2: center_b,
        };
    }

    let u = d / dist;
    let v = DVec2::new(-u.y, u.x);

    TangentPair {
        p1: center_a + v * radius_a,
        p2: center_b + v * radius_b,
        q1: center_a - v * radius_a,
        q2: center_b - v * radius_b,
    }
}

/// Schneidet die Gerade durch `p1, p2` mit der Geraden durch `p3, p4`.
///
/// Beide Geraden werden implizit als `A*x + B*y = C` dargestellt und per
/// Cramerscher Regel gelöst. Bei Determinante exakt `0.0` (parallel oder
/// identisch) wird `None` geliefert.
pub fn line_intersection(p1: DVec2, p2: DVec2, p3: DVec2, p4: DVec2) -> Option<DVec2> {
    let a1 = p2.y - p1.y;
    let b1 = p1.x - p2.x;
    let c1 = a1 * p1.x + b1 * p1.y;

    let a2 = p4.y - p3.y;
    let b2 = p3.x - p4.x;
    let c2 = a2 * p3.x + b2 * p3.y;

    let det = a1 * b2 - a2 * b1;
    if det == 0.0 {
        return None;
    }

    Some(DVec2::new(
        (b2 * c1 - b1 * c2) / det,
        (a1 * c2 - a2 * c1) / det,
    ))
}

/// Abstand von exakter Kollinearität dreier Punkte.
///
/// Liefert die Höhe des Dreiecks `a, b, c` über seiner längsten Seite
/// (`2 * Fläche / längste Seite`). `0.0` bei kollinearen oder
/// zusammenfallenden Punkten.
pub fn collinearity_residual(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    let longest = a.distance(b).max(b.distance(c)).max(a.distance(c));
    if longest == 0.0 {
        return 0.0;
    }
    let twice_area = (b - a).perp_dot(c - a).abs();
    twice_area / longest
}
