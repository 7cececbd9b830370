//! Core-Domänentypen: Kreise, Geometrie-Kern, Szenen-Modell, Kamera.

pub mod camera;
pub mod circle;
/// Geometrie-Kern
///
/// Reine Funktionen für Tangentenpunkte, Geradenschnitt und Kollinearität.
pub mod geometry;
pub mod scene;

pub use camera::Camera2D;
pub use circle::{initial_circles, Circle, CircleId};
pub use geometry::{collinearity_residual, line_intersection, outer_tangent_points, TangentPair};
pub use scene::{CirclePair, PairResult, Scene};
