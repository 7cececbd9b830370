//! Monge Tangents Viewer Library.
//! Geometrie-Kern, Application-Layer und Render-Adapter als Library exportiert
//! für Tests und Benchmarks.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, DragState, UiState, ViewState};
pub use core::{
    collinearity_residual, initial_circles, line_intersection, outer_tangent_points, Camera2D,
    Circle, CircleId, CirclePair, PairResult, Scene, TangentPair,
};
pub use shared::{RenderScene, ViewerOptions};
