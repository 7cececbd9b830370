//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod drag_circle;
pub mod options;
pub mod viewport;
