//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod legend;
pub mod options;
mod render_scene;

pub use legend::{Legend, LegendEntry, LegendKind};
pub use options::ViewerOptions;
pub use render_scene::{CircleShape, MarkerShape, RenderScene, SegmentShape};
