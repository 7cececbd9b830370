use crate::core::CircleId;
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Drag eines Kreises beginnen
    BeginCircleDrag { id: CircleId },
    /// Mittelpunkt eines Kreises setzen
    MoveCircle { id: CircleId, center: DVec2 },
    /// Abgeleitete Geometrie neu berechnen und Redraw anfordern
    RecomputeScene,
    /// Drag beenden (auch ohne aktiven Drag zulässig)
    EndCircleDrag,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera verschieben
    PanCamera { delta: DVec2 },
    /// Kamera auf Fokuspunkt zoomen
    ZoomCamera {
        factor: f64,
        focus_world: Option<DVec2>,
    },
    /// Kamera auf Standard zurücksetzen
    ResetCamera,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Gitter umschalten
    ToggleGrid,
    /// Legende umschalten
    ToggleLegend,
    /// Optionen speichern
    SaveOptions,
    /// Optionen zurücksetzen
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}
