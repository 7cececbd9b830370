use glam::DVec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Primäre Maustaste gedrückt (`None` = außerhalb der Zeichenfläche)
    PointerPressed { world_pos: Option<DVec2> },
    /// Mauszeiger bewegt (`None` = außerhalb der Zeichenfläche)
    PointerMoved { world_pos: Option<DVec2> },
    /// Primäre Maustaste losgelassen, unabhängig von der Position
    PointerReleased,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: DVec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f64,
        focus_world: Option<DVec2>,
    },
    /// Ansicht auf Standardfenster zurücksetzen
    ResetViewRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Gitter ein-/ausblenden
    GridToggled,
    /// Legende ein-/ausblenden
    LegendToggled,
    /// Aktuelle Optionen in die TOML-Datei schreiben
    SaveOptionsRequested,
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
