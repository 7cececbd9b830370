//! Zentrale Darstellungs-Konfiguration des Viewers.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Darstellungswerte.
//! Die Kreise selbst (Mittelpunkte, Radien, Farben) sind fest und nicht Teil
//! der Optionen.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f64 = 0.1;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f64 = 50.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü).
pub const CAMERA_ZOOM_STEP: f64 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f64 = 1.1;

// ── Kreise ──────────────────────────────────────────────────────────

/// Linienstärke der Kreise in Pixeln.
pub const CIRCLE_LINE_WIDTH_PX: f32 = 2.0;
/// Linienstärke des gerade gezogenen Kreises in Pixeln.
pub const CIRCLE_DRAG_LINE_WIDTH_PX: f32 = 3.5;
/// Strichlänge der gestrichelten Kreislinie in Pixeln.
pub const CIRCLE_DASH_LENGTH_PX: f32 = 8.0;
/// Lückenlänge der gestrichelten Kreislinie in Pixeln.
pub const CIRCLE_GAP_LENGTH_PX: f32 = 5.0;

// ── Tangenten & Schnittpunkte ──────────────────────────────────────

/// Linienstärke der Tangenten in Pixeln.
pub const TANGENT_LINE_WIDTH_PX: f32 = 1.5;
/// Tangentenfarben der Paare 1-2, 2-3, 1-3 (RGBA: Blau, Grün, Rot).
pub const TANGENT_COLORS: [[f32; 4]; 3] = [
    [0.0, 0.0, 1.0, 1.0],
    [0.0, 0.5, 0.0, 1.0],
    [1.0, 0.0, 0.0, 1.0],
];
/// Markerradius der Schnittpunkte in Pixeln.
pub const MARKER_RADIUS_PX: f32 = 3.5;
/// Markerfarben der Paare 1-2, 2-3, 1-3 (RGBA: Schwarz, Magenta, Cyan).
pub const MARKER_COLORS: [[f32; 4]; 3] = [
    [0.0, 0.0, 0.0, 1.0],
    [0.75, 0.0, 0.75, 1.0],
    [0.0, 0.75, 0.75, 1.0],
];

// ── Verbindungslinie ───────────────────────────────────────────────

/// Linienstärke der Verbindungslinie in Pixeln.
pub const CONNECTING_LINE_WIDTH_PX: f32 = 2.5;
/// Farbe der Verbindungslinie (RGBA: Schwarz).
pub const CONNECTING_LINE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Hintergrund & Gitter ───────────────────────────────────────────

/// Hintergrundfarbe der Zeichenfläche (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Gitterabstand in Welteinheiten.
pub const GRID_STEP_WORLD: f64 = 5.0;
/// Gitterfarbe (RGBA: Grau, halbtransparent).
pub const GRID_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 0.5];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Darstellungsoptionen.
/// Wird als `monge_tangents.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerOptions {
    // ── Kreise ──────────────────────────────────────────────────
    /// Linienstärke der Kreise in Pixeln
    pub circle_line_width_px: f32,
    /// Linienstärke des gezogenen Kreises in Pixeln
    pub circle_drag_line_width_px: f32,
    /// Strichlänge der Kreislinie in Pixeln
    pub circle_dash_length_px: f32,
    /// Lückenlänge der Kreislinie in Pixeln
    pub circle_gap_length_px: f32,

    // ── Tangenten & Schnittpunkte ───────────────────────────────
    /// Linienstärke der Tangenten in Pixeln
    pub tangent_line_width_px: f32,
    /// Tangentenfarben pro Kreispaar (1-2, 2-3, 1-3)
    pub tangent_colors: [[f32; 4]; 3],
    /// Markerradius der Schnittpunkte in Pixeln
    pub marker_radius_px: f32,
    /// Markerfarben pro Kreispaar (1-2, 2-3, 1-3)
    pub marker_colors: [[f32; 4]; 3],

    // ── Verbindungslinie ────────────────────────────────────────
    /// Linienstärke der Verbindungslinie in Pixeln
    pub connecting_line_width_px: f32,
    /// Farbe der Verbindungslinie
    pub connecting_line_color: [f32; 4],

    // ── Hintergrund, Gitter, Legende ────────────────────────────
    /// Hintergrundfarbe der Zeichenfläche
    pub background_color: [f32; 4],
    /// Gitter anzeigen
    pub grid_visible: bool,
    /// Gitterabstand in Welteinheiten
    pub grid_step_world: f64,
    /// Gitterfarbe
    pub grid_color: [f32; 4],
    /// Legende anzeigen
    pub legend_visible: bool,

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor
    pub camera_zoom_min: f64,
    /// Maximaler Zoom-Faktor
    pub camera_zoom_max: f64,
    /// Zoom-Schritt bei Menü-Buttons
    pub camera_zoom_step: f64,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f64,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            circle_line_width_px: CIRCLE_LINE_WIDTH_PX,
            circle_drag_line_width_px: CIRCLE_DRAG_LINE_WIDTH_PX,
            circle_dash_length_px: CIRCLE_DASH_LENGTH_PX,
            circle_gap_length_px: CIRCLE_GAP_LENGTH_PX,

            tangent_line_width_px: TANGENT_LINE_WIDTH_PX,
            tangent_colors: TANGENT_COLORS,
            marker_radius_px: MARKER_RADIUS_PX,
            marker_colors: MARKER_COLORS,

            connecting_line_width_px: CONNECTING_LINE_WIDTH_PX,
            connecting_line_color: CONNECTING_LINE_COLOR,

            background_color: BACKGROUND_COLOR,
            grid_visible: true,
            grid_step_world: GRID_STEP_WORLD,
            grid_color: GRID_COLOR,
            legend_visible: true,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
        }
    }
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => match opts.validate() {
                    Ok(()) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!("Optionen ungültig, verwende Standardwerte: {:#}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Prüft Wertebereiche, die Kamera und Strichmuster voraussetzen.
    ///
    /// Zoom-Grenzen müssen endlich sein mit `0 < min <= max`; alle Schritte,
    /// Breiten, Strich- und Lückenlängen endlich und positiv.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.camera_zoom_min.is_finite()
                && self.camera_zoom_max.is_finite()
                && 0.0 < self.camera_zoom_min
                && self.camera_zoom_min <= self.camera_zoom_max,
            "Zoom-Grenzen ungültig: min {} / max {}",
            self.camera_zoom_min,
            self.camera_zoom_max
        );

        for (name, value) in [
            ("camera_zoom_step", self.camera_zoom_step),
            ("camera_scroll_zoom_step", self.camera_scroll_zoom_step),
            ("grid_step_world", self.grid_step_world),
        ] {
            anyhow::ensure!(value.is_finite() && value > 0.0, "{name} ungültig: {value}");
        }

        for (name, value) in [
            ("circle_line_width_px", self.circle_line_width_px),
            ("circle_drag_line_width_px", self.circle_drag_line_width_px),
            ("circle_dash_length_px", self.circle_dash_length_px),
            ("circle_gap_length_px", self.circle_gap_length_px),
            ("tangent_line_width_px", self.tangent_line_width_px),
            ("marker_radius_px", self.marker_radius_px),
            ("connecting_line_width_px", self.connecting_line_width_px),
        ] {
            anyhow::ensure!(value.is_finite() && value > 0.0, "{name} ungültig: {value}");
        }

        Ok(())
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("monge_tangents"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("monge_tangents.toml")
    }

    /// Tangentenfarbe eines Paars (Index 0..3 in der Reihenfolge 1-2, 2-3, 1-3).
    pub fn tangent_color(&self, pair_index: usize) -> [f32; 4] {
        self.tangent_colors[pair_index % 3]
    }

    /// Markerfarbe eines Paars (Index 0..3 in der Reihenfolge 1-2, 2-3, 1-3).
    pub fn marker_color(&self, pair_index: usize) -> [f32; 4] {
        self.marker_colors[pair_index % 3]
    }
}
