use crate::app::CommandLog;
use crate::core::Scene;
use crate::shared::ViewerOptions;
use std::path::PathBuf;

use super::{DragState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Die drei Kreise und ihre abgeleitete Tangenten-Geometrie
    pub scene: Scene,
    /// Drag-Zustand des Interaction-Controllers
    pub drag: DragState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Breiten, Gitter)
    pub options: ViewerOptions,
    /// Zielpfad beim Speichern der Optionen
    pub options_path: PathBuf,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den Startzustand mit der festen Kreiskonfiguration
    pub fn new() -> Self {
        Self {
            scene: Scene::default(),
            drag: DragState::Idle,
            view: ViewState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options: ViewerOptions::default(),
            options_path: ViewerOptions::config_path(),
            should_exit: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
