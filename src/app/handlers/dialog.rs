//! Handler für Optionen und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Speichert die aktuellen Optionen.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::options::save_options(state)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::options::reset_options(state)
}
