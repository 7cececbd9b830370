//! Use-Case-Funktionen für Darstellungsoptionen.

use crate::app::AppState;
use crate::shared::ViewerOptions;

/// Schaltet das Gitter um.
pub fn toggle_grid(state: &mut AppState) {
    state.options.grid_visible = !state.options.grid_visible;
    state.view.redraw_requested = true;
}

/// Schaltet die Legende um.
pub fn toggle_legend(state: &mut AppState) {
    state.options.legend_visible = !state.options.legend_visible;
    state.view.redraw_requested = true;
}

/// Schreibt die aktuellen Optionen nach `state.options_path`.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options.save_to_file(&state.options_path)?;
    state.ui.status_message = Some(format!(
        "Optionen gespeichert: {}",
        state.options_path.display()
    ));
    Ok(())
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = ViewerOptions::default();
    state.view.redraw_requested = true;
    save_options(state)
}
