//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use glam::DVec2;

/// Setzt die Kamera auf das Standardfenster zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = Default::default();
}

/// Zoomt die Kamera stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Zoomt die Kamera stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.camera.zoom_by_clamped(
        1.0 / state.options.camera_zoom_step,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );
}

/// Verschiebt die Kamera basierend auf einem Delta.
pub fn pan(state: &mut AppState, delta: DVec2) {
    state.view.camera.pan(delta);
}

/// Zoomt auf einen optionalen Fokuspunkt (Mausposition) hin.
///
/// Falls `focus_world` angegeben ist, bleibt der Welt-Punkt unter
/// der Maus nach dem Zoom stabil an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus_world: Option<DVec2>) {
    let old_zoom = state.view.camera.zoom;
    state.view.camera.zoom_by_clamped(
        factor,
        state.options.camera_zoom_min,
        state.options.camera_zoom_max,
    );

    if let Some(focus) = focus_world {
        let scale = old_zoom / state.view.camera.zoom;
        state.view.camera.position = focus + (state.view.camera.position - focus) * scale;
    }
}
