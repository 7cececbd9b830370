//! Handler für den Drag-Lebenszyklus der Kreise.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::CircleId;
use glam::DVec2;

/// Startet den Drag eines Kreises.
pub fn begin(state: &mut AppState, id: CircleId) {
    use_cases::drag_circle::begin_drag(state, id);
}

/// Verschiebt den Mittelpunkt eines Kreises.
pub fn move_circle(state: &mut AppState, id: CircleId, center: DVec2) {
    use_cases::drag_circle::move_circle(state, id, center);
}

/// Berechnet die Szene neu.
pub fn recompute(state: &mut AppState) {
    use_cases::drag_circle::recompute_scene(state);
}

/// Beendet den Drag.
pub fn end(state: &mut AppState) {
    use_cases::drag_circle::end_drag(state);
}
