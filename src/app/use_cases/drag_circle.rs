//! Use-Case: Kreise per Drag verschieben.

use crate::app::{AppState, DragState};
use crate::core::CircleId;
use glam::DVec2;

/// Startet den Drag eines Kreises.
pub fn begin_drag(state: &mut AppState, id: CircleId) {
    state.drag = DragState::Dragging(id);
    log::debug!("Drag gestartet: Kreis {}", id.number());
}

/// Setzt den Mittelpunkt eines Kreises.
///
/// Die abgeleitete Geometrie ist danach veraltet, bis
/// [`recompute_scene`] ausgeführt wird.
pub fn move_circle(state: &mut AppState, id: CircleId, center: DVec2) {
    state.scene.set_center(id, center);
}

/// Berechnet Tangenten und Schnittpunkte neu und fordert einen Redraw an.
pub fn recompute_scene(state: &mut AppState) {
    state.scene.recompute();
    state.view.redraw_requested = true;

    for result in state.scene.pairs() {
        if result.is_degenerate() {
            log::trace!(
                "Kreispaar {} hat identische Mittelpunkte, keine Tangentenrichtung",
                result.pair.label()
            );
        }
    }
}

/// Beendet einen laufenden Drag. Ohne aktiven Drag keine Operation.
pub fn end_drag(state: &mut AppState) {
    if let DragState::Dragging(id) = state.drag {
        let center = state.scene.circle(id).center;
        log::debug!(
            "Drag beendet: Kreis {} bei ({:.2}, {:.2})",
            id.number(),
            center.x,
            center.y
        );
    }
    state.drag = DragState::Idle;
}
