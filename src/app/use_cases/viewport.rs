//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;

/// Aktualisiert die gespeicherte Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    if state.view.viewport_size != size {
        state.view.viewport_size = size;
        state.view.redraw_requested = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_viewport_size() {
        let mut state = AppState::new();

        resize(&mut state, [1920.0, 1080.0]);

        assert_eq!(state.view.viewport_size, [1920.0, 1080.0]);
    }

    #[test]
    fn resize_to_same_size_requests_no_redraw() {
        let mut state = AppState::new();
        resize(&mut state, [800.0, 600.0]);
        state.view.take_redraw_request();

        resize(&mut state, [800.0, 600.0]);

        assert!(!state.view.redraw_requested);
    }
}
