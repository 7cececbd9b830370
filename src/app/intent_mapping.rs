//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier sitzt die Zustandsmaschine des Interaction-Controllers: ob ein
//! Pointer-Event einen Drag startet, fortsetzt oder ignoriert wird, hängt
//! allein vom aktuellen `DragState` und vom Hit-Test ab.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { world_pos } => world_pos
            .and_then(|pos| state.scene.circle_at(pos))
            .map(|id| vec![AppCommand::BeginCircleDrag { id }])
            .unwrap_or_default(),
        AppIntent::PointerMoved { world_pos } => match (state.drag.dragged(), world_pos) {
            (Some(id), Some(center)) => vec![
                AppCommand::MoveCircle { id, center },
                AppCommand::RecomputeScene,
            ],
            _ => Vec::new(),
        },
        AppIntent::PointerReleased => vec![AppCommand::EndCircleDrag],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::GridToggled => vec![AppCommand::ToggleGrid],
        AppIntent::LegendToggled => vec![AppCommand::ToggleLegend],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
