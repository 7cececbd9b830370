use crate::core::CircleId;

/// Zustand der Drag-Interaktion.
///
/// Es wird höchstens ein Kreis gleichzeitig gezogen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Kein Drag aktiv
    #[default]
    Idle,
    /// Der angegebene Kreis folgt dem Mauszeiger
    Dragging(CircleId),
}

impl DragState {
    /// Aktuell gezogener Kreis.
    pub fn dragged(self) -> Option<CircleId> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(id) => Some(id),
        }
    }
}
