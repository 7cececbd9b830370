//! Application State — zentrale Datenhaltung.

mod app_state;
mod interaction;
mod ui;
mod view;

pub use app_state::AppState;
pub use interaction::DragState;
pub use ui::UiState;
pub use view::ViewState;
