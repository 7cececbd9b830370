//! UI-Komponenten: Menü, Status-Bar, Input-Handling.

pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Die Komponenten lesen den `AppState` nur und liefern `AppIntent`s zurück.
pub mod menu;
pub mod status;

pub use input::InputState;
pub use keyboard::collect_keyboard_intents;
pub use menu::render_menu;
pub use status::render_status_bar;
