//! Keyboard-Shortcuts für die Ansicht.
//!
//! `R` setzt die Ansicht zurück, `G` und `L` schalten Gitter und Legende,
//! `+`/`-` zoomen stufenweise.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub fn collect_keyboard_intents(ctx: &egui::Context) -> Vec<AppIntent> {
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }

    let mut events = Vec::new();

    let (reset, grid, legend, zoom_in, zoom_out) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::G),
            i.key_pressed(egui::Key::L),
            i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
            i.key_pressed(egui::Key::Minus),
        )
    });

    if reset {
        events.push(AppIntent::ResetViewRequested);
    }
    if grid {
        events.push(AppIntent::GridToggled);
    }
    if legend {
        events.push(AppIntent::LegendToggled);
    }
    if zoom_in {
        events.push(AppIntent::ZoomInRequested);
    }
    if zoom_out {
        events.push(AppIntent::ZoomOutRequested);
    }

    events
}

#[cfg(test)]
mod tests;
