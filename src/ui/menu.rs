//! Top-Menü (Datei, Ansicht).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Optionen speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                    ui.close();
                }

                if ui.button("Optionen zurücksetzen").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                if ui.button("Ansicht zurücksetzen (R)").clicked() {
                    events.push(AppIntent::ResetViewRequested);
                    ui.close();
                }

                if ui.button("Hineinzoomen (+)").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                }

                if ui.button("Herauszoomen (-)").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                }

                ui.separator();

                // Checkboxen auf lokalen Kopien: die Mutation läuft über den Controller
                let mut grid_visible = state.options.grid_visible;
                if ui.checkbox(&mut grid_visible, "Gitter (G)").changed() {
                    events.push(AppIntent::GridToggled);
                }

                let mut legend_visible = state.options.legend_visible;
                if ui.checkbox(&mut legend_visible, "Legende (L)").changed() {
                    events.push(AppIntent::LegendToggled);
                }
            });
        });
    });

    events
}
