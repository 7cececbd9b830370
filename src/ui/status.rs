//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let centers = state
                .scene
                .circles()
                .iter()
                .map(|c| format!("{}: ({:.2}, {:.2})", c.id.number(), c.center.x, c.center.y))
                .collect::<Vec<_>>()
                .join("  ");
            ui.label(centers);

            ui.separator();

            for result in state.scene.pairs() {
                let text = match result.intersection {
                    Some(p) => format!("{}: ({:.2}, {:.2})", result.pair.label(), p.x, p.y),
                    None => format!("{}: parallel", result.pair.label()),
                };
                ui.label(text);
            }

            ui.separator();

            match state.scene.monge_residual() {
                Some(residual) => ui.label(format!("Kollinearität: {:.2e}", residual)),
                None => ui.label("Kollinearität: –"),
            };

            ui.separator();

            match state.drag.dragged() {
                Some(id) => ui.label(format!("Ziehe Kreis {}", id.number())),
                None => ui.label("Bereit"),
            };

            ui.separator();

            ui.label(format!("Zoom: {:.2}x", state.view.camera.zoom));

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(msg);
            }

            // FPS-Anzeige rechts
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let dt = ui.input(|i| i.stable_dt);
                if dt > 0.0 {
                    ui.label(format!("{:.0} FPS", 1.0 / dt));
                }
            });
        });
    });
}
