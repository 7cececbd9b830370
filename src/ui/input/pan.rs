//! Kamera-Pan mit rechter oder mittlerer Maustaste.

use super::{InputState, ViewportContext};
use crate::app::AppIntent;
use glam::DVec2;

impl InputState {
    /// Verschiebt die Kamera entgegen der Mausbewegung.
    pub(crate) fn handle_camera_pan(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !(ctx.response.dragged_by(egui::PointerButton::Secondary)
            || ctx.response.dragged_by(egui::PointerButton::Middle))
        {
            return;
        }

        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        let viewport = DVec2::new(ctx.viewport_size[0] as f64, ctx.viewport_size[1] as f64);
        let ppw = ctx.camera.pixels_per_world(viewport);
        // Bildschirm-Y zeigt nach unten, Welt-Y nach oben
        events.push(AppIntent::CameraPan {
            delta: DVec2::new(
                -pointer_delta.x as f64 / ppw,
                pointer_delta.y as f64 / ppw,
            ),
        });
    }
}
