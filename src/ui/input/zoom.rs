//! Mausrad-Zoom auf die Weltposition unter dem Zeiger.

use super::{screen_pos_to_world, InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Ein Rad-Ereignis über der Zeichenfläche ergibt genau einen `CameraZoom`
    /// mit `camera_scroll_zoom_step` bzw. dessen Kehrwert.
    pub(crate) fn handle_scroll_zoom(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.hovered() {
            return;
        }
        let scroll_y = ctx.ui.input(|i| i.smooth_scroll_delta.y);
        if scroll_y == 0.0 {
            return;
        }

        let factor = if scroll_y > 0.0 {
            ctx.options.camera_scroll_zoom_step
        } else {
            ctx.options.camera_scroll_zoom_step.recip()
        };
        let focus_world = ctx
            .response
            .hover_pos()
            .map(|pos| screen_pos_to_world(pos, ctx.response, ctx.viewport_size, ctx.camera));
        events.push(AppIntent::CameraZoom {
            factor,
            focus_world,
        });
    }
}
