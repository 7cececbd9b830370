//! Primäre Maustaste: Drücken, Bewegen, Loslassen.

use super::{InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Meldet das Drücken der primären Maustaste.
    ///
    /// Klicks außerhalb der Zeichenfläche (z.B. im Menü) erhalten keine Weltposition.
    pub(crate) fn handle_press(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let (pressed, origin) = ctx
            .ui
            .input(|i| (i.pointer.primary_pressed(), i.pointer.press_origin()));
        if !pressed {
            return;
        }

        let world_pos = origin
            .filter(|_| ctx.response.contains_pointer())
            .and_then(|pos| ctx.world_pos_inside(pos));
        events.push(AppIntent::PointerPressed { world_pos });
    }

    /// Meldet Mausbewegungen, sobald sich die Position geändert hat.
    pub(crate) fn handle_motion(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let Some(pos) = ctx.ui.input(|i| i.pointer.latest_pos()) else {
            return;
        };
        if self.last_pointer_pos == Some(pos) {
            return;
        }
        self.last_pointer_pos = Some(pos);

        events.push(AppIntent::PointerMoved {
            world_pos: ctx.world_pos_inside(pos),
        });
    }

    /// Meldet das Loslassen der primären Maustaste, unabhängig von der Position.
    pub(crate) fn handle_release(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if ctx.ui.input(|i| i.pointer.primary_released()) {
            events.push(AppIntent::PointerReleased);
        }
    }
}
