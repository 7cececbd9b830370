//! Viewport-Input-Handling: Maus-Events, Pan, Scroll → AppIntent.
//!
//! Aufgeteilt in Submodule:
//! - `pointer` — Drücken, Bewegen, Loslassen der primären Maustaste
//! - `pan` — Kamera-Pan mit rechter/mittlerer Maustaste
//! - `zoom` — Scroll-Zoom auf Mausposition

mod pan;
mod pointer;
mod zoom;

use crate::app::{AppIntent, Camera2D};
use crate::shared::ViewerOptions;
use glam::DVec2;

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub camera: &'a Camera2D,
    pub options: &'a ViewerOptions,
}

impl ViewportContext<'_> {
    /// Weltposition eines Bildschirmpunkts, falls er in der Zeichenfläche liegt.
    pub fn world_pos_inside(&self, pos: egui::Pos2) -> Option<DVec2> {
        self.response
            .rect
            .contains(pos)
            .then(|| screen_pos_to_world(pos, self.response, self.viewport_size, self.camera))
    }
}

/// Verwaltet den Input-Zustand für das Viewport.
#[derive(Default)]
pub struct InputState {
    /// Zuletzt gemeldete Mausposition (Bildschirm)
    pub(crate) last_pointer_pos: Option<egui::Pos2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            last_pointer_pos: None,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Reihenfolge pro Frame: Größe, Drücken, Bewegen, Loslassen, Pan, Zoom.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        options: &ViewerOptions,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            camera,
            options,
        };

        let mut events = vec![AppIntent::ViewportResized {
            size: viewport_size,
        }];

        self.handle_press(&ctx, &mut events);
        self.handle_motion(&ctx, &mut events);
        self.handle_release(&ctx, &mut events);
        self.handle_camera_pan(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}

/// Rechnet eine Bildschirmposition in Weltkoordinaten um.
pub(crate) fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> DVec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_world(
        DVec2::new(local.x as f64, local.y as f64),
        DVec2::new(viewport_size[0] as f64, viewport_size[1] as f64),
    )
}

#[cfg(test)]
mod tests;
