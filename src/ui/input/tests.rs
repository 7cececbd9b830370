use super::*;

const SCREEN: egui::Vec2 = egui::vec2(800.0, 600.0);
const CANVAS: egui::Vec2 = egui::vec2(200.0, 150.0);

/// Hält Context und Input-Zustand über mehrere Frames.
struct Viewport {
    ctx: egui::Context,
    input: InputState,
    camera: Camera2D,
    options: ViewerOptions,
}

impl Viewport {
    fn new() -> Self {
        Self {
            ctx: egui::Context::default(),
            input: InputState::new(),
            camera: Camera2D::new(),
            options: ViewerOptions::default(),
        }
    }

    /// Führt einen Frame aus und liefert die Intents sowie das Zeichenflächen-Rechteck.
    fn frame(&mut self, input_events: Vec<egui::Event>) -> (Vec<AppIntent>, egui::Rect) {
        let raw_input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, SCREEN)),
            events: input_events,
            ..Default::default()
        };

        let Self {
            ctx,
            input,
            camera,
            options,
        } = self;
        let mut intents = Vec::new();
        let mut canvas = egui::Rect::NOTHING;
        let _ = ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(CANVAS, egui::Sense::click_and_drag());
                intents = input.collect_viewport_events(
                    ui,
                    &response,
                    [rect.width(), rect.height()],
                    camera,
                    options,
                );
                canvas = rect;
            });
        });

        (intents, canvas)
    }
}

fn primary_button(pos: egui::Pos2, pressed: bool) -> egui::Event {
    egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::default(),
    }
}

fn pressed_positions(intents: &[AppIntent]) -> Vec<Option<glam::DVec2>> {
    intents
        .iter()
        .filter_map(|intent| match intent {
            AppIntent::PointerPressed { world_pos } => Some(*world_pos),
            _ => None,
        })
        .collect()
}

fn count_moves(intents: &[AppIntent]) -> usize {
    intents
        .iter()
        .filter(|intent| matches!(intent, AppIntent::PointerMoved { .. }))
        .count()
}

#[test]
fn first_intent_reports_canvas_size() {
    let mut viewport = Viewport::new();
    let (intents, canvas) = viewport.frame(Vec::new());

    assert_eq!(
        intents.first(),
        Some(&AppIntent::ViewportResized {
            size: [canvas.width(), canvas.height()],
        })
    );
}

#[test]
fn press_outside_canvas_has_no_world_position() {
    let mut viewport = Viewport::new();
    let outside = egui::pos2(700.0, 500.0);

    let (_, canvas) = viewport.frame(vec![egui::Event::PointerMoved(outside)]);
    assert!(!canvas.contains(outside));

    let (intents, _) = viewport.frame(vec![primary_button(outside, true)]);
    assert_eq!(pressed_positions(&intents), vec![None]);
}

#[test]
fn press_inside_canvas_carries_world_position() {
    let mut viewport = Viewport::new();
    let (_, canvas) = viewport.frame(Vec::new());
    let inside = canvas.center();

    viewport.frame(vec![egui::Event::PointerMoved(inside)]);
    let (intents, _) = viewport.frame(vec![primary_button(inside, true)]);

    let positions = pressed_positions(&intents);
    assert_eq!(positions.len(), 1);
    let world = positions[0].expect("Weltposition innerhalb der Zeichenfläche erwartet");
    // Die Mitte der Zeichenfläche zeigt auf die Kameraposition
    assert!((world - Camera2D::DEFAULT_POSITION).length() < 1e-6);
}

#[test]
fn release_outside_canvas_is_still_reported() {
    let mut viewport = Viewport::new();
    let outside = egui::pos2(700.0, 500.0);

    viewport.frame(vec![
        egui::Event::PointerMoved(outside),
        primary_button(outside, true),
    ]);
    let (intents, _) = viewport.frame(vec![primary_button(outside, false)]);

    assert!(intents.contains(&AppIntent::PointerReleased));
}

#[test]
fn motion_outside_canvas_has_no_world_position() {
    let mut viewport = Viewport::new();
    let (intents, _) = viewport.frame(vec![egui::Event::PointerMoved(egui::pos2(700.0, 500.0))]);

    assert!(intents.contains(&AppIntent::PointerMoved { world_pos: None }));
}

#[test]
fn unchanged_pointer_position_emits_no_motion() {
    let mut viewport = Viewport::new();
    let (_, canvas) = viewport.frame(Vec::new());
    let inside = canvas.center();

    let (first, _) = viewport.frame(vec![egui::Event::PointerMoved(inside)]);
    assert_eq!(count_moves(&first), 1);

    let (second, _) = viewport.frame(Vec::new());
    assert_eq!(count_moves(&second), 0);
}
