use super::*;

fn key_event(key: egui::Key) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::default(),
    }
}

fn collect_with_events(input_events: Vec<egui::Event>) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    raw_input.events = input_events;

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        events = collect_keyboard_intents(ctx);
    });

    events
}

#[test]
fn r_resets_view() {
    let events = collect_with_events(vec![key_event(egui::Key::R)]);
    assert_eq!(events, vec![AppIntent::ResetViewRequested]);
}

#[test]
fn g_and_l_toggle_grid_and_legend() {
    let events = collect_with_events(vec![key_event(egui::Key::G), key_event(egui::Key::L)]);
    assert_eq!(events, vec![AppIntent::GridToggled, AppIntent::LegendToggled]);
}

#[test]
fn plus_and_minus_zoom() {
    let events = collect_with_events(vec![
        key_event(egui::Key::Plus),
        key_event(egui::Key::Minus),
    ]);
    assert_eq!(
        events,
        vec![AppIntent::ZoomInRequested, AppIntent::ZoomOutRequested]
    );
}

#[test]
fn unrelated_keys_produce_nothing() {
    let events = collect_with_events(vec![key_event(egui::Key::Q)]);
    assert!(events.is_empty());
}
