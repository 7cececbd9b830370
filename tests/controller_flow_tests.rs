use glam::DVec2;
use monge_tangents::{
    outer_tangent_points, AppCommand, AppController, AppIntent, AppState, CircleId, CirclePair,
    DragState,
};

fn press(controller: &mut AppController, state: &mut AppState, x: f64, y: f64) {
    controller
        .handle_intent(
            state,
            AppIntent::PointerPressed {
                world_pos: Some(DVec2::new(x, y)),
            },
        )
        .expect("PointerPressed sollte ohne Fehler durchlaufen");
}

fn move_to(controller: &mut AppController, state: &mut AppState, world_pos: Option<DVec2>) {
    controller
        .handle_intent(state, AppIntent::PointerMoved { world_pos })
        .expect("PointerMoved sollte ohne Fehler durchlaufen");
}

fn release(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(state, AppIntent::PointerReleased)
        .expect("PointerReleased sollte ohne Fehler durchlaufen");
}

#[test]
fn test_press_drag_release_moves_only_the_pressed_circle() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let before_b = state.scene.circle(CircleId::B).center;
    let before_c = state.scene.circle(CircleId::C).center;

    press(&mut controller, &mut state, 0.2, 0.1);
    assert_eq!(state.drag, DragState::Dragging(CircleId::A));

    move_to(&mut controller, &mut state, Some(DVec2::new(-4.0, 2.0)));
    move_to(&mut controller, &mut state, Some(DVec2::new(-6.0, -1.0)));
    assert_eq!(state.scene.circle(CircleId::A).center, DVec2::new(-6.0, -1.0));
    assert!(!state.scene.is_stale());

    release(&mut controller, &mut state);
    assert_eq!(state.drag, DragState::Idle);

    // Nach dem Loslassen ändert eine Bewegung nichts mehr
    move_to(&mut controller, &mut state, Some(DVec2::new(10.0, 10.0)));
    assert_eq!(state.scene.circle(CircleId::A).center, DVec2::new(-6.0, -1.0));
    assert_eq!(state.scene.circle(CircleId::B).center, before_b);
    assert_eq!(state.scene.circle(CircleId::C).center, before_c);
}

#[test]
fn test_drag_logs_move_and_recompute_commands() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    press(&mut controller, &mut state, 3.0, 1.0);
    move_to(&mut controller, &mut state, Some(DVec2::new(3.5, 1.5)));

    let entries = state.command_log.entries();
    assert_eq!(
        entries,
        &[
            AppCommand::BeginCircleDrag { id: CircleId::B },
            AppCommand::MoveCircle {
                id: CircleId::B,
                center: DVec2::new(3.5, 1.5),
            },
            AppCommand::RecomputeScene,
        ]
    );
}

#[test]
fn test_motion_while_idle_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let before = *state.scene.circles();

    move_to(&mut controller, &mut state, Some(DVec2::new(0.0, 0.0)));

    assert_eq!(state.scene.circles(), &before);
    assert!(state.command_log.is_empty());
}

#[test]
fn test_press_outside_circles_or_surface_stays_idle() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    press(&mut controller, &mut state, 15.0, -10.0);
    assert_eq!(state.drag, DragState::Idle);

    controller
        .handle_intent(&mut state, AppIntent::PointerPressed { world_pos: None })
        .expect("PointerPressed ohne Position sollte robust sein");
    assert_eq!(state.drag, DragState::Idle);
    assert!(state.command_log.is_empty());
}

#[test]
fn test_motion_outside_surface_keeps_drag_but_not_position() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    press(&mut controller, &mut state, 5.0, 3.0);
    move_to(&mut controller, &mut state, Some(DVec2::new(6.0, 4.0)));
    move_to(&mut controller, &mut state, None);

    assert_eq!(state.drag, DragState::Dragging(CircleId::C));
    assert_eq!(state.scene.circle(CircleId::C).center, DVec2::new(6.0, 4.0));

    release(&mut controller, &mut state);
    assert_eq!(state.drag, DragState::Idle);
}

#[test]
fn test_overlapping_circles_first_in_draw_order_wins() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    // B über A schieben
    press(&mut controller, &mut state, 3.0, 1.0);
    move_to(&mut controller, &mut state, Some(DVec2::new(1.0, 0.0)));
    release(&mut controller, &mut state);

    // (0.5, 0) liegt in A und in B
    press(&mut controller, &mut state, 0.5, 0.0);
    assert_eq!(state.drag, DragState::Dragging(CircleId::A));
}

#[test]
fn test_dragging_a_onto_b_yields_degenerate_pair_without_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let b_center = state.scene.circle(CircleId::B).center;
    let bc_before = *state.scene.pair(CirclePair::BC);

    press(&mut controller, &mut state, 0.0, 0.0);
    move_to(&mut controller, &mut state, Some(b_center));
    release(&mut controller, &mut state);

    let ab = state.scene.pair(CirclePair::AB);
    assert!(ab.is_degenerate());
    for point in ab.tangents.points() {
        assert_eq!(point, b_center);
    }
    assert_eq!(ab.intersection, None);

    assert_eq!(state.scene.pair(CirclePair::BC), &bc_before);

    let ac = state.scene.pair(CirclePair::AC);
    let expected = outer_tangent_points(
        b_center,
        state.scene.circle(CircleId::C).center,
        state.scene.circle(CircleId::A).radius(),
        state.scene.circle(CircleId::C).radius(),
    );
    assert_eq!(ac.tangents, expected);
    assert!(ac.intersection.is_some());
    assert_eq!(state.scene.connecting_line(), None);

    let render_scene = controller.build_render_scene(&state, [900.0, 800.0]);
    assert_eq!(render_scene.markers.len(), 2);
    assert_eq!(render_scene.tangent_segments.len(), 4);
    assert!(!render_scene.has_connecting_line());
}

#[test]
fn test_default_configuration_renders_full_monge_line() {
    let controller = AppController::new();
    let state = AppState::new();

    let render_scene = controller.build_render_scene(&state, [900.0, 800.0]);

    assert_eq!(render_scene.circles.len(), 3);
    assert_eq!(render_scene.tangent_segments.len(), 6);
    assert_eq!(render_scene.markers.len(), 3);
    assert!(render_scene.has_connecting_line());
}

#[test]
fn test_view_intents_update_camera_and_options() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ZoomInRequested)
        .expect("ZoomIn sollte durchlaufen");
    assert!(state.view.camera.zoom > 1.0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::CameraPan {
                delta: DVec2::new(1.0, -2.0),
            },
        )
        .expect("Pan sollte durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::ResetViewRequested)
        .expect("Reset sollte durchlaufen");
    assert_eq!(state.view.camera, Default::default());

    controller
        .handle_intent(&mut state, AppIntent::GridToggled)
        .expect("GridToggled sollte durchlaufen");
    assert!(!state.options.grid_visible);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    assert_eq!(state.command_log.last(), Some(&AppCommand::RequestExit));
}

#[test]
fn test_save_options_writes_toml_and_sets_status() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let path = std::env::temp_dir().join(format!(
        "monge_tangents_flow_{}.toml",
        std::process::id()
    ));
    state.options_path = path.clone();
    state.options.legend_visible = false;

    controller
        .handle_intent(&mut state, AppIntent::SaveOptionsRequested)
        .expect("SaveOptionsRequested sollte ohne Fehler durchlaufen");

    let content = std::fs::read_to_string(&path).expect("Optionen-Datei sollte existieren");
    let _ = std::fs::remove_file(&path);

    assert!(content.contains("legend_visible = false"));
    assert!(state.ui.status_message.is_some());
}
