use super::support::Session;
use floorplan_editor::{point, AppCommand, AppIntent, EditError, EditorOptions, PointerButton};

#[test]
fn test_pointer_input_in_3d_mode_is_rejected() {
    let mut session = Session::new();
    session.draw_rectangle((0.0, 0.0), (4.0, 3.0));
    session.send(AppIntent::ViewModeToggled { is_3d: true });

    session.click(10.0, 10.0);

    assert!(matches!(
        session.state.ui.last_error,
        Some(EditError::InvalidOperation(_))
    ));
    assert!(session.state.editor.interaction.is_idle());
    assert_eq!(session.state.rooms.room_count(), 1);
    assert!(matches!(
        session.state.command_log.last(),
        Some(AppCommand::RejectInput { .. })
    ));

    // 3D-Szene enthält die Wände, auch wenn keine Eingabe möglich ist
    let scene = session.controller.build_render_scene(&session.state);
    assert!(scene.is_3d_mode);
    assert!(scene.has_rooms());
    assert_eq!(scene.walls.len(), 4);
}

#[test]
fn test_switching_to_3d_cancels_drawing() {
    let mut session = Session::new();
    session.click(0.0, 0.0);
    session.click(4.0, 0.0);

    session.send(AppIntent::ViewModeToggled { is_3d: true });

    assert!(session.state.editor.interaction.is_idle());
    session.send(AppIntent::ViewModeToggled { is_3d: false });
    session.draw_rectangle((0.0, 0.0), (4.0, 3.0));
    assert_eq!(session.state.rooms.room_count(), 1);
}

#[test]
fn test_grid_snap_toggle_keeps_raw_positions() {
    let mut session = Session::new();
    session.send(AppIntent::GridSnapToggled { enabled: false });

    let id = session.draw_polygon(&[(0.1, 0.1), (3.3, 0.2), (1.7, 2.6)]);

    assert_eq!(session.room(id).vertex(1), Some(point(3.3, 0.2)));
}

#[test]
fn test_pointer_without_ground_hit_is_ignored() {
    let mut session = Session::new();
    session.click(0.0, 0.0);

    session.send(AppIntent::PointerDown {
        world_pos: None,
        button: PointerButton::Primary,
        time_ms: 99_999,
    });
    session.send(AppIntent::PointerMove { world_pos: None });

    assert!(session.state.editor.interaction.is_drawing());
    assert!(session.state.ui.last_error.is_none());
}

#[test]
fn test_invalid_options_are_rejected_and_previous_values_stay() {
    let mut session = Session::new();
    let options = EditorOptions {
        tolerance: -1.0,
        ..EditorOptions::default()
    };

    let result = session.controller.handle_intent(
        &mut session.state,
        AppIntent::OptionsChanged {
            options: Box::new(options),
        },
    );

    assert!(result.is_err());
    assert_eq!(session.state.options, EditorOptions::default());
}

#[test]
fn test_options_change_history_depth_and_grid() {
    let mut session = Session::new();
    let options = EditorOptions {
        history_max_depth: 1,
        grid_snap_enabled: false,
        ..EditorOptions::default()
    };
    session.send(AppIntent::OptionsChanged {
        options: Box::new(options),
    });

    session.draw_rectangle((0.0, 0.0), (4.0, 3.0));
    session.draw_rectangle((10.0, 0.0), (12.0, 2.0));

    assert_eq!(session.state.history.len(), 1);
    assert!(!session.state.view.grid_snap_enabled);

    session.send(AppIntent::ResetOptionsRequested);
    assert_eq!(session.state.options, EditorOptions::default());
    assert!(session.state.view.grid_snap_enabled);
}
