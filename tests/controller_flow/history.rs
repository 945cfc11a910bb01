use super::support::Session;
use floorplan_editor::{point, AppIntent, EditError, EditorOptions, EditorTool, RoomStore};

/// Baut einen Verlauf aus mehreren unterschiedlichen Schritten auf.
fn session_with_edits() -> Session {
    let mut session = Session::new();
    session.draw_rectangle((0.0, 0.0), (4.0, 3.0));
    session.draw_rectangle((4.0, 0.0), (8.0, 3.0));
    session.click(4.0, 1.5);
    session.drag((8.0, 3.0), (9.0, 4.0));
    session.draw_polygon(&[(0.0, 5.0), (3.0, 5.0), (1.5, 7.0)]);
    session
}

#[test]
fn test_undo_redo_sequence_restores_every_snapshot() {
    let mut session = session_with_edits();
    let steps = session.state.history.len();
    assert_eq!(steps, 5);

    let mut snapshots: Vec<RoomStore> = vec![(*session.state.rooms).clone()];
    for _ in 0..steps {
        session.send(AppIntent::UndoRequested);
        assert!(session.state.ui.last_error.is_none());
        snapshots.push((*session.state.rooms).clone());
        session.assert_invariants();
    }
    assert!(session.state.rooms.is_empty());

    for expected in snapshots.iter().rev().skip(1) {
        session.send(AppIntent::RedoRequested);
        assert_eq!(&*session.state.rooms, expected);
        session.assert_invariants();
    }
    assert!(!session.state.can_redo());
}

#[test]
fn test_undo_on_empty_log_reports_nothing_to_undo() {
    let mut session = Session::new();

    session.send(AppIntent::UndoRequested);
    assert_eq!(session.state.ui.last_error, Some(EditError::NothingToUndo));

    session.send(AppIntent::RedoRequested);
    assert_eq!(session.state.ui.last_error, Some(EditError::NothingToRedo));
}

#[test]
fn test_new_edit_after_undo_discards_redo_steps() {
    let mut session = Session::new();
    session.draw_rectangle((0.0, 0.0), (4.0, 3.0));
    session.draw_rectangle((10.0, 0.0), (12.0, 2.0));

    session.send(AppIntent::UndoRequested);
    assert!(session.state.can_redo());

    session.draw_rectangle((0.0, 10.0), (2.0, 12.0));
    assert!(!session.state.can_redo());
    assert_eq!(session.state.history.len(), 2);
}

#[test]
fn test_undo_cancels_running_draft() {
    let mut session = Session::new();
    session.draw_rectangle((0.0, 0.0), (4.0, 3.0));
    session.send(AppIntent::SetEditorToolRequested {
        tool: EditorTool::PolygonWall,
    });
    session.click(10.0, 10.0);
    session.click(12.0, 10.0);

    session.send(AppIntent::UndoRequested);

    assert!(session.state.editor.interaction.is_idle());
    assert!(session.state.rooms.is_empty());
}

#[test]
fn test_undo_of_shared_split_removes_point_from_all_rooms() {
    let mut session = Session::new();
    let r1 = session.draw_rectangle((0.0, 0.0), (4.0, 3.0));
    let r2 = session.draw_rectangle((4.0, 0.0), (8.0, 3.0));
    session.click(4.0, 1.5);

    session.send(AppIntent::UndoRequested);

    assert_eq!(session.room(r1).vertex_count(), 4);
    assert_eq!(session.room(r2).vertex_count(), 4);
    assert!(!session.room(r1).points().contains(&point(4.0, 1.5)));
    session.assert_invariants();
}

#[test]
fn test_shrinking_history_depth_after_undo_redoes_only_consistent_steps() {
    let mut session = Session::new();
    let mut ids = Vec::new();
    for i in 0..5 {
        let x = i as f32 * 10.0;
        ids.push(session.draw_rectangle((x, 0.0), (x + 4.0, 3.0)));
    }
    for _ in 0..5 {
        session.send(AppIntent::UndoRequested);
    }
    assert!(session.state.rooms.is_empty());

    let options = EditorOptions {
        history_max_depth: 2,
        ..EditorOptions::default()
    };
    session.send(AppIntent::OptionsChanged {
        options: Box::new(options),
    });
    session.send(AppIntent::RedoRequested);

    let rooms: Vec<_> = session.state.rooms.rooms().map(|room| room.id()).collect();
    assert_eq!(rooms, vec![ids[0]]);
    assert!(session.state.ui.last_error.is_none());

    session.send(AppIntent::RedoRequested);
    session.send(AppIntent::RedoRequested);
    let rooms: Vec<_> = session.state.rooms.rooms().map(|room| room.id()).collect();
    assert_eq!(rooms, vec![ids[0], ids[1]]);
    assert_eq!(session.state.ui.last_error, Some(EditError::NothingToRedo));
}
