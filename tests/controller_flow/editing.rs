use super::support::Session;
use approx::assert_relative_eq;
use floorplan_editor::{point, Action, AppIntent, EditError, EditorTool, InteractionState};

#[test]
fn test_click_on_shared_edge_inserts_point_into_both_rooms() {
    let mut session = Session::new();
    let r1 = session.draw_rectangle((0.0, 0.0), (4.0, 3.0));
    let r2 = session.draw_rectangle((4.0, 0.0), (8.0, 3.0));
    session.send(AppIntent::SetEditorToolRequested {
        tool: EditorTool::AddPoint,
    });

    session.click(4.0, 1.5);

    assert_eq!(session.room(r1).vertex_count(), 5);
    assert_eq!(session.room(r2).vertex_count(), 5);
    assert_eq!(session.room(r1).vertex(2), Some(point(4.0, 1.5)));
    assert_eq!(session.room(r2).vertex(4), Some(point(4.0, 1.5)));
    // Beide Hälften der Wand bleiben geteilt
    assert_eq!(session.room(r1).shared_edges().len(), 2);
    assert_eq!(session.room(r2).shared_edges().len(), 2);

    let step = session.state.history.steps().last().expect("Schritt");
    assert!(matches!(step.actions()[0], Action::SplitSharedEdge { .. }));
    session.assert_invariants();
}

#[test]
fn test_click_on_outer_edge_inserts_into_single_room() {
    let mut session = Session::new();
    let r1 = session.draw_rectangle((0.0, 0.0), (4.0, 3.0));

    session.click(2.1, 0.2);

    assert_eq!(session.room(r1).vertex_count(), 5);
    assert_eq!(session.room(r1).vertex(1), Some(point(2.0, 0.0)));
    let step = session.state.history.steps().last().expect("Schritt");
    assert!(matches!(step.actions()[0], Action::MergeLines { .. }));
}

#[test]
fn test_click_on_hovered_edge_near_corner_inserts_unsnapped_point() {
    let mut session = Session::new();
    let r1 = session.draw_rectangle((0.0, 0.0), (4.0, 3.0));

    session.move_to(0.24, 0.2);
    let scene = session.controller.build_render_scene(&session.state);
    assert_eq!(scene.preview.hover_edge, Some((r1, 0)));

    // Rasterpunkt wäre die Ecke (0,0); eingefügt wird die Projektion
    session.click(0.24, 0.2);

    assert!(session.state.ui.last_error.is_none());
    let room = session.room(r1);
    assert_eq!(room.vertex_count(), 5);
    let inserted = room.vertex(1).expect("neue Ecke");
    assert_relative_eq!(inserted.x, 0.24, epsilon = 1e-5);
    assert_relative_eq!(inserted.z, 0.0, epsilon = 1e-5);
    session.assert_invariants();
}

#[test]
fn test_snapped_drag_keeps_vertex_and_undo_keeps_room() {
    let mut session = Session::new();
    let r1 = session.draw_rectangle((0.0, 0.0), (4.0, 3.0));

    session.drag((0.0, 0.0), (0.2, 0.1));
    assert_eq!(session.room(r1).vertex(0), Some(point(0.0, 0.0)));
    assert_eq!(session.state.history.len(), 2);

    session.send(AppIntent::UndoRequested);
    assert_eq!(session.state.rooms.room_count(), 1);
    assert_eq!(session.room(r1).vertex(0), Some(point(0.0, 0.0)));
    assert!(session.state.ui.last_error.is_none());
}

#[test]
fn test_drag_moves_vertex_and_undo_restores_it() {
    let mut session = Session::new();
    let r1 = session.draw_rectangle((0.0, 0.0), (4.0, 3.0));

    session.drag((4.0, 3.0), (5.0, 4.0));
    assert_eq!(session.room(r1).vertex(2), Some(point(5.0, 4.0)));
    assert_eq!(session.room(r1).points().len(), 5);

    session.send(AppIntent::UndoRequested);
    assert_eq!(session.room(r1).vertex(2), Some(point(4.0, 3.0)));
}

#[test]
fn test_drag_of_shared_corner_moves_all_rooms() {
    let mut session = Session::new();
    let r1 = session.draw_rectangle((0.0, 0.0), (4.0, 3.0));
    let r2 = session.draw_rectangle((4.0, 0.0), (8.0, 3.0));

    session.drag((4.0, 3.0), (4.5, 3.5));

    assert_eq!(session.room(r1).vertex(2), Some(point(4.5, 3.5)));
    assert_eq!(session.room(r2).vertex(3), Some(point(4.5, 3.5)));
    assert_eq!(session.room(r1).shared_edges().len(), 1);
    let step = session.state.history.steps().last().expect("Schritt");
    assert!(matches!(
        step.actions()[0],
        Action::MoveSharedVertex { ref vertices, .. } if vertices.len() == 2
    ));
    session.assert_invariants();

    session.send(AppIntent::UndoRequested);
    assert_eq!(session.room(r1).vertex(2), Some(point(4.0, 3.0)));
    assert_eq!(session.room(r2).vertex(3), Some(point(4.0, 3.0)));
}

#[test]
fn test_escape_during_drag_restores_without_logging() {
    let mut session = Session::new();
    let r1 = session.draw_rectangle((0.0, 0.0), (4.0, 3.0));
    let steps_before = session.state.history.len();

    session.down(4.0, 3.0);
    session.move_to(6.0, 5.0);
    assert_eq!(session.room(r1).vertex(2), Some(point(6.0, 5.0)));
    session.send(AppIntent::CancelRequested);

    assert!(session.state.editor.interaction.is_idle());
    assert_eq!(session.room(r1).vertex(2), Some(point(4.0, 3.0)));
    assert_eq!(session.state.history.len(), steps_before);
}

#[test]
fn test_drag_onto_neighbour_is_skipped() {
    let mut session = Session::new();
    let r1 = session.draw_rectangle((0.0, 0.0), (4.0, 3.0));

    session.down(4.0, 3.0);
    session.move_to(4.0, 2.0);
    session.move_to(4.0, 0.0);
    assert!(matches!(
        session.state.editor.interaction,
        InteractionState::DraggingVertex(_)
    ));
    session.up(4.0, 0.0);

    // Die letzte gültige Zwischenposition bleibt bestehen
    assert_eq!(session.room(r1).vertex(2), Some(point(4.0, 2.0)));
    session.assert_invariants();
}

#[test]
fn test_delete_point_on_triangle_is_rejected() {
    let mut session = Session::new();
    let id = session.draw_polygon(&[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)]);
    let before = session.room(id).clone();
    let steps_before = session.state.history.len();
    session.send(AppIntent::SetEditorToolRequested {
        tool: EditorTool::DeletePoint,
    });

    session.click(2.0, 3.0);

    assert!(matches!(
        session.state.ui.last_error,
        Some(EditError::InvalidOperation(_))
    ));
    assert_eq!(session.room(id), &before);
    assert_eq!(session.state.history.len(), steps_before);
}

#[test]
fn test_delete_point_removes_vertex_and_can_be_undone() {
    let mut session = Session::new();
    let id = session.draw_rectangle((0.0, 0.0), (4.0, 3.0));
    session.send(AppIntent::SetEditorToolRequested {
        tool: EditorTool::DeletePoint,
    });

    session.click(4.0, 3.0);
    assert_eq!(session.room(id).vertex_count(), 3);
    assert!(session.state.ui.last_error.is_none());

    session.send(AppIntent::UndoRequested);
    assert_eq!(session.room(id).vertex_count(), 4);
    assert_eq!(session.room(id).vertex(2), Some(point(4.0, 3.0)));
}

#[test]
fn test_delete_point_intent_with_unknown_room_reports_error() {
    let mut session = Session::new();
    session.draw_rectangle((0.0, 0.0), (4.0, 3.0));

    session.send(AppIntent::DeletePointRequested {
        room_id: floorplan_editor::RoomId(99),
        index: 0,
    });

    assert_eq!(
        session.state.ui.last_error,
        Some(EditError::RoomNotFound(floorplan_editor::RoomId(99)))
    );
}
