use super::support::Session;
use approx::assert_relative_eq;
use floorplan_editor::{
    point, Action, AppIntent, EditError, EditorTool, InteractionState, RoomKind, SharedEdge,
};

#[test]
fn test_rectangle_room_scenario() {
    let mut session = Session::new();

    let r1 = session.draw_rectangle((0.0, 0.0), (4.0, 3.0));

    let room = session.room(r1);
    assert_eq!(room.kind(), RoomKind::Rectangle);
    assert_eq!(room.edges().len(), 4);
    assert_relative_eq!(room.area(), 12.0);
    assert_eq!(
        room.points(),
        &[
            point(0.0, 0.0),
            point(4.0, 0.0),
            point(4.0, 3.0),
            point(0.0, 3.0),
            point(0.0, 0.0)
        ]
    );
    assert_eq!(room.display_label(), "Room 1 (12.00 m²)");
    assert!(session.state.editor.interaction.is_idle());
    assert_eq!(session.state.history.len(), 1);
    session.assert_invariants();
}

#[test]
fn test_rectangle_drawn_by_press_drag_release() {
    let mut session = Session::with_tool(EditorTool::RectangularWall);

    session.down(1.0, 1.0);
    session.move_to(3.0, 2.0);
    let InteractionState::DrawingRectangle(draft) = &session.state.editor.interaction else {
        panic!("Rechteck-Entwurf erwartet");
    };
    assert_eq!(draft.cursor(), point(3.0, 2.0));
    session.up(3.0, 2.0);

    let room = session.room(session.last_room_id());
    assert_relative_eq!(room.area(), 2.0);
}

#[test]
fn test_adjacent_room_registers_shared_edge_both_ways() {
    let mut session = Session::new();
    let r1 = session.draw_rectangle((0.0, 0.0), (4.0, 3.0));
    // Start auf vorhandener Ecke (4,0): Klick ohne Bewegung beginnt das Rechteck dort
    let r2 = session.draw_rectangle((4.0, 0.0), (8.0, 3.0));
    assert_ne!(r1, r2);

    assert!(session.room(r1).shared_edges().contains(&SharedEdge {
        edge_index: 1,
        other_room: r2,
        other_edge_index: 3,
    }));
    assert!(session.room(r2).shared_edges().contains(&SharedEdge {
        edge_index: 3,
        other_room: r1,
        other_edge_index: 1,
    }));

    // Der Schritt enthält CreateRoom und das neu registrierte Kantenpaar
    let step = session.state.history.steps().last().expect("Schritt");
    assert!(matches!(step.actions()[0], Action::CreateRoom { .. }));
    assert!(step.actions().iter().any(|a| matches!(
        a,
        Action::ShareEdge { room_a, edge_a: 1, room_b, edge_b: 3 } if *room_a == r1 && *room_b == r2
    )));
    session.assert_invariants();
}

#[test]
fn test_polygon_closes_on_start_point() {
    let mut session = Session::new();

    let id = session.draw_polygon(&[(0.0, 0.0), (3.0, 0.0), (3.0, 2.0), (0.0, 2.0)]);

    let room = session.room(id);
    assert_eq!(room.kind(), RoomKind::Polygon);
    assert_eq!(room.vertex_count(), 4);
    assert_relative_eq!(room.area(), 6.0);
    assert!(session.state.editor.interaction.is_idle());
    session.assert_invariants();
}

#[test]
fn test_polygon_points_snap_to_grid() {
    let mut session = Session::new();

    let id = session.draw_polygon(&[(0.1, -0.1), (2.9, 0.2), (1.4, 2.1)]);

    assert_eq!(
        session.room(id).points(),
        &[
            point(0.0, 0.0),
            point(3.0, 0.0),
            point(1.5, 2.0),
            point(0.0, 0.0)
        ]
    );
}

#[test]
fn test_double_click_finalizes_polygon() {
    let mut session = Session::new();

    session.down_at(0.0, 0.0, 1000);
    session.down_at(4.0, 0.0, 2000);
    session.down_at(4.0, 3.0, 3000);
    session.down_at(4.0, 3.0, 3150);

    assert_eq!(session.state.rooms.room_count(), 1);
    assert_eq!(session.room(session.last_room_id()).vertex_count(), 3);
    assert!(session.state.editor.interaction.is_idle());
}

#[test]
fn test_fast_click_away_from_last_point_appends() {
    let mut session = Session::new();

    session.down_at(0.0, 0.0, 1000);
    session.down_at(4.0, 0.0, 2000);
    session.down_at(4.0, 3.0, 2100);
    session.down_at(0.0, 3.0, 2200);

    assert!(session.state.rooms.is_empty());
    let InteractionState::DrawingPolygon(draft) = &session.state.editor.interaction else {
        panic!("Polygon-Entwurf erwartet");
    };
    assert_eq!(
        draft.points(),
        &[
            point(0.0, 0.0),
            point(4.0, 0.0),
            point(4.0, 3.0),
            point(0.0, 3.0)
        ]
    );
}

#[test]
fn test_closing_with_two_points_is_rejected_and_keeps_draft() {
    let mut session = Session::new();

    session.click(0.0, 0.0);
    session.click(4.0, 0.0);
    session.down(0.0, 0.0);

    assert!(session.state.rooms.is_empty());
    assert!(matches!(
        session.state.ui.last_error,
        Some(EditError::InvalidOperation(_))
    ));
    let InteractionState::DrawingPolygon(draft) = &session.state.editor.interaction else {
        panic!("Entwurf muss erhalten bleiben");
    };
    assert_eq!(draft.len(), 2);
}

#[test]
fn test_preview_tracks_cursor_and_closing_hint() {
    let mut session = Session::new();
    session.click(0.0, 0.0);
    session.click(4.0, 0.0);
    session.click(4.0, 3.0);

    session.move_to(2.1, 2.9);
    let scene = session.controller.build_render_scene(&session.state);
    assert_eq!(scene.preview.draft_points.len(), 3);
    assert_eq!(scene.preview.cursor, Some(point(2.0, 3.0)));
    assert!(!scene.preview.closing_hint);

    session.move_to(0.05, 0.05);
    let scene = session.controller.build_render_scene(&session.state);
    assert!(scene.preview.closing_hint);
}

#[test]
fn test_right_click_and_escape_cancel_drawing_without_logging() {
    let mut session = Session::new();
    session.click(0.0, 0.0);
    session.click(4.0, 0.0);
    session.right_up(4.0, 0.0);

    assert!(session.state.editor.interaction.is_idle());
    assert!(session.state.rooms.is_empty());
    assert!(session.state.history.is_empty());

    let mut session = Session::with_tool(EditorTool::RectangularWall);
    session.click(0.0, 0.0);
    session.send(AppIntent::CancelRequested);
    assert!(session.state.editor.interaction.is_idle());
    assert!(session.state.history.is_empty());
}

#[test]
fn test_tool_switch_cancels_drawing() {
    let mut session = Session::new();
    session.click(0.0, 0.0);
    session.click(4.0, 0.0);

    session.send(AppIntent::SetEditorToolRequested {
        tool: EditorTool::AddPoint,
    });

    assert!(session.state.editor.interaction.is_idle());
    assert_eq!(session.state.editor.active_tool, EditorTool::AddPoint);
}
