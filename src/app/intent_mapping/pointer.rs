//! Entscheidungen der Interaktions-State-Machine für Pointer-Events.
//!
//! - `Idle`: Klick auf Ecke greift (bzw. löscht) sie, Klick auf Kante fügt
//!   einen Punkt ein, sonst beginnt ein Zeichenvorgang. Bewegung aktualisiert Hover.
//! - `DrawingPolygon`: Klick schließt (Startpunkt/Doppelklick) oder hängt an.
//! - `DrawingRectangle`: Klick oder Loslassen nach Aufziehen setzt die zweite Ecke.
//! - `DraggingVertex`: Bewegung verschiebt, Loslassen beendet.
//! - Rechts loslassen bricht jede laufende Interaktion ab.

use crate::app::events::PointerButton;
use crate::app::tools::{snap_draw_point, snap_free_point, InteractionState};
use crate::app::use_cases::editing::split_point_on_edge;
use crate::app::{AppCommand, AppState, EditorTool};
use crate::core::shared_edges::pick_edge;
use crate::core::Point;

const REJECT_3D: &str = "Zeichnen und Ziehen sind in der 3D-Ansicht gesperrt";

/// Gesnappter Zeichenpunkt für den aktuellen Zustand.
fn draw_point(state: &AppState, world_pos: Point) -> Point {
    snap_draw_point(
        world_pos,
        &state.rooms,
        &state.options,
        state.view.grid_snap_enabled,
    )
    .position()
}

pub(super) fn map_pointer_down(
    state: &AppState,
    world_pos: Point,
    button: PointerButton,
    time_ms: u64,
) -> Vec<AppCommand> {
    if button != PointerButton::Primary {
        return Vec::new();
    }
    if state.view.is_3d_mode {
        return vec![AppCommand::RejectInput {
            reason: REJECT_3D.into(),
        }];
    }

    match &state.editor.interaction {
        InteractionState::Idle => map_idle_down(state, world_pos, time_ms),
        InteractionState::DrawingPolygon(draft) => {
            let candidate = draw_point(state, world_pos);
            let options = &state.options;
            let finishes = draft.is_closing_click(candidate, options.closing_tolerance())
                || draft.is_finishing_double_click(
                    candidate,
                    time_ms,
                    options.double_click_ms,
                    options.vertex_hit_radius,
                );
            if finishes {
                vec![AppCommand::FinalizePolygon]
            } else {
                vec![AppCommand::AppendPolygonPoint {
                    world_pos: candidate,
                    time_ms,
                }]
            }
        }
        InteractionState::DrawingRectangle(_) => vec![AppCommand::FinalizeRectangle {
            world_pos: draw_point(state, world_pos),
        }],
        InteractionState::DraggingVertex(_) => Vec::new(),
    }
}

/// Idle: Ecke vor Kante vor neuem Zeichenvorgang.
fn map_idle_down(state: &AppState, world_pos: Point, time_ms: u64) -> Vec<AppCommand> {
    let tool = state.editor.active_tool;
    let options = &state.options;

    if let Some(hit) = state.rooms.pick_vertex(world_pos, options.vertex_hit_radius) {
        return match tool {
            EditorTool::DeletePoint => vec![AppCommand::DeletePoint {
                room_id: hit.vertex.room_id,
                index: hit.vertex.index,
            }],
            _ => vec![AppCommand::BeginVertexDrag {
                vertex: hit.vertex,
                time_ms,
            }],
        };
    }

    if tool != EditorTool::DeletePoint {
        if let Some(hit) = pick_edge(&state.rooms, world_pos, options.edge_pick_radius) {
            let split_at = split_point_on_edge(
                &state.rooms,
                &hit,
                options.grid_step,
                state.view.grid_snap_enabled,
            );
            return vec![AppCommand::SplitEdge {
                room_id: hit.room_id,
                edge_index: hit.edge_index,
                world_pos: split_at,
            }];
        }
    }

    match tool {
        EditorTool::PolygonWall => vec![AppCommand::BeginPolygon {
            world_pos: draw_point(state, world_pos),
            time_ms,
        }],
        EditorTool::RectangularWall => vec![AppCommand::BeginRectangle {
            world_pos: draw_point(state, world_pos),
        }],
        EditorTool::AddPoint | EditorTool::DeletePoint => Vec::new(),
    }
}

pub(super) fn map_pointer_move(state: &AppState, world_pos: Point) -> Vec<AppCommand> {
    match &state.editor.interaction {
        InteractionState::Idle => vec![AppCommand::UpdateHover { world_pos }],
        InteractionState::DrawingPolygon(_) | InteractionState::DrawingRectangle(_) => {
            vec![AppCommand::UpdateDrawCursor {
                world_pos: draw_point(state, world_pos),
            }]
        }
        InteractionState::DraggingVertex(_) => vec![AppCommand::UpdateVertexDrag {
            world_pos: snap_free_point(world_pos, &state.options, state.view.grid_snap_enabled),
        }],
    }
}

pub(super) fn map_pointer_up(
    state: &AppState,
    world_pos: Point,
    button: PointerButton,
) -> Vec<AppCommand> {
    match (&state.editor.interaction, button) {
        (InteractionState::DraggingVertex(_), PointerButton::Primary) => {
            vec![AppCommand::EndVertexDrag]
        }
        (InteractionState::DrawingRectangle(draft), PointerButton::Primary) => {
            let corner = draw_point(state, world_pos);
            if draft.is_degenerate(corner, state.options.tolerance) {
                // Klick statt Aufziehen: nächster Klick setzt die zweite Ecke
                Vec::new()
            } else {
                vec![AppCommand::FinalizeRectangle { world_pos: corner }]
            }
        }
        (
            InteractionState::DrawingPolygon(_)
            | InteractionState::DrawingRectangle(_)
            | InteractionState::DraggingVertex(_),
            PointerButton::Secondary,
        ) => vec![AppCommand::CancelInteraction],
        _ => Vec::new(),
    }
}
