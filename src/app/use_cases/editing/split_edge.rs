//! Use-Case: Punkt in eine Kante einfügen (mit Propagation auf geteilte Kanten).

use super::commit::commit_step;
use crate::app::AppState;
use crate::core::geometry::{distance_to_segment, points_equal, snap_to_grid};
use crate::core::shared_edges::split_shared_edge;
use crate::core::{Action, EdgeHit, EditError, Point, RoomId, RoomStore};
use std::sync::Arc;

/// Einfügepunkt für einen Kanten-Treffer: die Projektion auf die Kante,
/// auf das Raster gesnappt, sofern der gesnappte Punkt im Inneren der Kante
/// bleibt. Ein Rasterpunkt auf einem Kanten-Endpunkt wird verworfen.
pub fn split_point_on_edge(
    rooms: &RoomStore,
    hit: &EdgeHit,
    grid_step: f32,
    grid_snap: bool,
) -> Point {
    if !grid_snap {
        return hit.closest;
    }
    let snapped = snap_to_grid(hit.closest, grid_step);
    let tol = rooms.tolerance();
    let inside_edge = rooms
        .room(hit.room_id)
        .and_then(|room| room.edge(hit.edge_index))
        .is_some_and(|seg| {
            distance_to_segment(snapped, &seg) <= tol
                && !points_equal(snapped, seg.start, tol)
                && !points_equal(snapped, seg.end, tol)
        });
    if inside_edge {
        snapped
    } else {
        hit.closest
    }
}

/// Fügt `world_pos` in die Kante `edge_index` von `room_id` und in alle
/// deckungsgleichen Kanten anderer Räume ein.
pub fn split_edge(
    state: &mut AppState,
    room_id: RoomId,
    edge_index: usize,
    world_pos: Point,
) -> Result<Action, EditError> {
    let shared_before = state.rooms.shared_pairs();
    let action = split_shared_edge(
        Arc::make_mut(&mut state.rooms),
        room_id,
        edge_index,
        world_pos,
    )?;

    log::info!(
        "Punkt in Kante {} von Raum {} eingefügt ({})",
        edge_index,
        room_id,
        action.kind_name()
    );
    commit_step(state, vec![action.clone()], &shared_before);
    Ok(action)
}
