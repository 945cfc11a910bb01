//! Use-Case: Raum aus einem Polygon- oder Rechteck-Entwurf anlegen.

use super::commit::commit_step;
use crate::app::AppState;
use crate::core::{Action, EditError, Point, RoomId, RoomKind};
use std::sync::Arc;

/// Legt einen Polygon-Raum aus den Entwurfspunkten an.
///
/// Der Ring wird geschlossen, geteilte Kanten zu bestehenden Räumen werden
/// abgeleitet und zusammen mit `CreateRoom` als ein Schritt aufgezeichnet.
pub fn create_polygon_room(state: &mut AppState, points: &[Point]) -> Result<RoomId, EditError> {
    let shared_before = state.rooms.shared_pairs();
    let meta = state.options.room_meta(state.rooms.default_label());

    let rooms = Arc::make_mut(&mut state.rooms);
    let id = rooms.create_room(points, RoomKind::Polygon, meta)?;
    let room = rooms.get_room(id)?.clone();

    log::info!(
        "Raum {} angelegt: {} Ecken, {:.2} m²",
        id,
        room.vertex_count(),
        room.area()
    );
    commit_step(state, vec![Action::CreateRoom { room }], &shared_before);
    Ok(id)
}

/// Legt einen achsenparallelen Rechteck-Raum aus zwei gegenüberliegenden Ecken an.
pub fn create_rectangle_room(
    state: &mut AppState,
    corner_a: Point,
    corner_c: Point,
) -> Result<RoomId, EditError> {
    let shared_before = state.rooms.shared_pairs();
    let meta = state.options.room_meta(state.rooms.default_label());

    let rooms = Arc::make_mut(&mut state.rooms);
    let id = rooms.create_rectangle(corner_a, corner_c, meta)?;
    let room = rooms.get_room(id)?.clone();

    log::info!("Rechteck-Raum {} angelegt: {:.2} m²", id, room.area());
    commit_step(state, vec![Action::CreateRoom { room }], &shared_before);
    Ok(id)
}
