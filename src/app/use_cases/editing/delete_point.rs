//! Use-Case: Ecke eines Raums löschen.

use super::commit::commit_step;
use crate::app::AppState;
use crate::core::{Action, EditError, RoomId};
use std::sync::Arc;

/// Löscht die Ecke `index` aus `room_id`. Räume behalten mindestens 3 Ecken.
pub fn delete_point(state: &mut AppState, room_id: RoomId, index: usize) -> Result<(), EditError> {
    let shared_before = state.rooms.shared_pairs();
    let point = Arc::make_mut(&mut state.rooms).delete_point(room_id, index)?;

    log::info!("Ecke {} aus Raum {} gelöscht", index, room_id);
    commit_step(
        state,
        vec![Action::DeletePoint {
            room_id,
            index,
            point,
        }],
        &shared_before,
    );
    Ok(())
}
