//! Use-Case: Ecken-Drag (Greifen, Verschieben, Loslassen, Abbrechen).
//!
//! Eine ganze Geste wird als genau ein Schritt aufgezeichnet.

use super::commit::commit_step;
use crate::app::tools::{InteractionState, VertexDrag};
use crate::app::AppState;
use crate::core::shared_edges::shared_vertex_group;
use crate::core::{Action, EditError, Point, VertexRef};
use std::sync::Arc;

/// Greift eine Ecke und wechselt in `DraggingVertex`.
///
/// Mit `drag_moves_shared_vertices` werden alle deckungsgleichen Ecken
/// anderer Räume mitbewegt.
pub fn begin_vertex_drag(
    state: &mut AppState,
    vertex: VertexRef,
    time_ms: u64,
) -> Result<(), EditError> {
    let start = state
        .rooms
        .get_room(vertex.room_id)?
        .vertex(vertex.index)
        .ok_or(EditError::NotFound {
            room_id: vertex.room_id,
            index: vertex.index,
        })?;
    let group = if state.options.drag_moves_shared_vertices {
        shared_vertex_group(&state.rooms, vertex.room_id, vertex.index)?
    } else {
        vec![vertex]
    };

    log::debug!(
        "Drag-Start: Ecke {} von Raum {} ({} Ecken in Gruppe)",
        vertex.index,
        vertex.room_id,
        group.len()
    );
    state.editor.interaction = InteractionState::DraggingVertex(VertexDrag::new(
        vertex,
        group,
        start,
        time_ms,
        state.rooms.shared_pairs(),
    ));
    Ok(())
}

/// Verschiebt die gegriffene Ecken-Gruppe auf `world_pos`.
///
/// Ungültige Zwischenpositionen (Ecke fällt auf einen Nachbarn) werden
/// übersprungen; die Gruppe bleibt an der letzten gültigen Position.
pub fn update_vertex_drag(state: &mut AppState, world_pos: Point) {
    let InteractionState::DraggingVertex(drag) = &mut state.editor.interaction else {
        return;
    };
    if world_pos != drag.current() {
        if let Err(e) = Arc::make_mut(&mut state.rooms).move_vertices(drag.group(), world_pos) {
            log::debug!("Drag-Position verworfen: {}", e);
            return;
        }
    }
    drag.set_current(world_pos);
}

/// Beendet den Drag und zeichnet die Verschiebung als einen Schritt auf.
///
/// Gibt den beendeten Drag zurück (`None`, wenn kein Drag lief).
pub fn end_vertex_drag(state: &mut AppState) -> Option<VertexDrag> {
    let InteractionState::DraggingVertex(drag) = std::mem::take(&mut state.editor.interaction)
    else {
        return None;
    };
    if let Some(action) = drag.to_action() {
        if let Action::MovePoint { from, to, .. } | Action::MoveSharedVertex { from, to, .. } =
            &action
        {
            log::info!("Ecke verschoben: {} -> {}", from, to);
        }
        commit_step(state, vec![action], drag.shared_before());
    }
    Some(drag)
}

/// Bricht einen laufenden Drag ab und stellt die Ausgangsposition ohne
/// Aufzeichnung wieder her.
pub fn cancel_vertex_drag(state: &mut AppState, drag: &VertexDrag) {
    if !drag.has_moved() || drag.current() == drag.start() {
        return;
    }
    match Arc::make_mut(&mut state.rooms).move_vertices(drag.group(), drag.start()) {
        Ok(()) => log::debug!("Drag abgebrochen, Ecke zurückgesetzt"),
        Err(e) => log::warn!("Drag-Abbruch konnte Ecke nicht zurücksetzen: {}", e),
    }
}
