//! Handler für Topologie-Editing und Editor-Werkzeug.

use crate::app::state::EditorTool;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{EditError, Point, RoomId};

/// Aktiviert ein Editor-Werkzeug und bricht die laufende Interaktion ab.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    super::interaction::cancel(state);
    state.editor.active_tool = tool;
    log::info!("Editor-Werkzeug: {:?}", tool);
}

/// Fügt einen Punkt in eine Kante (und alle deckungsgleichen Kanten) ein.
pub fn split_edge(
    state: &mut AppState,
    room_id: RoomId,
    edge_index: usize,
    world_pos: Point,
) -> Result<(), EditError> {
    use_cases::editing::split_edge(state, room_id, edge_index, world_pos).map(|_| ())
}

/// Löscht eine Ecke.
pub fn delete_point(state: &mut AppState, room_id: RoomId, index: usize) -> Result<(), EditError> {
    use_cases::editing::delete_point(state, room_id, index)?;
    state.editor.hover = Default::default();
    Ok(())
}
