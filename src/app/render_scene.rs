//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::{build_walls, room_label, Room};
use crate::shared::{RenderScene, RoomView};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let room_views = state.rooms.rooms().map(room_view).collect();

    RenderScene {
        rooms: state.rooms.clone(),
        room_views,
        walls: build_walls(&state.rooms),
        preview: state
            .editor
            .interaction
            .preview(&state.editor.hover, &state.options),
        is_3d_mode: state.view.is_3d_mode,
        grid_snap_enabled: state.view.grid_snap_enabled,
        options: state.options.clone(),
    }
}

fn room_view(room: &Room) -> RoomView {
    let mut shared_edge_indices: Vec<usize> =
        room.shared_edges().iter().map(|s| s.edge_index).collect();
    shared_edge_indices.dedup();

    RoomView {
        id: room.id(),
        points: room.points().to_vec(),
        shared_edge_indices,
        label: room_label(room),
        label_position: room.label_position(),
        area: room.area(),
        height: room.meta().height,
        color: room.meta().color,
    }
}
