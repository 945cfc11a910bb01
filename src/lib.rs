//! Grundriss-Editor Library: Raum-Topologie, geteilte Wände, Undo/Redo
//! und Interaktions-State-Machine.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use crate::app::{
    ActionLog, AppCommand, AppController, AppIntent, AppState, EditorTool, EditorToolState,
    InteractionState, PointerButton, UiState, ViewState,
};
pub use crate::core::{
    build_walls, point, room_label, Action, EditError, Point, Room, RoomId, RoomKind, RoomMeta,
    RoomStore, Segment, SharedEdge, Wall, EDGE_TOLERANCE,
};
pub use crate::core::{EdgeHit, SharedEdgePair, SpatialIndex, VertexMatch, VertexRef};
pub use crate::shared::{EditorOptions, InteractionPreview, RenderScene, RoomView};
