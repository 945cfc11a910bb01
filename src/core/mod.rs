//! Core-Domänentypen: Geometrie, Räume, Raum-Bestand, geteilte Kanten, Aktionen.

pub mod action;
pub mod error;
/// Geometrie-Kernel (Punkte, Segmente, Toleranz, Fläche, Raster)
pub mod geometry;
pub mod room;
pub mod room_store;
pub mod shared_edges;
pub mod spatial;
pub mod walls;

pub use action::Action;
pub use error::EditError;
pub use geometry::{point, Point, Segment, EDGE_TOLERANCE};
pub use room::{room_label, Room, RoomId, RoomKind, RoomMeta, SharedEdge};
pub use room_store::RoomStore;
pub use shared_edges::{EdgeHit, SharedEdgePair};
pub use spatial::{SpatialIndex, VertexMatch, VertexRef};
pub use walls::{build_walls, Wall};
