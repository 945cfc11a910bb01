//! Aufgezeichnete Topologie-Mutationen für Undo/Redo.
//!
//! Jede Variante trägt genug Daten für ein Replay in Vorwärtsrichtung und
//! definiert ihre Inverse explizit.

use super::geometry::Point;
use super::spatial::VertexRef;
use super::{EditError, Room, RoomId, RoomStore};

/// Eine vom Raum-Bestand bereits akzeptierte Mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Raum wurde erstellt (vollständiger Zustand inkl. ID)
    CreateRoom { room: Room },
    /// Raum wurde entfernt (nur als Inverse von `CreateRoom`)
    RemoveRoom { room: Room },
    /// Ecke wurde an `index` eingefügt
    AddPoint {
        room_id: RoomId,
        index: usize,
        point: Point,
    },
    /// Ecke wurde verschoben
    MovePoint {
        room_id: RoomId,
        index: usize,
        from: Point,
        to: Point,
    },
    /// Deckungsgleiche Ecken mehrerer Räume wurden gemeinsam verschoben
    MoveSharedVertex {
        vertices: Vec<VertexRef>,
        from: Point,
        to: Point,
    },
    /// Ecke wurde entfernt
    DeletePoint {
        room_id: RoomId,
        index: usize,
        point: Point,
    },
    /// Punkt wurde in eine nicht geteilte Kante eines Raums eingefügt
    MergeLines {
        room_id: RoomId,
        edge_index: usize,
        point: Point,
    },
    /// Kantenpaar wurde als geteilt registriert
    ShareEdge {
        room_a: RoomId,
        edge_a: usize,
        room_b: RoomId,
        edge_b: usize,
    },
    /// Punkt wurde in alle Räume einer geteilten Kante eingefügt
    SplitSharedEdge {
        point: Point,
        vertices: Vec<VertexRef>,
    },
    /// Propagierter Punkt wurde aus allen Räumen entfernt (Inverse von `SplitSharedEdge`)
    JoinSharedEdge {
        point: Point,
        vertices: Vec<VertexRef>,
    },
}

impl Action {
    /// Verschiebung einer Ecken-Gruppe: eine einzelne Ecke wird zu `MovePoint`.
    pub fn move_group(vertices: Vec<VertexRef>, from: Point, to: Point) -> Self {
        match vertices.as_slice() {
            [single] => Action::MovePoint {
                room_id: single.room_id,
                index: single.index,
                from,
                to,
            },
            _ => Action::MoveSharedVertex { vertices, from, to },
        }
    }

    /// Die explizite Inverse dieser Aktion.
    pub fn inverse(&self) -> Action {
        match self {
            Action::CreateRoom { room } => Action::RemoveRoom { room: room.clone() },
            Action::RemoveRoom { room } => Action::CreateRoom { room: room.clone() },
            Action::AddPoint {
                room_id,
                index,
                point,
            } => Action::DeletePoint {
                room_id: *room_id,
                index: *index,
                point: *point,
            },
            Action::DeletePoint {
                room_id,
                index,
                point,
            } => Action::AddPoint {
                room_id: *room_id,
                index: *index,
                point: *point,
            },
            Action::MovePoint {
                room_id,
                index,
                from,
                to,
            } => Action::MovePoint {
                room_id: *room_id,
                index: *index,
                from: *to,
                to: *from,
            },
            Action::MoveSharedVertex { vertices, from, to } => Action::MoveSharedVertex {
                vertices: vertices.clone(),
                from: *to,
                to: *from,
            },
            Action::MergeLines {
                room_id,
                edge_index,
                point,
            } => Action::DeletePoint {
                room_id: *room_id,
                index: edge_index + 1,
                point: *point,
            },
            Action::ShareEdge { .. } => self.clone(),
            Action::SplitSharedEdge { point, vertices } => Action::JoinSharedEdge {
                point: *point,
                vertices: vertices.clone(),
            },
            Action::JoinSharedEdge { point, vertices } => Action::SplitSharedEdge {
                point: *point,
                vertices: vertices.clone(),
            },
        }
    }

    /// Spielt die Aktion vorwärts auf dem Raum-Bestand ab.
    pub fn apply(&self, store: &mut RoomStore) -> Result<(), EditError> {
        match self {
            Action::CreateRoom { room } => store.insert_room(room.clone()),
            Action::RemoveRoom { room } => store.remove_room(room.id()).map(|_| ()),
            Action::AddPoint {
                room_id,
                index,
                point,
            } => store.add_point(*room_id, *index, *point),
            Action::DeletePoint { room_id, index, .. } => {
                store.delete_point(*room_id, *index).map(|_| ())
            }
            Action::MovePoint {
                room_id, index, to, ..
            } => store.move_point(*room_id, *index, *to).map(|_| ()),
            Action::MoveSharedVertex { vertices, to, .. } => store.move_vertices(vertices, *to),
            Action::MergeLines {
                room_id,
                edge_index,
                point,
            } => store.add_point(*room_id, edge_index + 1, *point),
            Action::ShareEdge {
                room_a,
                edge_a,
                room_b,
                edge_b,
            } => {
                // Die Relation ist abgeleitet, hier wird nur die Übereinstimmung geprüft.
                let registered = store.room(*room_a).is_some_and(|r| {
                    r.shared_edges().iter().any(|s| {
                        s.edge_index == *edge_a
                            && s.other_room == *room_b
                            && s.other_edge_index == *edge_b
                    })
                });
                if !registered {
                    log::debug!(
                        "ShareEdge {room_a}/{edge_a} <-> {room_b}/{edge_b} im aktuellen Zustand nicht abgeleitet"
                    );
                }
                Ok(())
            }
            Action::SplitSharedEdge { point, vertices } => store.insert_vertices(vertices, *point),
            Action::JoinSharedEdge { vertices, .. } => store.remove_vertices(vertices),
        }
    }

    /// Kurzname für Logging und Command-Log.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Action::CreateRoom { .. } => "CreateRoom",
            Action::RemoveRoom { .. } => "RemoveRoom",
            Action::AddPoint { .. } => "AddPoint",
            Action::MovePoint { .. } => "MovePoint",
            Action::MoveSharedVertex { .. } => "MoveSharedVertex",
            Action::DeletePoint { .. } => "DeletePoint",
            Action::MergeLines { .. } => "MergeLines",
            Action::ShareEdge { .. } => "ShareEdge",
            Action::SplitSharedEdge { .. } => "SplitSharedEdge",
            Action::JoinSharedEdge { .. } => "JoinSharedEdge",
        }
    }
}
