//! Shared-Edge-Resolver: erkennt deckungsgleiche Kanten verschiedener Räume
//! und propagiert Punkt-Einfügungen und Ecken-Verschiebungen auf alle
//! beteiligten Räume.

use super::geometry::{closest_point_on_segment, distance_to_segment, segments_equal, Point};
use super::spatial::VertexRef;
use super::{Action, EditError, Room, RoomId, RoomStore, SharedEdge};
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Normalisiertes, symmetrisches Kantenpaar: `a` hat stets die kleinere Raum-ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SharedEdgePair {
    /// (Raum, Kante) mit der kleineren Raum-ID
    pub a: (RoomId, usize),
    /// (Raum, Kante) mit der größeren Raum-ID
    pub b: (RoomId, usize),
}

/// Treffer eines Kanten-Hit-Tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeHit {
    /// Raum der Kante
    pub room_id: RoomId,
    /// Kanten-Index im Raum
    pub edge_index: usize,
    /// Abstand des Suchpunkts zur Kante
    pub distance: f32,
    /// Nächster Punkt auf der Kante
    pub closest: Point,
}

/// Leitet `shared_edges` aller Räume vollständig neu ab.
///
/// Jede gefundene Übereinstimmung wird in beiden Räumen eingetragen (Symmetrie).
pub fn recompute_shared_edges(rooms: &mut IndexMap<RoomId, Room>, tol: f32) {
    let edges: Vec<(RoomId, Vec<_>)> = rooms.values().map(|r| (r.id(), r.edges())).collect();
    let mut shared: IndexMap<RoomId, Vec<SharedEdge>> =
        edges.iter().map(|(id, _)| (*id, Vec::new())).collect();

    for (i, (id_a, edges_a)) in edges.iter().enumerate() {
        for (id_b, edges_b) in edges.iter().skip(i + 1) {
            for (ea, seg_a) in edges_a.iter().enumerate() {
                for (eb, seg_b) in edges_b.iter().enumerate() {
                    if !segments_equal(seg_a, seg_b, tol) {
                        continue;
                    }
                    if let Some(list) = shared.get_mut(id_a) {
                        list.push(SharedEdge {
                            edge_index: ea,
                            other_room: *id_b,
                            other_edge_index: eb,
                        });
                    }
                    if let Some(list) = shared.get_mut(id_b) {
                        list.push(SharedEdge {
                            edge_index: eb,
                            other_room: *id_a,
                            other_edge_index: ea,
                        });
                    }
                }
            }
        }
    }

    for (id, mut list) in shared {
        list.sort_unstable();
        if let Some(room) = rooms.get_mut(&id) {
            room.set_shared_edges(list);
        }
    }
}

/// Sammelt alle geteilten Kanten als normalisierte Paare.
pub fn shared_pairs<'a>(rooms: impl Iterator<Item = &'a Room>) -> BTreeSet<SharedEdgePair> {
    rooms
        .flat_map(|room| {
            room.shared_edges()
                .iter()
                .filter(move |s| room.id() < s.other_room)
                .map(move |s| SharedEdgePair {
                    a: (room.id(), s.edge_index),
                    b: (s.other_room, s.other_edge_index),
                })
        })
        .collect()
}

/// Nächste Kante innerhalb von `radius` um `p`.
///
/// Gleichstand wird über niedrigste Raum-ID, dann niedrigsten Kanten-Index aufgelöst.
pub fn pick_edge(store: &RoomStore, p: Point, radius: f32) -> Option<EdgeHit> {
    store
        .rooms()
        .flat_map(|room| {
            room.edges()
                .into_iter()
                .enumerate()
                .map(move |(edge_index, seg)| EdgeHit {
                    room_id: room.id(),
                    edge_index,
                    distance: distance_to_segment(p, &seg),
                    closest: closest_point_on_segment(p, &seg),
                })
        })
        .filter(|hit| hit.distance <= radius)
        .min_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.room_id.cmp(&b.room_id))
                .then_with(|| a.edge_index.cmp(&b.edge_index))
        })
}

/// Alle (Raum, Kante), die mit der gegebenen Kante zusammenfallen – inklusive ihr selbst.
pub fn rooms_sharing_edge(
    store: &RoomStore,
    room_id: RoomId,
    edge_index: usize,
) -> Result<Vec<(RoomId, usize)>, EditError> {
    let room = store.get_room(room_id)?;
    if room.edge(edge_index).is_none() {
        return Err(EditError::NotFound {
            room_id,
            index: edge_index,
        });
    }
    let mut result = vec![(room_id, edge_index)];
    result.extend(
        room.shared_edges()
            .iter()
            .filter(|s| s.edge_index == edge_index)
            .map(|s| (s.other_room, s.other_edge_index)),
    );
    Ok(result)
}

/// Fügt `new_point` in die Kante und in jede deckungsgleiche Kante anderer Räume ein.
///
/// Einfügeposition ist jeweils direkt hinter dem Startpunkt der Kante im
/// eigenen Umlaufsinn. Entweder alle Räume werden geändert oder keiner.
/// Liefert `MergeLines`, wenn die Kante nur einem Raum gehört.
pub fn split_shared_edge(
    store: &mut RoomStore,
    room_id: RoomId,
    edge_index: usize,
    new_point: Point,
) -> Result<Action, EditError> {
    let targets = rooms_sharing_edge(store, room_id, edge_index)?;
    let vertices: Vec<VertexRef> = targets
        .iter()
        .map(|&(room_id, edge)| VertexRef {
            room_id,
            index: edge + 1,
        })
        .collect();

    store.insert_vertices(&vertices, new_point)?;

    let point = store
        .room(room_id)
        .and_then(|r| r.vertex(edge_index + 1))
        .unwrap_or(new_point);

    if vertices.len() == 1 {
        Ok(Action::MergeLines {
            room_id,
            edge_index,
            point,
        })
    } else {
        log::debug!(
            "Geteilte Kante {room_id}/{edge_index} in {} Räumen geteilt",
            vertices.len()
        );
        Ok(Action::SplitSharedEdge { point, vertices })
    }
}

/// Alle Ecken (über Räume hinweg), die auf derselben Position wie die gegebene Ecke liegen.
///
/// Die Ausgangsecke ist immer enthalten.
pub fn shared_vertex_group(
    store: &RoomStore,
    room_id: RoomId,
    index: usize,
) -> Result<Vec<VertexRef>, EditError> {
    let room = store.get_room(room_id)?;
    let pos = room
        .vertex(index)
        .ok_or(EditError::NotFound { room_id, index })?;
    let origin = VertexRef { room_id, index };
    let mut group = store.coincident_vertices(pos);
    if !group.contains(&origin) {
        group.push(origin);
    }
    group.sort_unstable();
    Ok(group)
}

/// Verschiebt eine Ecke samt aller deckungsgleichen Ecken anderer Räume.
pub fn move_shared_vertex(
    store: &mut RoomStore,
    room_id: RoomId,
    index: usize,
    to: Point,
) -> Result<Action, EditError> {
    let vertices = shared_vertex_group(store, room_id, index)?;
    let from = store
        .get_room(room_id)?
        .vertex(index)
        .ok_or(EditError::NotFound { room_id, index })?;
    store.move_vertices(&vertices, to)?;
    Ok(Action::move_group(vertices, from, to))
}
