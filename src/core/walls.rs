//! Ableitung der Wandliste: jede Raumkante wird zu einer Wand, geteilte
//! Kanten ergeben genau eine Wand mit beiden Räumen.

use super::geometry::{Point, Segment};
use super::{RoomId, RoomStore};
use std::collections::HashSet;

/// Eine physische Wand (ohne Wandstärke).
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    /// Startpunkt (lexikografisch kleinerer Endpunkt nach x, dann z)
    pub start: Point,
    /// Endpunkt
    pub end: Point,
    /// Räume, die an diese Wand grenzen (1 = Außenwand, 2+ = Trennwand)
    pub rooms: Vec<RoomId>,
    /// Höhe der Wand (Maximum der angrenzenden Räume)
    pub height: f32,
}

impl Wall {
    /// Gibt zurück, ob die Wand zwei Räume trennt.
    pub fn is_shared(&self) -> bool {
        self.rooms.len() > 1
    }

    pub fn segment(&self) -> Segment {
        Segment::new(self.start, self.end)
    }
}

/// Sortiert die Endpunkte nach x, dann z.
fn ordered(seg: Segment) -> (Point, Point) {
    let key = |p: Point| (p.x, p.z);
    if key(seg.start) <= key(seg.end) {
        (seg.start, seg.end)
    } else {
        (seg.end, seg.start)
    }
}

/// Baut die eindeutige Wandliste aus allen Räumen.
pub fn build_walls(store: &RoomStore) -> Vec<Wall> {
    let mut walls = Vec::new();
    let mut visited: HashSet<(RoomId, usize)> = HashSet::new();

    for room in store.rooms() {
        for (edge_index, seg) in room.edges().into_iter().enumerate() {
            if !visited.insert((room.id(), edge_index)) {
                continue;
            }
            let mut rooms = vec![room.id()];
            let mut height = room.meta().height;
            for shared in room
                .shared_edges()
                .iter()
                .filter(|s| s.edge_index == edge_index)
            {
                visited.insert((shared.other_room, shared.other_edge_index));
                rooms.push(shared.other_room);
                if let Some(other) = store.room(shared.other_room) {
                    height = height.max(other.meta().height);
                }
            }
            let (start, end) = ordered(seg);
            walls.push(Wall {
                start,
                end,
                rooms,
                height,
            });
        }
    }

    walls
}
