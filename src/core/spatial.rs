//! Spatial-Index (KD-Tree) über alle Raum-Ecken für schnellen Vertex-Hit-Test.

use glam::Vec2;
use indexmap::IndexMap;
use kiddo::{KdTree, SquaredEuclidean};

use super::geometry::ground;
use super::{Room, RoomId};

/// Verweis auf eine Ecke: Raum plus Ecken-Index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexRef {
    /// Raum der Ecke
    pub room_id: RoomId,
    /// Index in `Room::points` (ohne Schlusspunkt)
    pub index: usize,
}

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexMatch {
    /// Gefundene Ecke
    pub vertex: VertexRef,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Spatial-Index über allen Ecken eines Raum-Bestands.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    vertices: Vec<VertexRef>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            vertices: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Räumen (Schlusspunkte ausgenommen).
    pub fn from_rooms(rooms: &IndexMap<RoomId, Room>) -> Self {
        let mut vertices = Vec::new();
        let mut entries: Vec<[f64; 2]> = Vec::new();

        for room in rooms.values() {
            for index in 0..room.vertex_count() {
                let p = ground(room.points()[index]);
                vertices.push(VertexRef {
                    room_id: room.id(),
                    index,
                });
                entries.push([p.x as f64, p.y as f64]);
            }
        }

        let tree: KdTree<f64, 2> = (&entries).into();
        Self { tree, vertices }
    }

    /// Gibt die Anzahl indexierter Ecken zurück.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Gibt `true` zurück, wenn keine Ecken im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Findet alle Ecken innerhalb eines Radius, sortiert nach Distanz,
    /// bei Gleichstand nach Raum-ID und Ecken-Index.
    pub fn within_radius(&self, query: Vec2, radius: f32) -> Vec<VertexMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(
                &[query.x as f64, query.y as f64],
                (radius * radius) as f64,
            )
            .into_iter()
            .filter_map(|entry| {
                let vertex = *self.vertices.get(entry.item as usize)?;
                Some(VertexMatch {
                    vertex,
                    distance: (entry.distance as f32).sqrt(),
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.vertex.cmp(&b.vertex))
        });
        results
    }

    /// Nächste Ecke innerhalb des Radius (deterministischer Tie-Break).
    pub fn nearest_within(&self, query: Vec2, radius: f32) -> Option<VertexMatch> {
        self.within_radius(query, radius).into_iter().next()
    }
}
