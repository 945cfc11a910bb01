//! Ein Raum als geschlossener Polygon-Ring auf der Bodenebene.

use super::geometry::{points_equal, polygon_area, polygon_center, Point, Segment};
use super::EditError;
use std::fmt;

/// Stabile, nie wiederverwendete Raum-ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub u64);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Art der Erstellung (rein informativ, ändert keine Invariante).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomKind {
    /// Über zwei Ecken aufgezogenes Rechteck
    Rectangle,
    /// Frei gezeichnetes Polygon
    #[default]
    Polygon,
}

/// Anzeige-Metadaten ohne topologische Wirkung.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomMeta {
    /// Anzeigename
    pub label: String,
    /// Wandhöhe in Metern
    pub height: f32,
    /// Füllfarbe (RGBA)
    pub color: [f32; 4],
}

/// Eine Kante dieses Raums, die mit einer Kante eines anderen Raums zusammenfällt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SharedEdge {
    /// Kanten-Index in diesem Raum
    pub edge_index: usize,
    /// Der andere Raum
    pub other_room: RoomId,
    /// Kanten-Index im anderen Raum
    pub other_edge_index: usize,
}

/// Geschlossener Raum: `points[last] == points[0]`, mindestens 3 verschiedene Ecken.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    id: RoomId,
    kind: RoomKind,
    points: Vec<Point>,
    meta: RoomMeta,
    shared_edges: Vec<SharedEdge>,
}

impl Room {
    /// Baut einen Raum aus einem bereits geschlossenen, validierten Ring.
    pub(crate) fn from_closed_ring(
        id: RoomId,
        kind: RoomKind,
        points: Vec<Point>,
        meta: RoomMeta,
    ) -> Self {
        Self {
            id,
            kind,
            points,
            meta,
            shared_edges: Vec::new(),
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    pub fn meta(&self) -> &RoomMeta {
        &self.meta
    }

    /// Geschlossener Ring inklusive Schlusspunkt.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Anzahl verschiedener Ecken (ohne Schlusspunkt).
    pub fn vertex_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Position der Ecke `index` (0..vertex_count).
    pub fn vertex(&self, index: usize) -> Option<Point> {
        (index < self.vertex_count()).then(|| self.points[index])
    }

    /// Kanten, immer frisch aus `points` abgeleitet.
    pub fn edges(&self) -> Vec<Segment> {
        self.points
            .windows(2)
            .map(|w| Segment::new(w[0], w[1]))
            .collect()
    }

    /// Einzelne Kante `index` (von `points[index]` nach `points[index + 1]`).
    pub fn edge(&self, index: usize) -> Option<Segment> {
        let end = *self.points.get(index + 1)?;
        Some(Segment::new(self.points[index], end))
    }

    /// Geteilte Kanten (abgeleitet vom Shared-Edge-Resolver).
    pub fn shared_edges(&self) -> &[SharedEdge] {
        &self.shared_edges
    }

    /// Gibt zurück, ob Kante `index` mit einem anderen Raum geteilt ist.
    pub fn is_edge_shared(&self, index: usize) -> bool {
        self.shared_edges.iter().any(|s| s.edge_index == index)
    }

    /// Fläche in m².
    pub fn area(&self) -> f32 {
        polygon_area(&self.points)
    }

    /// Label-Text: `"{label} ({area} m²)"`.
    pub fn display_label(&self) -> String {
        room_label(self)
    }

    /// Label-Position (Zentrum der Bounding-Box).
    pub fn label_position(&self) -> Point {
        polygon_center(self.ring_vertices()).unwrap_or_default()
    }

    fn ring_vertices(&self) -> &[Point] {
        &self.points[..self.vertex_count()]
    }

    pub(crate) fn set_shared_edges(&mut self, shared: Vec<SharedEdge>) {
        self.shared_edges = shared;
    }

    /// Nachbar-Ecken von `index` im Ring (vorherige, nächste).
    fn neighbours(&self, index: usize) -> (Point, Point) {
        let n = self.vertex_count();
        (self.points[(index + n - 1) % n], self.points[(index + 1) % n])
    }

    /// Verschiebt Ecke `index`, hält den Schlusspunkt synchron. Liefert die alte Position.
    pub(crate) fn set_vertex(&mut self, index: usize, p: Point, tol: f32) -> Result<Point, EditError> {
        if index >= self.vertex_count() {
            return Err(EditError::NotFound {
                room_id: self.id,
                index,
            });
        }
        let (prev, next) = self.neighbours(index);
        if points_equal(p, prev, tol) || points_equal(p, next, tol) {
            return Err(EditError::invalid(format!(
                "Ecke {index} in Raum {} würde mit einer Nachbar-Ecke zusammenfallen",
                self.id
            )));
        }
        let old = self.points[index];
        self.points[index] = p;
        if index == 0 {
            let last = self.points.len() - 1;
            self.points[last] = p;
        }
        Ok(old)
    }

    /// Fügt eine Ecke an Position `index` (0..=vertex_count) ein.
    pub(crate) fn insert_vertex(&mut self, index: usize, p: Point, tol: f32) -> Result<(), EditError> {
        let n = self.vertex_count();
        if index > n {
            return Err(EditError::NotFound {
                room_id: self.id,
                index,
            });
        }
        let before = self.points[(index + n - 1) % n];
        let after = self.points[index % n];
        if points_equal(p, before, tol) || points_equal(p, after, tol) {
            return Err(EditError::invalid(format!(
                "Neuer Punkt fällt in Raum {} mit einer Nachbar-Ecke zusammen",
                self.id
            )));
        }
        self.points.insert(index, p);
        if index == 0 {
            let last = self.points.len() - 1;
            self.points[last] = p;
        }
        Ok(())
    }

    /// Entfernt Ecke `index`. Mindestens 3 verschiedene Ecken bleiben erhalten.
    pub(crate) fn remove_vertex(&mut self, index: usize, tol: f32) -> Result<Point, EditError> {
        let n = self.vertex_count();
        if index >= n {
            return Err(EditError::NotFound {
                room_id: self.id,
                index,
            });
        }
        if n <= 3 {
            return Err(EditError::invalid(format!(
                "Raum {} braucht mindestens 3 Ecken",
                self.id
            )));
        }
        let (prev, next) = self.neighbours(index);
        if points_equal(prev, next, tol) {
            return Err(EditError::invalid(format!(
                "Entfernen von Ecke {index} würde in Raum {} doppelte Ecken erzeugen",
                self.id
            )));
        }
        let removed = self.points.remove(index);
        if index == 0 {
            let last = self.points.len() - 1;
            self.points[last] = self.points[0];
        }
        Ok(removed)
    }
}

/// Abgeleitetes Label: Name plus Fläche mit 2 Nachkommastellen.
pub fn room_label(room: &Room) -> String {
    format!("{} ({:.2} m²)", room.meta.label, room.area())
}
