//! Der zentrale Raum-Bestand: besitzt alle Räume und hält abgeleitete Daten aktuell.

use super::geometry::{point, points_equal, polygon_area, Point, EDGE_TOLERANCE};
use super::shared_edges::{self, SharedEdgePair};
use super::spatial::{SpatialIndex, VertexMatch, VertexRef};
use super::{EditError, Room, RoomId, RoomKind, RoomMeta};
use glam::Vec2;
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Alle Räume einer Editier-Sitzung.
///
/// Mutationen lassen den Bestand entweder vollständig geändert oder unverändert
/// zurück. Nach jeder strukturellen Änderung werden geteilte Kanten und der
/// Spatial-Index neu abgeleitet.
///
/// Der Bestand zeichnet selbst keine Aktionen auf; das übernehmen die
/// Use-Cases in `app::use_cases::editing` über das Action-Log.
#[derive(Debug, Clone)]
pub struct RoomStore {
    rooms: IndexMap<RoomId, Room>,
    next_id: u64,
    tolerance: f32,
    spatial_index: SpatialIndex,
}

impl PartialEq for RoomStore {
    fn eq(&self, other: &Self) -> bool {
        self.rooms == other.rooms
    }
}

impl Default for RoomStore {
    fn default() -> Self {
        Self::new(EDGE_TOLERANCE)
    }
}

impl RoomStore {
    /// Erstellt einen leeren Bestand mit der gegebenen Vergleichs-Toleranz.
    pub fn new(tolerance: f32) -> Self {
        Self {
            rooms: IndexMap::new(),
            next_id: 1,
            tolerance,
            spatial_index: SpatialIndex::empty(),
        }
    }

    /// Toleranz für alle Punkt-/Kantenvergleiche.
    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// Setzt eine neue Vergleichs-Toleranz und leitet geteilte Kanten neu ab.
    pub fn set_tolerance(&mut self, tolerance: f32) {
        self.tolerance = tolerance;
        self.refresh_derived();
    }

    /// Standard-Name für den nächsten Raum.
    pub fn default_label(&self) -> String {
        format!("Room {}", self.rooms.len() + 1)
    }

    /// Erstellt einen Raum aus mindestens 3 Punkten und schließt den Ring.
    pub fn create_room(
        &mut self,
        points: &[Point],
        kind: RoomKind,
        meta: RoomMeta,
    ) -> Result<RoomId, EditError> {
        let ring = self.normalize_ring(points)?;
        let id = RoomId(self.next_id);
        self.next_id += 1;
        self.rooms
            .insert(id, Room::from_closed_ring(id, kind, ring, meta));
        self.refresh_derived();
        Ok(id)
    }

    /// Erstellt einen achsenparallelen Rechteck-Raum aus zwei gegenüberliegenden Ecken.
    pub fn create_rectangle(
        &mut self,
        corner_a: Point,
        corner_c: Point,
        meta: RoomMeta,
    ) -> Result<RoomId, EditError> {
        let corners = rectangle_corners(corner_a, corner_c);
        self.create_room(&corners, RoomKind::Rectangle, meta)
    }

    /// Entfernt aufeinanderfolgende Duplikate, prüft Mindestgröße und schließt den Ring.
    fn normalize_ring(&self, points: &[Point]) -> Result<Vec<Point>, EditError> {
        let mut ring: Vec<Point> = Vec::with_capacity(points.len() + 1);
        for p in points.iter().map(|p| point(p.x, p.z)) {
            if ring
                .last()
                .is_some_and(|last| points_equal(*last, p, self.tolerance))
            {
                continue;
            }
            ring.push(p);
        }
        while ring.len() > 1
            && points_equal(ring[0], ring[ring.len() - 1], self.tolerance)
        {
            ring.pop();
        }
        if ring.len() < 3 {
            return Err(EditError::invalid(format!(
                "Ein Raum braucht mindestens 3 verschiedene Punkte, erhalten: {}",
                ring.len()
            )));
        }
        ring.push(ring[0]);
        if polygon_area(&ring) <= self.tolerance * self.tolerance {
            return Err(EditError::invalid("Raum hat keine Fläche"));
        }
        Ok(ring)
    }

    /// Verschiebt eine Ecke (ohne Propagation auf Nachbarräume). Liefert die alte Position.
    pub fn move_point(
        &mut self,
        room_id: RoomId,
        index: usize,
        new_position: Point,
    ) -> Result<Point, EditError> {
        let tol = self.tolerance;
        let room = self.room_mut(room_id)?;
        let old = room.set_vertex(index, point(new_position.x, new_position.z), tol)?;
        self.refresh_derived();
        Ok(old)
    }

    /// Fügt eine Ecke an Position `index` ein.
    pub fn add_point(&mut self, room_id: RoomId, index: usize, p: Point) -> Result<(), EditError> {
        let tol = self.tolerance;
        self.room_mut(room_id)?
            .insert_vertex(index, point(p.x, p.z), tol)?;
        self.refresh_derived();
        Ok(())
    }

    /// Entfernt eine Ecke. Liefert die entfernte Position.
    pub fn delete_point(&mut self, room_id: RoomId, index: usize) -> Result<Point, EditError> {
        let tol = self.tolerance;
        let removed = self.room_mut(room_id)?.remove_vertex(index, tol)?;
        self.refresh_derived();
        Ok(removed)
    }

    /// Verschiebt mehrere Ecken (auch in verschiedenen Räumen) atomar auf `to`.
    pub fn move_vertices(&mut self, vertices: &[VertexRef], to: Point) -> Result<(), EditError> {
        let to = point(to.x, to.z);
        self.apply_batch(vertices, |room, index, tol| {
            room.set_vertex(index, to, tol).map(|_| ())
        })
    }

    /// Fügt `p` atomar an den angegebenen Positionen ein.
    pub fn insert_vertices(&mut self, vertices: &[VertexRef], p: Point) -> Result<(), EditError> {
        let p = point(p.x, p.z);
        self.apply_batch(vertices, |room, index, tol| room.insert_vertex(index, p, tol))
    }

    /// Entfernt die angegebenen Ecken atomar.
    pub fn remove_vertices(&mut self, vertices: &[VertexRef]) -> Result<(), EditError> {
        self.apply_batch(vertices, |room, index, tol| {
            room.remove_vertex(index, tol).map(|_| ())
        })
    }

    /// Wendet `edit` auf Arbeitskopien aller betroffenen Räume an und übernimmt
    /// sie nur, wenn jede Einzeländerung gelingt.
    fn apply_batch<F>(&mut self, vertices: &[VertexRef], mut edit: F) -> Result<(), EditError>
    where
        F: FnMut(&mut Room, usize, f32) -> Result<(), EditError>,
    {
        let tol = self.tolerance;
        let mut working: IndexMap<RoomId, Room> = IndexMap::new();
        for v in vertices {
            if !working.contains_key(&v.room_id) {
                let room = self.room(v.room_id).ok_or(EditError::RoomNotFound(v.room_id))?;
                working.insert(v.room_id, room.clone());
            }
            if let Some(room) = working.get_mut(&v.room_id) {
                edit(room, v.index, tol)?;
            }
        }
        for (id, room) in working {
            self.rooms.insert(id, room);
        }
        self.refresh_derived();
        Ok(())
    }

    /// Fügt einen vollständigen Raum mit seiner bisherigen ID wieder ein (Replay).
    pub(crate) fn insert_room(&mut self, room: Room) -> Result<(), EditError> {
        let id = room.id();
        if self.rooms.contains_key(&id) {
            return Err(EditError::invalid(format!("Raum {id} existiert bereits")));
        }
        self.next_id = self.next_id.max(id.0 + 1);
        self.rooms.insert(id, room);
        self.refresh_derived();
        Ok(())
    }

    /// Entfernt einen Raum (nur als Inverse von `CreateRoom`).
    pub(crate) fn remove_room(&mut self, room_id: RoomId) -> Result<Room, EditError> {
        let room = self
            .rooms
            .shift_remove(&room_id)
            .ok_or(EditError::RoomNotFound(room_id))?;
        self.refresh_derived();
        Ok(room)
    }

    /// Read-only Zugriff auf einen Raum.
    pub fn room(&self, room_id: RoomId) -> Option<&Room> {
        self.rooms.get(&room_id)
    }

    /// Wie `room`, aber mit `RoomNotFound` als Fehler.
    pub fn get_room(&self, room_id: RoomId) -> Result<&Room, EditError> {
        self.room(room_id).ok_or(EditError::RoomNotFound(room_id))
    }

    fn room_mut(&mut self, room_id: RoomId) -> Result<&mut Room, EditError> {
        self.rooms
            .get_mut(&room_id)
            .ok_or(EditError::RoomNotFound(room_id))
    }

    /// Alle Räume in Erstellungsreihenfolge.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Alle Räume als Liste (für Snapshot-Vergleiche und Rendering).
    pub fn list_rooms(&self) -> Vec<&Room> {
        self.rooms.values().collect()
    }

    /// Gibt die Anzahl der Räume zurück.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Gibt `true` zurück, wenn keine Räume existieren.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Alle Ecken innerhalb von `radius` um `p`, nach Distanz sortiert.
    pub fn vertices_within(&self, p: Point, radius: f32) -> Vec<VertexMatch> {
        self.spatial_index
            .within_radius(Vec2::new(p.x, p.z), radius)
    }

    /// Nächste Ecke innerhalb von `radius` (Tie-Break: niedrigste Raum-ID, dann Index).
    pub fn pick_vertex(&self, p: Point, radius: f32) -> Option<VertexMatch> {
        self.spatial_index.nearest_within(Vec2::new(p.x, p.z), radius)
    }

    /// Alle Ecken, die innerhalb der Toleranz auf `p` liegen.
    pub fn coincident_vertices(&self, p: Point) -> Vec<VertexRef> {
        self.vertices_within(p, self.tolerance)
            .into_iter()
            .map(|m| m.vertex)
            .collect()
    }

    /// Normalisierte Menge aller geteilten Kantenpaare.
    pub fn shared_pairs(&self) -> BTreeSet<SharedEdgePair> {
        shared_edges::shared_pairs(self.rooms.values())
    }

    /// Leitet geteilte Kanten und Spatial-Index aus den aktuellen Punkten neu ab.
    pub(crate) fn refresh_derived(&mut self) {
        shared_edges::recompute_shared_edges(&mut self.rooms, self.tolerance);
        self.spatial_index = SpatialIndex::from_rooms(&self.rooms);
    }
}

/// Ecken eines achsenparallelen Rechtecks: (a.x,a.z) (c.x,a.z) (c.x,c.z) (a.x,c.z).
pub fn rectangle_corners(corner_a: Point, corner_c: Point) -> [Point; 4] {
    [
        point(corner_a.x, corner_a.z),
        point(corner_c.x, corner_a.z),
        point(corner_c.x, corner_c.z),
        point(corner_a.x, corner_c.z),
    ]
}
