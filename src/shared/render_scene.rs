//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Host-Renderer (2D-Grundriss
//! oder 3D-Extrusion) sie konsumiert.

use super::options::EditorOptions;
use crate::core::{Point, RoomId, RoomStore, VertexRef, Wall};
use std::sync::Arc;

/// Darstellungsdaten eines Raums.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomView {
    /// Raum-ID
    pub id: RoomId,
    /// Geschlossener Ring (erster == letzter Punkt)
    pub points: Vec<Point>,
    /// Indizes der Kanten, die mit einem anderen Raum geteilt sind
    pub shared_edge_indices: Vec<usize>,
    /// Beschriftung inkl. Fläche, z.B. "Room 1 (12.00 m²)"
    pub label: String,
    /// Ankerpunkt der Beschriftung
    pub label_position: Point,
    /// Fläche in m²
    pub area: f32,
    /// Wandhöhe für die 3D-Extrusion
    pub height: f32,
    /// Füllfarbe (RGBA)
    pub color: [f32; 4],
}

/// Vorschau-Geometrie der laufenden Interaktion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionPreview {
    /// Bereits gesetzte Punkte des Polygon-Entwurfs
    pub draft_points: Vec<Point>,
    /// Aktuelle (gesnappte) Cursor-Position
    pub cursor: Option<Point>,
    /// Cursor liegt auf dem Startpunkt, ein Klick schließt den Raum
    pub closing_hint: bool,
    /// Ecken des Rechteck-Entwurfs
    pub rectangle: Option<[Point; 4]>,
    /// Ecke unter dem Cursor
    pub hover_vertex: Option<VertexRef>,
    /// Kante unter dem Cursor (Raum, Kanten-Index)
    pub hover_edge: Option<(RoomId, usize)>,
    /// Aktuell gezogene Ecken
    pub dragged_vertices: Vec<VertexRef>,
}

impl InteractionPreview {
    /// Gibt zurück, ob keine Vorschau gezeichnet werden muss.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Der aktuelle Raum-Bestand (Arc-Klon, O(1))
    pub rooms: Arc<RoomStore>,
    /// Darstellungsdaten aller Räume in Erstellungsreihenfolge
    pub room_views: Vec<RoomView>,
    /// Eindeutige Wandliste (geteilte Kanten nur einmal)
    pub walls: Vec<Wall>,
    /// Vorschau der laufenden Interaktion
    pub preview: InteractionPreview,
    /// 3D-Ansicht aktiv
    pub is_3d_mode: bool,
    /// Grid-Snapping aktiv (Raster einblenden)
    pub grid_snap_enabled: bool,
    /// Laufzeit-Optionen für Raster und Radien
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob Räume für das Rendering vorhanden sind.
    pub fn has_rooms(&self) -> bool {
        !self.room_views.is_empty()
    }
}
