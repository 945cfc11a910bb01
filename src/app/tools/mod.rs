//! Interaktions-Zustände der Zeichen- und Bearbeitungswerkzeuge.
//!
//! Die Zustände halten nur Entwurfsdaten (Punkte, Cursor, gegriffene Ecke).
//! Entscheidungen trifft das Intent-Mapping, Mutationen laufen über die
//! Use-Cases in `use_cases::editing`.

/// Ecken-Drag mit Rücksetz-Position und Ecken-Gruppe.
mod drag;
/// Polygon-Entwurf mit Schließ- und Doppelklick-Erkennung.
mod polygon;
/// Rechteck-Entwurf aus zwei gegenüberliegenden Ecken.
mod rectangle;

pub use drag::VertexDrag;
pub use polygon::PolygonDraft;
pub use rectangle::RectangleDraft;

use crate::core::geometry::snap_to_grid;
use crate::core::{EdgeHit, Point, RoomStore, VertexRef};
use crate::shared::{EditorOptions, InteractionPreview};

// ── Gemeinsame Utilities ─────────────────────────────────────

/// Anker-Punkt: entweder eine existierende Ecke oder eine freie Position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawAnchor {
    /// Snap auf existierende Ecke
    ExistingVertex(VertexRef, Point),
    /// Freie Position (ggf. auf das Raster gesnappt)
    NewPosition(Point),
}

impl DrawAnchor {
    /// Gibt die Welt-Position des Ankers zurück.
    pub fn position(&self) -> Point {
        match self {
            DrawAnchor::ExistingVertex(_, pos) => *pos,
            DrawAnchor::NewPosition(pos) => *pos,
        }
    }
}

/// Rastet einen Zeichenpunkt ein: zuerst auf eine Ecke im Hit-Radius,
/// sonst (falls aktiv) auf das Raster.
pub fn snap_draw_point(
    pos: Point,
    rooms: &RoomStore,
    options: &EditorOptions,
    grid_snap: bool,
) -> DrawAnchor {
    if let Some(hit) = rooms.pick_vertex(pos, options.vertex_hit_radius) {
        if let Some(vertex_pos) = rooms
            .room(hit.vertex.room_id)
            .and_then(|room| room.vertex(hit.vertex.index))
        {
            return DrawAnchor::ExistingVertex(hit.vertex, vertex_pos);
        }
    }
    DrawAnchor::NewPosition(snap_free_point(pos, options, grid_snap))
}

/// Rastet eine freie Position auf das Raster, falls Grid-Snapping aktiv ist.
pub fn snap_free_point(pos: Point, options: &EditorOptions, grid_snap: bool) -> Point {
    if grid_snap {
        snap_to_grid(pos, options.grid_step)
    } else {
        crate::core::point(pos.x, pos.z)
    }
}

// ── Typen ────────────────────────────────────────────────────────

/// Zustand der Interaktions-State-Machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionState {
    /// Keine laufende Interaktion
    #[default]
    Idle,
    /// Polygon wird Punkt für Punkt gezeichnet
    DrawingPolygon(PolygonDraft),
    /// Rechteck wird aufgezogen
    DrawingRectangle(RectangleDraft),
    /// Eine Ecke wird gezogen
    DraggingVertex(VertexDrag),
}

impl InteractionState {
    /// Gibt zurück, ob keine Interaktion läuft.
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    /// Gibt zurück, ob gerade ein Raum gezeichnet wird.
    pub fn is_drawing(&self) -> bool {
        matches!(
            self,
            InteractionState::DrawingPolygon(_) | InteractionState::DrawingRectangle(_)
        )
    }

    /// Kurzname für Logging.
    pub fn name(&self) -> &'static str {
        match self {
            InteractionState::Idle => "Idle",
            InteractionState::DrawingPolygon(_) => "DrawingPolygon",
            InteractionState::DrawingRectangle(_) => "DrawingRectangle",
            InteractionState::DraggingVertex(_) => "DraggingVertex",
        }
    }

    /// Vorschau-Geometrie des laufenden Zeichenvorgangs.
    pub fn preview(&self, hover: &HoverState, options: &EditorOptions) -> InteractionPreview {
        let mut preview = InteractionPreview {
            hover_vertex: hover.vertex,
            hover_edge: hover.edge.map(|hit| (hit.room_id, hit.edge_index)),
            ..InteractionPreview::default()
        };
        match self {
            InteractionState::Idle => {}
            InteractionState::DrawingPolygon(draft) => {
                preview.draft_points = draft.points().to_vec();
                preview.cursor = draft.cursor();
                preview.closing_hint = draft.closing_hint(options.closing_tolerance());
            }
            InteractionState::DrawingRectangle(draft) => {
                preview.rectangle = Some(draft.corners());
                preview.cursor = Some(draft.cursor());
            }
            InteractionState::DraggingVertex(drag) => {
                preview.dragged_vertices = drag.group().to_vec();
                preview.cursor = Some(drag.current());
            }
        }
        preview
    }
}

/// Hover-Hervorhebung unter dem Cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoverState {
    /// Ecke im Hit-Radius
    pub vertex: Option<VertexRef>,
    /// Kante im Pick-Radius (nur wenn keine Ecke getroffen wurde)
    pub edge: Option<EdgeHit>,
}

impl HoverState {
    /// Bestimmt Ecke bzw. Kante unter `pos`.
    pub fn at(pos: Point, rooms: &RoomStore, options: &EditorOptions) -> Self {
        if let Some(hit) = rooms.pick_vertex(pos, options.vertex_hit_radius) {
            return Self {
                vertex: Some(hit.vertex),
                edge: None,
            };
        }
        Self {
            vertex: None,
            edge: crate::core::shared_edges::pick_edge(rooms, pos, options.edge_pick_radius),
        }
    }
}
