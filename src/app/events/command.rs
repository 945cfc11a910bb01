use super::super::state::EditorTool;
use crate::core::{Point, RoomId, VertexRef};
use crate::shared::EditorOptions;

/// Mutierende Commands, die zentral vom Controller ausgeführt werden.
///
/// Das Intent-Mapping trifft alle Hit-Test-Entscheidungen; Commands
/// tragen bereits gesnappte Positionen und aufgelöste Ziele.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Polygon-Werkzeug ===
    /// Polygon-Zeichnen mit dem ersten Punkt beginnen
    BeginPolygon { world_pos: Point, time_ms: u64 },
    /// Weiteren Punkt an das laufende Polygon anhängen
    AppendPolygonPoint { world_pos: Point, time_ms: u64 },
    /// Laufendes Polygon schließen und als Raum anlegen
    FinalizePolygon,

    // === Rechteck-Werkzeug ===
    /// Erste Rechteck-Ecke setzen
    BeginRectangle { world_pos: Point },
    /// Gegenüberliegende Ecke setzen und Raum anlegen
    FinalizeRectangle { world_pos: Point },

    /// Vorschau-Cursor des laufenden Zeichenvorgangs aktualisieren
    UpdateDrawCursor { world_pos: Point },

    // === Ecken-Drag ===
    /// Ecke greifen
    BeginVertexDrag { vertex: VertexRef, time_ms: u64 },
    /// Gegriffene Ecke (und ggf. deckungsgleiche Ecken) verschieben
    UpdateVertexDrag { world_pos: Point },
    /// Drag abschließen und als ein Schritt aufzeichnen
    EndVertexDrag,

    // === Topologie ===
    /// Punkt in eine Kante (und alle deckungsgleichen Kanten) einfügen
    SplitEdge {
        room_id: RoomId,
        edge_index: usize,
        world_pos: Point,
    },
    /// Ecke löschen
    DeletePoint { room_id: RoomId, index: usize },

    // === Hover ===
    /// Hover-Hervorhebung (Ecke/Kante) aktualisieren
    UpdateHover { world_pos: Point },

    // === Steuerung ===
    /// Laufende Interaktion abbrechen (Drag wird zurückgesetzt)
    CancelInteraction,
    /// Eingabe im aktuellen Modus abgelehnt
    RejectInput { reason: String },
    /// Editor-Werkzeug wechseln
    SetEditorTool { tool: EditorTool },
    /// Grid-Snapping setzen
    SetGridSnap { enabled: bool },
    /// 2D/3D-Ansicht setzen
    SetViewMode { is_3d: bool },
    /// Optionen anwenden
    ApplyOptions { options: Box<EditorOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,

    // === History ===
    /// Letzten Schritt rückgängig machen
    Undo,
    /// Zurückgenommenen Schritt wiederherstellen
    Redo,
}
