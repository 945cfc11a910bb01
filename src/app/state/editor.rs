use crate::app::tools::{HoverState, InteractionState};

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Standard: Räume als freies Polygon zeichnen
    #[default]
    PolygonWall,
    /// Räume als achsenparalleles Rechteck aufziehen
    RectangularWall,
    /// Punkte in Kanten einfügen, Ecken verschieben
    AddPoint,
    /// Ecken per Klick löschen
    DeletePoint,
}

/// Zustand des aktuellen Editor-Werkzeugs
#[derive(Debug, Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Laufende Interaktion (Zeichnen, Ziehen)
    pub interaction: InteractionState,
    /// Ecke/Kante unter dem Cursor
    pub hover: HoverState,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Polygon-Werkzeug, keine Interaktion).
    pub fn new() -> Self {
        Self::default()
    }
}
