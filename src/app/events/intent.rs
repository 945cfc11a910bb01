use super::super::state::EditorTool;
use crate::core::{Point, RoomId};
use crate::shared::EditorOptions;

/// Maustaste eines Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerButton {
    /// Linke Maustaste (zeichnen, ziehen, Punkt einfügen)
    #[default]
    Primary,
    /// Rechte Maustaste (Zeichnen abbrechen)
    Secondary,
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Pointer-Positionen sind bereits auf die Bodenebene projiziert;
/// `None` bedeutet, dass der Strahl die Ebene verfehlt hat.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Maustaste gedrückt
    PointerDown {
        world_pos: Option<Point>,
        button: PointerButton,
        /// Zeitstempel in Millisekunden (für Doppelklick-Erkennung)
        time_ms: u64,
    },
    /// Maus bewegt
    PointerMove { world_pos: Option<Point> },
    /// Maustaste losgelassen
    PointerUp {
        world_pos: Option<Point>,
        button: PointerButton,
    },
    /// Escape: laufende Interaktion abbrechen
    CancelRequested,
    /// Letzten Schritt rückgängig machen
    UndoRequested,
    /// Zurückgenommenen Schritt wiederherstellen
    RedoRequested,
    /// Editor-Werkzeug wechseln
    SetEditorToolRequested { tool: EditorTool },
    /// Grid-Snapping ein-/ausschalten
    GridSnapToggled { enabled: bool },
    /// Zwischen 2D-Grundriss und 3D-Ansicht umschalten
    ViewModeToggled { is_3d: bool },
    /// Ecke direkt löschen (z.B. aus einer Eigenschaftsliste)
    DeletePointRequested { room_id: RoomId, index: usize },
    /// Optionen anwenden
    OptionsChanged { options: Box<EditorOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
