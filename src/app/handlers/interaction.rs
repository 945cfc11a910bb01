//! Handler für Ecken-Drag, Hover, Abbruch und abgelehnte Eingaben.

use super::ensure_2d;
use crate::app::tools::{HoverState, InteractionState, PolygonDraft, RectangleDraft};
use crate::app::use_cases;
use crate::app::{AppState, EditorTool};
use crate::core::{EditError, Point, VertexRef};

/// Greift eine Ecke.
pub fn begin_vertex_drag(
    state: &mut AppState,
    vertex: VertexRef,
    time_ms: u64,
) -> Result<(), EditError> {
    ensure_2d(state)?;
    state.editor.hover = HoverState {
        vertex: Some(vertex),
        edge: None,
    };
    use_cases::editing::begin_vertex_drag(state, vertex, time_ms)
}

/// Verschiebt die gegriffene Ecke.
pub fn update_vertex_drag(state: &mut AppState, world_pos: Point) {
    use_cases::editing::update_vertex_drag(state, world_pos);
}

/// Lässt die gegriffene Ecke los.
///
/// Wurde nicht bewegt und ist ein Zeichenwerkzeug aktiv, beginnt an der
/// Ecke ein neuer Zeichenvorgang.
pub fn end_vertex_drag(state: &mut AppState) {
    let Some(drag) = use_cases::editing::end_vertex_drag(state) else {
        return;
    };
    if drag.has_moved() {
        return;
    }
    match state.editor.active_tool {
        EditorTool::PolygonWall => {
            state.editor.interaction = InteractionState::DrawingPolygon(PolygonDraft::start(
                drag.start(),
                drag.pressed_ms(),
            ));
            log::debug!("Polygon an vorhandener Ecke {} begonnen", drag.start());
        }
        EditorTool::RectangularWall => {
            state.editor.interaction =
                InteractionState::DrawingRectangle(RectangleDraft::start(drag.start()));
            log::debug!("Rechteck an vorhandener Ecke {} begonnen", drag.start());
        }
        EditorTool::AddPoint | EditorTool::DeletePoint => {}
    }
}

/// Bricht die laufende Interaktion ab.
///
/// Zeichen-Entwürfe werden verworfen, ein Drag setzt die Ecken auf ihre
/// Ausgangsposition zurück. Das Action-Log bleibt unberührt.
pub fn cancel(state: &mut AppState) {
    let previous = std::mem::take(&mut state.editor.interaction);
    if let InteractionState::DraggingVertex(drag) = &previous {
        use_cases::editing::cancel_vertex_drag(state, drag);
    }
    if !previous.is_idle() {
        log::info!("Interaktion abgebrochen: {}", previous.name());
    }
}

/// Aktualisiert die Hover-Hervorhebung.
pub fn update_hover(state: &mut AppState, world_pos: Point) {
    state.editor.hover = HoverState::at(world_pos, &state.rooms, &state.options);
}

/// Meldet eine im aktuellen Modus abgelehnte Eingabe.
pub fn reject(reason: String) -> Result<(), EditError> {
    Err(EditError::InvalidOperation(reason))
}
