//! Handler für Polygon- und Rechteck-Zeichnen.

use super::ensure_2d;
use crate::app::tools::{InteractionState, PolygonDraft, RectangleDraft};
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{EditError, Point};

/// Beginnt ein Polygon mit dem ersten Punkt.
pub fn begin_polygon(state: &mut AppState, world_pos: Point, time_ms: u64) -> Result<(), EditError> {
    ensure_2d(state)?;
    state.editor.interaction =
        InteractionState::DrawingPolygon(PolygonDraft::start(world_pos, time_ms));
    log::debug!("Polygon begonnen bei {}", world_pos);
    Ok(())
}

/// Hängt einen Punkt an das laufende Polygon an.
pub fn append_polygon_point(state: &mut AppState, world_pos: Point, time_ms: u64) {
    let tol = state.options.tolerance;
    if let InteractionState::DrawingPolygon(draft) = &mut state.editor.interaction {
        if draft.push(world_pos, tol, time_ms) {
            log::debug!("Polygon-Punkt {} gesetzt: {}", draft.len(), world_pos);
        }
    }
}

/// Schließt das laufende Polygon und legt den Raum an.
///
/// Schlägt das Anlegen fehl, bleibt der Entwurf erhalten.
pub fn finalize_polygon(state: &mut AppState) -> Result<(), EditError> {
    ensure_2d(state)?;
    let points = match &state.editor.interaction {
        InteractionState::DrawingPolygon(draft) => draft.points().to_vec(),
        _ => return Ok(()),
    };
    use_cases::editing::create_polygon_room(state, &points)?;
    state.editor.interaction = InteractionState::Idle;
    Ok(())
}

/// Setzt die erste Rechteck-Ecke.
pub fn begin_rectangle(state: &mut AppState, world_pos: Point) -> Result<(), EditError> {
    ensure_2d(state)?;
    state.editor.interaction = InteractionState::DrawingRectangle(RectangleDraft::start(world_pos));
    log::debug!("Rechteck begonnen bei {}", world_pos);
    Ok(())
}

/// Setzt die gegenüberliegende Ecke und legt den Rechteck-Raum an.
pub fn finalize_rectangle(state: &mut AppState, world_pos: Point) -> Result<(), EditError> {
    ensure_2d(state)?;
    let anchor = match &state.editor.interaction {
        InteractionState::DrawingRectangle(draft) => draft.anchor(),
        _ => return Ok(()),
    };
    use_cases::editing::create_rectangle_room(state, anchor, world_pos)?;
    state.editor.interaction = InteractionState::Idle;
    Ok(())
}

/// Aktualisiert den Vorschau-Cursor des laufenden Zeichenvorgangs.
pub fn update_draw_cursor(state: &mut AppState, world_pos: Point) {
    match &mut state.editor.interaction {
        InteractionState::DrawingPolygon(draft) => draft.set_cursor(world_pos),
        InteractionState::DrawingRectangle(draft) => draft.set_cursor(world_pos),
        _ => {}
    }
}
