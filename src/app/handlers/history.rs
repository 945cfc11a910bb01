//! Handler für Undo/Redo-Operationen.

use crate::app::AppState;
use crate::core::EditError;
use std::sync::Arc;

/// Nimmt den letzten Schritt zurück. Eine laufende Interaktion wird vorher abgebrochen.
pub fn undo(state: &mut AppState) -> Result<(), EditError> {
    super::interaction::cancel(state);
    let step = state.history.undo(Arc::make_mut(&mut state.rooms))?;
    log::info!("Undo ausgeführt: {}", step.label());
    state.ui.set_status(format!("Rückgängig: {}", step.label()));
    state.editor.hover = Default::default();
    Ok(())
}

/// Wendet den nächsten zurückgenommenen Schritt erneut an.
pub fn redo(state: &mut AppState) -> Result<(), EditError> {
    super::interaction::cancel(state);
    let step = state.history.redo(Arc::make_mut(&mut state.rooms))?;
    log::info!("Redo ausgeführt: {}", step.label());
    state.ui.set_status(format!("Wiederhergestellt: {}", step.label()));
    state.editor.hover = Default::default();
    Ok(())
}
