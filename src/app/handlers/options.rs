//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;
use std::sync::Arc;

/// Übernimmt neue Optionen nach Plausibilitätsprüfung.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    options.validate()?;
    if options.tolerance != state.rooms.tolerance() {
        Arc::make_mut(&mut state.rooms).set_tolerance(options.tolerance);
    }
    state.history.set_max_depth(options.history_max_depth);
    state.view.grid_snap_enabled = options.grid_snap_enabled;
    state.options = options;
    log::info!("Optionen übernommen");
    Ok(())
}

/// Setzt alle Optionen auf Standardwerte zurück.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, EditorOptions::default())
}
