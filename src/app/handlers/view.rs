//! Handler für Ansicht und Raster.

use crate::app::AppState;

/// Schaltet Grid-Snapping ein oder aus.
pub fn set_grid_snap(state: &mut AppState, enabled: bool) {
    state.view.grid_snap_enabled = enabled;
    log::info!("Grid-Snapping: {}", if enabled { "an" } else { "aus" });
}

/// Wechselt zwischen 2D-Grundriss und 3D-Ansicht.
///
/// Jeder Wechsel bricht die laufende Interaktion ab.
pub fn set_view_mode(state: &mut AppState, is_3d: bool) {
    super::interaction::cancel(state);
    state.editor.hover = Default::default();
    state.view.is_3d_mode = is_3d;
    log::info!("Ansicht: {}", if is_3d { "3D" } else { "2D" });
}
