//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod drawing;
pub mod editing;
pub mod history;
pub mod interaction;
pub mod options;
pub mod view;

use crate::app::AppState;
use crate::core::EditError;

/// Lehnt Zeichnen und Ziehen in der 3D-Ansicht ab.
pub(crate) fn ensure_2d(state: &AppState) -> Result<(), EditError> {
    if state.view.is_3d_mode {
        return Err(EditError::invalid(
            "Zeichnen und Ziehen sind in der 3D-Ansicht gesperrt",
        ));
    }
    Ok(())
}
