//! Fehler-Taxonomie der Raum-Topologie. Alle Fehler sind lokal und behebbar.

use super::RoomId;
use thiserror::Error;

/// Abgelehnte Operation; der Raum-Bestand bleibt dabei unverändert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// Raum-ID existiert nicht
    #[error("Raum {0} nicht gefunden")]
    RoomNotFound(RoomId),
    /// Punkt- oder Kanten-Index existiert im Raum nicht
    #[error("Index {index} in Raum {room_id} nicht gefunden")]
    NotFound {
        /// Betroffener Raum
        room_id: RoomId,
        /// Ungültiger Index
        index: usize,
    },
    /// Operation würde eine Invariante verletzen oder ist im aktuellen Modus gesperrt
    #[error("Ungültige Operation: {0}")]
    InvalidOperation(String),
    /// Kein Schritt zum Rückgängigmachen vorhanden
    #[error("Nichts rückgängig zu machen")]
    NothingToUndo,
    /// Kein Schritt zum Wiederherstellen vorhanden
    #[error("Nichts wiederherzustellen")]
    NothingToRedo,
}

impl EditError {
    /// Kurzform für `InvalidOperation`.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidOperation(reason.into())
    }
}
