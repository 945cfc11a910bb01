use crate::core::EditError;

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Zuletzt abgelehnte Operation (für Statuszeile)
    pub last_error: Option<EditError>,
    /// Statusmeldung der letzten erfolgreichen Operation
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merkt eine abgelehnte Operation vor.
    pub fn report_error(&mut self, error: EditError) {
        log::warn!("Operation abgelehnt: {}", error);
        self.status_message = None;
        self.last_error = Some(error);
    }

    /// Setzt die Statusmeldung.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Entfernt Fehler und Statusmeldung.
    pub fn clear(&mut self) {
        self.last_error = None;
        self.status_message = None;
    }
}
