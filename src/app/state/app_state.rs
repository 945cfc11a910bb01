use crate::app::history::ActionLog;
use crate::app::CommandLog;
use crate::core::RoomStore;
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::{EditorToolState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Raum-Bestand (Arc für O(1)-Übergabe an die Render-Szene, Copy-on-Write bei Mutation)
    pub rooms: Arc<RoomStore>,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Action-basiert)
    pub history: ActionLog,
    /// Laufzeit-Optionen (Toleranzen, Raster, Radien)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        let mut view = ViewState::new();
        view.grid_snap_enabled = options.grid_snap_enabled;
        Self {
            rooms: Arc::new(RoomStore::new(options.tolerance)),
            view,
            ui: UiState::new(),
            editor: EditorToolState::new(),
            command_log: CommandLog::new(),
            history: ActionLog::new_with_capacity(options.history_max_depth),
            options,
        }
    }

    /// Gibt die Anzahl der Räume zurück (für UI-Anzeige)
    pub fn room_count(&self) -> usize {
        self.rooms.room_count()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
