//! Action-Log mit Undo/Redo.
//!
//! Jeder Schritt besteht aus einer oder mehreren bereits angewendeten
//! Aktionen. Undo spielt deren Inversen in umgekehrter Reihenfolge ab,
//! Redo die Aktionen selbst in Originalreihenfolge.

use crate::core::{Action, EditError, RoomStore};

/// Ein Undo-Schritt: Aktionen, die als Einheit zurückgenommen werden.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryStep {
    actions: Vec<Action>,
}

impl HistoryStep {
    /// Die Aktionen dieses Schritts in Ausführungsreihenfolge.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Kurzbeschreibung für Logging (Art der ersten Aktion).
    pub fn label(&self) -> &'static str {
        self.actions.first().map_or("Leer", Action::kind_name)
    }
}

/// Linearer Verlauf mit Cursor.
///
/// `cursor` zählt die angewendeten Schritte: `steps[..cursor]` sind
/// rücknehmbar, `steps[cursor..]` wiederholbar.
#[derive(Debug, Clone)]
pub struct ActionLog {
    steps: Vec<HistoryStep>,
    cursor: usize,
    max_depth: usize,
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new_with_capacity(crate::shared::options::HISTORY_MAX_DEPTH)
    }
}

impl ActionLog {
    /// Erstellt einen leeren Verlauf mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            steps: Vec::with_capacity(max_depth.min(256)),
            cursor: 0,
            max_depth: max_depth.max(1),
        }
    }

    /// Zeichnet eine einzelne, bereits angewendete Aktion als eigenen Schritt auf.
    pub fn record(&mut self, action: Action) {
        self.record_step(vec![action]);
    }

    /// Zeichnet mehrere, bereits angewendete Aktionen als einen Schritt auf.
    ///
    /// Verwirft alle wiederholbaren Schritte. Leere Schritte werden ignoriert.
    pub fn record_step(&mut self, actions: Vec<Action>) {
        if actions.is_empty() {
            return;
        }
        self.steps.truncate(self.cursor);
        self.steps.push(HistoryStep { actions });
        if self.steps.len() > self.max_depth {
            let overflow = self.steps.len() - self.max_depth;
            self.steps.drain(..overflow);
        }
        self.cursor = self.steps.len();
    }

    /// Nimmt den letzten Schritt zurück.
    ///
    /// Die Inversen laufen auf einer Arbeitskopie; schlägt eine davon fehl,
    /// bleiben Bestand und Cursor unverändert.
    pub fn undo(&mut self, store: &mut RoomStore) -> Result<&HistoryStep, EditError> {
        if self.cursor == 0 {
            return Err(EditError::NothingToUndo);
        }
        let step = &self.steps[self.cursor - 1];
        let mut working = store.clone();
        for action in step.actions.iter().rev() {
            action.inverse().apply(&mut working)?;
        }
        *store = working;
        self.cursor -= 1;
        Ok(&self.steps[self.cursor])
    }

    /// Wendet den nächsten zurückgenommenen Schritt erneut an.
    pub fn redo(&mut self, store: &mut RoomStore) -> Result<&HistoryStep, EditError> {
        if self.cursor >= self.steps.len() {
            return Err(EditError::NothingToRedo);
        }
        let step = &self.steps[self.cursor];
        let mut working = store.clone();
        for action in &step.actions {
            action.apply(&mut working)?;
        }
        *store = working;
        self.cursor += 1;
        Ok(&self.steps[self.cursor - 1])
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.cursor < self.steps.len()
    }

    /// Index des zuletzt angewendeten Schritts (`None` = Ausgangszustand).
    pub fn current_step(&self) -> Option<usize> {
        self.cursor.checked_sub(1)
    }

    /// Anzahl aller gespeicherten Schritte (rücknehmbar + wiederholbar).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Gibt `true` zurück, wenn kein Schritt gespeichert ist.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Alle gespeicherten Schritte in Reihenfolge.
    pub fn steps(&self) -> &[HistoryStep] {
        &self.steps
    }

    /// Setzt eine neue Maximaltiefe.
    ///
    /// Überzählige Schritte fallen zuerst am Ende des Redo-Zweigs weg, erst
    /// danach die ältesten rücknehmbaren. Ein gelöschter rücknehmbarer Schritt
    /// darf nie einen verbleibenden Redo-Schritt zurücklassen, der auf ihm aufbaut.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth.max(1);
        if self.steps.len() <= self.max_depth {
            return;
        }
        self.steps.truncate(self.cursor.max(self.max_depth));
        if self.steps.len() > self.max_depth {
            let overflow = self.steps.len() - self.max_depth;
            self.steps.drain(..overflow);
            self.cursor -= overflow;
        }
    }

    /// Verwirft den gesamten Verlauf.
    pub fn clear(&mut self) {
        self.steps.clear();
        self.cursor = 0;
    }
}
