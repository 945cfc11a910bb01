//! Diagnose-Protokoll der ausgeführten Commands.
//!
//! Unabhängig vom Action-Log: enthält auch abgelehnte Eingaben, Hover- und
//! Cursor-Updates und wird von Undo/Redo nicht verändert.

use super::AppCommand;
use std::collections::VecDeque;

/// Ringpuffer der zuletzt ausgeführten Commands.
#[derive(Debug)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
    capacity: usize,
    total: u64,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLog {
    /// Standard-Kapazität des Puffers.
    pub const DEFAULT_CAPACITY: usize = 1000;

    /// Erstellt ein leeres Protokoll mit Standard-Kapazität.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Erstellt ein leeres Protokoll, das höchstens `capacity` Einträge hält.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(Self::DEFAULT_CAPACITY)),
            capacity,
            total: 0,
        }
    }

    /// Hängt einen Command an; bei vollem Puffer fällt der älteste heraus.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
        self.total += 1;
    }

    /// Anzahl der gehaltenen Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Anzahl aller jemals protokollierten Commands (inkl. verdrängter).
    pub fn total_recorded(&self) -> u64 {
        self.total
    }

    /// Einträge vom ältesten zum neuesten.
    pub fn iter(&self) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter()
    }

    /// Der zuletzt ausgeführte Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }
}
