use crate::core::{Action, Point, SharedEdgePair, VertexRef};
use std::collections::BTreeSet;

/// Laufender Ecken-Drag.
///
/// Der Bestand wird während des Drags direkt verschoben; aufgezeichnet wird
/// erst beim Loslassen genau eine Aktion von `start` nach `current`.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexDrag {
    vertex: VertexRef,
    group: Vec<VertexRef>,
    start: Point,
    current: Point,
    moved: bool,
    pressed_ms: u64,
    shared_before: BTreeSet<SharedEdgePair>,
}

impl VertexDrag {
    /// Greift `vertex` (samt `group`) an Position `start`.
    pub fn new(
        vertex: VertexRef,
        group: Vec<VertexRef>,
        start: Point,
        pressed_ms: u64,
        shared_before: BTreeSet<SharedEdgePair>,
    ) -> Self {
        Self {
            vertex,
            group,
            start,
            current: start,
            moved: false,
            pressed_ms,
            shared_before,
        }
    }

    /// Die gegriffene Ecke.
    pub fn vertex(&self) -> VertexRef {
        self.vertex
    }

    /// Alle mitbewegten Ecken (inkl. der gegriffenen).
    pub fn group(&self) -> &[VertexRef] {
        &self.group
    }

    /// Position beim Greifen (Rücksetzziel bei Abbruch).
    pub fn start(&self) -> Point {
        self.start
    }

    pub fn current(&self) -> Point {
        self.current
    }

    /// Gibt zurück, ob während der Geste verschoben wurde.
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Zeitstempel des Greif-Klicks (Doppelklick-Basis, falls daraus ein Zeichenvorgang wird).
    pub fn pressed_ms(&self) -> u64 {
        self.pressed_ms
    }

    /// Geteilte Kanten vor Beginn des Drags.
    pub fn shared_before(&self) -> &BTreeSet<SharedEdgePair> {
        &self.shared_before
    }

    /// Übernimmt eine erfolgreich angewendete Zwischenposition.
    pub fn set_current(&mut self, pos: Point) {
        self.current = pos;
        self.moved = true;
    }

    /// Die aufzuzeichnende Aktion (`None`, wenn nie verschoben wurde).
    pub fn to_action(&self) -> Option<Action> {
        self.moved
            .then(|| Action::move_group(self.group.clone(), self.start, self.current))
    }
}
