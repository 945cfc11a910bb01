//! Aufzeichnung eines bereits angewendeten Schritts im Action-Log.

use crate::app::AppState;
use crate::core::{Action, SharedEdgePair};
use std::collections::BTreeSet;

/// Zeichnet `actions` als einen Schritt auf und hängt für jedes neu
/// entstandene Kantenpaar ein `ShareEdge` an.
pub(super) fn commit_step(
    state: &mut AppState,
    mut actions: Vec<Action>,
    shared_before: &BTreeSet<SharedEdgePair>,
) {
    let shared_after = state.rooms.shared_pairs();
    actions.extend(
        shared_after
            .difference(shared_before)
            .map(|pair| Action::ShareEdge {
                room_a: pair.a.0,
                edge_a: pair.a.1,
                room_b: pair.b.0,
                edge_b: pair.b.1,
            }),
    );
    log::debug!(
        "Schritt aufgezeichnet: {}",
        actions
            .iter()
            .map(Action::kind_name)
            .collect::<Vec<_>>()
            .join(", ")
    );
    state.history.record_step(actions);
}
