//! Mapping von UI-Intents auf mutierende App-Commands.

mod pointer;

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Pointer-Events ohne Bodenposition (`world_pos == None`) ergeben keine Commands.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerDown {
            world_pos,
            button,
            time_ms,
        } => match world_pos {
            Some(world_pos) => pointer::map_pointer_down(state, world_pos, button, time_ms),
            None => Vec::new(),
        },
        AppIntent::PointerMove { world_pos } => match world_pos {
            Some(world_pos) => pointer::map_pointer_move(state, world_pos),
            None => Vec::new(),
        },
        AppIntent::PointerUp { world_pos, button } => match world_pos {
            Some(world_pos) => pointer::map_pointer_up(state, world_pos, button),
            None => Vec::new(),
        },
        AppIntent::CancelRequested => vec![AppCommand::CancelInteraction],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::SetEditorToolRequested { tool } => vec![AppCommand::SetEditorTool { tool }],
        AppIntent::GridSnapToggled { enabled } => vec![AppCommand::SetGridSnap { enabled }],
        AppIntent::ViewModeToggled { is_3d } => vec![AppCommand::SetViewMode { is_3d }],
        AppIntent::DeletePointRequested { room_id, index } => {
            vec![AppCommand::DeletePoint { room_id, index }]
        }
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
