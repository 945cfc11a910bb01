//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::core::EditError;
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Abgelehnte Operationen landen in `state.ui.last_error`; ein `Err`
    /// entsteht nur bei ungültigen Optionen.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        if !matches!(
            intent,
            AppIntent::PointerMove { .. } | AppIntent::PointerUp { .. }
        ) {
            state.ui.clear();
        }
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        let result: Result<(), EditError> = match command {
            // === Polygon & Rechteck ===
            AppCommand::BeginPolygon { world_pos, time_ms } => {
                handlers::drawing::begin_polygon(state, world_pos, time_ms)
            }
            AppCommand::AppendPolygonPoint { world_pos, time_ms } => {
                handlers::drawing::append_polygon_point(state, world_pos, time_ms);
                Ok(())
            }
            AppCommand::FinalizePolygon => handlers::drawing::finalize_polygon(state),
            AppCommand::BeginRectangle { world_pos } => {
                handlers::drawing::begin_rectangle(state, world_pos)
            }
            AppCommand::FinalizeRectangle { world_pos } => {
                handlers::drawing::finalize_rectangle(state, world_pos)
            }
            AppCommand::UpdateDrawCursor { world_pos } => {
                handlers::drawing::update_draw_cursor(state, world_pos);
                Ok(())
            }

            // === Ecken-Drag ===
            AppCommand::BeginVertexDrag { vertex, time_ms } => {
                handlers::interaction::begin_vertex_drag(state, vertex, time_ms)
            }
            AppCommand::UpdateVertexDrag { world_pos } => {
                handlers::interaction::update_vertex_drag(state, world_pos);
                Ok(())
            }
            AppCommand::EndVertexDrag => {
                handlers::interaction::end_vertex_drag(state);
                Ok(())
            }

            // === Topologie ===
            AppCommand::SplitEdge {
                room_id,
                edge_index,
                world_pos,
            } => handlers::editing::split_edge(state, room_id, edge_index, world_pos),
            AppCommand::DeletePoint { room_id, index } => {
                handlers::editing::delete_point(state, room_id, index)
            }

            // === Hover & Steuerung ===
            AppCommand::UpdateHover { world_pos } => {
                handlers::interaction::update_hover(state, world_pos);
                Ok(())
            }
            AppCommand::CancelInteraction => {
                handlers::interaction::cancel(state);
                Ok(())
            }
            AppCommand::RejectInput { reason } => handlers::interaction::reject(reason),
            AppCommand::SetEditorTool { tool } => {
                handlers::editing::set_editor_tool(state, tool);
                Ok(())
            }
            AppCommand::SetGridSnap { enabled } => {
                handlers::view::set_grid_snap(state, enabled);
                Ok(())
            }
            AppCommand::SetViewMode { is_3d } => {
                handlers::view::set_view_mode(state, is_3d);
                Ok(())
            }

            // === Optionen ===
            AppCommand::ApplyOptions { options } => {
                handlers::options::apply_options(state, *options)?;
                Ok(())
            }
            AppCommand::ResetOptions => {
                handlers::options::reset_options(state)?;
                Ok(())
            }

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
        };

        if let Err(error) = result {
            state.ui.report_error(error);
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
