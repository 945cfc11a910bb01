//! Application State: zentrale Datenhaltung, aufgeteilt nach Bereichen.

mod app_state;
mod editor;
mod ui;
mod view;

pub use app_state::AppState;
pub use editor::{EditorTool, EditorToolState};
pub use ui::UiState;
pub use view::ViewState;
