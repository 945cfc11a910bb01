//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem Host-Renderer geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use options::{EDGE_PICK_RADIUS, GRID_STEP, VERTEX_HIT_RADIUS};
pub use render_scene::{InteractionPreview, RenderScene, RoomView};
