//! Use-Case-Funktionen für das Raum-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `create_room`: Polygon-/Rechteck-Raum anlegen
//! - `split_edge`: Punkt in (geteilte) Kante einfügen
//! - `delete_point`: Ecke löschen
//! - `move_vertex`: Ecken-Drag (Beginn, Update, Ende, Abbruch)
//! - `commit`: Schritt mit neu entstandenen geteilten Kanten aufzeichnen

mod commit;
mod create_room;
mod delete_point;
mod move_vertex;
mod split_edge;

pub use create_room::{create_polygon_room, create_rectangle_room};
pub use delete_point::delete_point;
pub use move_vertex::{begin_vertex_drag, cancel_vertex_drag, end_vertex_drag, update_vertex_drag};
pub use split_edge::{split_edge, split_point_on_edge};
