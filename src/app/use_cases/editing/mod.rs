//! Use-Case-Funktionen für das Editieren von Wegpunkten.
//!
//! Aufgeteilt nach Operation:
//! - `proportional` — Gizmo-Drag mit Falloff (Verschieben und Drehen)
//! - `delete_waypoints` — Wegpunkte per Index oder Markierung löschen
//! - `set_position` — Koordinaten direkt setzen

mod delete_waypoints;
mod proportional;
mod set_position;

pub use delete_waypoints::{delete_checked_waypoints, delete_waypoints};
pub use proportional::{begin_drag, end_drag, update_move, update_rotate};
pub use set_position::set_waypoint_position;
