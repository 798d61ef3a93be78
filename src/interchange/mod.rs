//! JSON Import/Export für Wegpunkt-Pfade.
//!
//! Das Austauschformat ist ein Array von Records je Wegpunkt mit Position,
//! Euler-Winkeln (Radiant, XYZ) und Fahrparametern.

mod record;
pub mod reader;
pub mod writer;

pub use reader::read_waypoints;
pub use record::WaypointRecord;
pub use writer::{write_records, write_waypoints_json};
