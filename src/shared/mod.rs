//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration und die Szenen-Projektion, die zwischen `app` und
//! externen Darstellungs-Kollaborateuren geteilt werden.

pub mod options;
mod path_scene;

pub use options::EditorOptions;
pub use options::{EDIT_FALLOFF_DEFAULT, VEHICLE_HOME_POSITION, WAYPOINT_MIN_DISTANCE};
pub use path_scene::{PathScene, SceneWaypoint};
