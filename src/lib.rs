//! ROV Path Planner Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod interchange;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, HistoryAvailability, UiState};
pub use core::{
    Orientation, PathError, PlaybackCurve, RotationEngine, RotationOrigin, Waypoint, WaypointPath,
};
pub use interchange::{read_waypoints, write_waypoints_json};
pub use shared::{EditorOptions, PathScene};
