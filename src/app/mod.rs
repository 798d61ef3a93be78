//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod path_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Pfad, Editor, Wiedergabe).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use path_scene::build as build_path_scene;
pub use state::{
    AppState, EditorState, GizmoMode, HistoryAvailability, PlaybackState, SelectionState,
    UiState, VehiclePose,
};
