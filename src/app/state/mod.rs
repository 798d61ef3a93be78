//! Application State — zentrale Datenhaltung.

mod app_state;
mod editor;
mod playback;
mod selection;
mod ui;

pub use app_state::{AppState, HistoryAvailability};
pub use editor::{DragSession, EditorState, ExtendDrag, GizmoMode};
pub use playback::{PlaybackState, RecordingState, VehiclePose};
pub use selection::SelectionState;
pub use ui::UiState;
