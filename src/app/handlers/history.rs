//! Handler für Undo/Redo-Operationen.

use crate::app::history::Snapshot;
use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
///
/// Gibt `true` zurück, wenn ein Schritt rückgängig gemacht wurde.
pub fn undo(state: &mut AppState) -> bool {
    let current = Snapshot::from_state(state);
    if let Some(prev) = state.history.pop_undo_with_current(current) {
        prev.apply_to(state);
        state.ui.set_status("Undo successful.".to_string());
        true
    } else {
        log::debug!("Undo: nichts zu tun");
        state.ui.status_message = Some("Nothing to undo.".to_string());
        false
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) -> bool {
    let current = Snapshot::from_state(state);
    if let Some(next) = state.history.pop_redo_with_current(current) {
        next.apply_to(state);
        state.ui.set_status("Redo successful.".to_string());
        true
    } else {
        log::debug!("Redo: nichts zu tun");
        state.ui.status_message = Some("Nothing to redo.".to_string());
        false
    }
}
