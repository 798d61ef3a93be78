//! Use-Case: Koordinaten eines Wegpunkts direkt setzen.

use crate::core::PathError;
use crate::AppState;
use glam::DVec3;

/// Setzt die Position des Wegpunkts `index` (Koordinateneingabe im Panel).
pub fn set_waypoint_position(state: &mut AppState, index: usize, position: DVec3) {
    if !position.is_finite() {
        log::warn!("{}", PathError::NonFinite("waypoint position"));
        return;
    }
    if let Err(e) = state.path.waypoint_at(index) {
        log::warn!("Position nicht gesetzt: {}", e);
        return;
    }

    state.record_undo_snapshot();
    state.editor.abort_drags();
    if let Ok(wp) = state.path_mut().waypoint_at_mut(index) {
        wp.position = position;
        log::info!("Wegpunkt {} auf {:?} gesetzt", index, position);
    }
}
