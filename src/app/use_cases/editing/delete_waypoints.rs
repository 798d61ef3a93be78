//! Use-Case: Wegpunkte löschen.

use crate::AppState;

/// Löscht die Wegpunkte an den gegebenen Indizes (ein Undo-Schritt).
///
/// Ungültige und doppelte Indizes werden ignoriert.
pub fn delete_waypoints(state: &mut AppState, indices: &[usize]) {
    let len = state.path.len();
    if !indices.iter().any(|&i| i < len) {
        state
            .ui
            .set_status("No waypoints selected for deletion.".to_string());
        return;
    }

    state.record_undo_snapshot();
    state.editor.abort_drags();
    let removed = state.path_mut().remove_at(indices.iter().copied());
    state.selection.clear();
    state.ui.set_status(format!("Deleted {} waypoint(s).", removed));
}

/// Löscht alle per Checkbox markierten Wegpunkte.
pub fn delete_checked_waypoints(state: &mut AppState) {
    let indices: Vec<usize> = state.selection.checked.iter().copied().collect();
    delete_waypoints(state, &indices);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Waypoint;
    use glam::DVec3;

    fn state_with_points(count: usize) -> AppState {
        let mut state = AppState::new();
        state.replace_waypoints(
            (0..count)
                .map(|i| Waypoint::new(DVec3::new(i as f64, 0.0, 0.0)))
                .collect(),
        );
        state
    }

    #[test]
    fn delete_first_and_last_keeps_middle() {
        let mut state = state_with_points(3);
        delete_waypoints(&mut state, &[0, 2]);

        assert_eq!(state.path.len(), 1);
        assert_eq!(state.path.waypoints()[0].position, DVec3::X);
        assert_eq!(state.ui.status_message.as_deref(), Some("Deleted 2 waypoint(s)."));
    }

    #[test]
    fn delete_checked_uses_checkbox_set_and_clears_it() {
        let mut state = state_with_points(4);
        state.selection.toggle_checked(3);
        state.selection.toggle_checked(1);

        delete_checked_waypoints(&mut state);

        assert_eq!(state.path.len(), 2);
        assert!(state.selection.checked.is_empty());
        assert!(state.can_undo());
    }

    #[test]
    fn nothing_checked_reports_status_without_snapshot() {
        let mut state = state_with_points(2);
        delete_checked_waypoints(&mut state);

        assert_eq!(state.path.len(), 2);
        assert!(!state.can_undo());
        assert_eq!(
            state.ui.status_message.as_deref(),
            Some("No waypoints selected for deletion.")
        );
    }
}
