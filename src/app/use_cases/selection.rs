//! Use-Cases für Punkt-Selektion und Lösch-Markierungen.

use crate::core::PathError;
use crate::AppState;

/// Selektiert einen Wegpunkt (None hebt die Selektion auf).
pub fn select_waypoint(state: &mut AppState, index: Option<usize>) {
    match index {
        None => {
            state.selection.selected = None;
            log::debug!("Selektion aufgehoben");
        }
        Some(i) if i < state.path.len() => {
            state.selection.selected = Some(i);
            state.ui.set_status(format!("Point {} selected.", i));
        }
        Some(i) => log::warn!(
            "{}",
            PathError::IndexOutOfRange {
                index: i,
                len: state.path.len()
            }
        ),
    }
}

/// Selektiert den nächsten bzw. vorherigen Wegpunkt mit Umlauf.
pub fn cycle_selection(state: &mut AppState, forward: bool) {
    let next = state.selection.cycled(state.path.len(), forward);
    if next.is_some() {
        select_waypoint(state, next);
    }
}

/// Schaltet die Lösch-Markierung eines Wegpunkts um.
pub fn toggle_checked(state: &mut AppState, index: usize) {
    if index >= state.path.len() {
        log::warn!("Markierung ignoriert, Index {} außerhalb des Pfades", index);
        return;
    }
    let checked = state.selection.toggle_checked(index);
    log::debug!("Wegpunkt {} markiert: {}", index, checked);
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
    fn select_out_of_range_keeps_previous_selection() {
        let mut state = state_with_points(2);
        select_waypoint(&mut state, Some(1));
        select_waypoint(&mut state, Some(5));
        assert_eq!(state.selection.selected, Some(1));
        assert_eq!(state.ui.status_message.as_deref(), Some("Point 1 selected."));
    }

    #[test]
    fn cycle_on_empty_path_is_noop() {
        let mut state = AppState::new();
        cycle_selection(&mut state, true);
        assert_eq!(state.selection.selected, None);
    }

    #[test]
    fn cycle_backwards_wraps_to_last() {
        let mut state = state_with_points(3);
        select_waypoint(&mut state, Some(0));
        cycle_selection(&mut state, false);
        assert_eq!(state.selection.selected, Some(2));
    }
}
