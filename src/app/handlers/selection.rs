//! Handler für Selektion und Lösch-Markierungen.

use crate::app::use_cases;
use crate::app::AppState;

/// Selektiert einen Wegpunkt oder hebt die Selektion auf.
pub fn select(state: &mut AppState, index: Option<usize>) {
    use_cases::selection::select_waypoint(state, index);
}

/// Selektiert den nächsten bzw. vorherigen Wegpunkt.
pub fn cycle(state: &mut AppState, forward: bool) {
    use_cases::selection::cycle_selection(state, forward);
}

/// Schaltet die Lösch-Markierung um.
pub fn toggle_checked(state: &mut AppState, index: usize) {
    use_cases::selection::toggle_checked(state, index);
}
