//! Handler für die Pfad-Verlängerung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ExtendMode;
use glam::DVec3;

pub fn vertical(state: &mut AppState, delta: f64) {
    use_cases::extension::extend_vertical(state, delta);
}

pub fn forward(state: &mut AppState, delta: f64, direction_hint: DVec3) {
    use_cases::extension::extend_forward(state, delta, direction_hint);
}

/// Startet den Verlängerungs-Drag.
pub fn begin_drag(state: &mut AppState, mode: ExtendMode) {
    use_cases::extension::begin_drag(state, mode);
}

pub fn update_drag(state: &mut AppState, end: DVec3) {
    use_cases::extension::update_drag(state, end);
}

/// Hängt die Zwischenpunkte des Drags an.
pub fn finish_drag(state: &mut AppState, min_spacing: f64) {
    use_cases::extension::finish_drag(state, min_spacing);
}

pub fn cancel_drag(state: &mut AppState) {
    use_cases::extension::cancel_drag(state);
}
