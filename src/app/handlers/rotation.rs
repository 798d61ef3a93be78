//! Handler für die globale Pfad-Rotation.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::RotationAxis;

pub fn begin_preview(state: &mut AppState) {
    use_cases::rotation::begin_preview(state);
}

/// Slider-Wert in Grad übernehmen.
pub fn set_angle(state: &mut AppState, axis: RotationAxis, degrees: f64) {
    use_cases::rotation::set_angle(state, axis, degrees);
}

/// Schrittbutton in Grad übernehmen.
pub fn step_angle(state: &mut AppState, axis: RotationAxis, delta_degrees: f64) {
    use_cases::rotation::step_angle(state, axis, delta_degrees);
}

pub fn set_origin(state: &mut AppState, index: Option<usize>) {
    use_cases::rotation::set_origin(state, index);
}

/// Backt die Rotation in den Pfad.
pub fn apply(state: &mut AppState) {
    use_cases::rotation::apply(state);
}

pub fn cancel(state: &mut AppState) {
    use_cases::rotation::cancel(state);
}
