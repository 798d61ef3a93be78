//! Handler für die Wiedergabe.

use crate::app::use_cases;
use crate::app::AppState;

pub fn start(state: &mut AppState, reversed: bool) {
    use_cases::playback::start(state, reversed);
}

pub fn toggle_pause(state: &mut AppState) {
    use_cases::playback::toggle_pause(state);
}

pub fn set_direction(state: &mut AppState, reversed: bool) {
    use_cases::playback::set_direction(state, reversed);
}

pub fn stop(state: &mut AppState) {
    use_cases::playback::stop(state);
}

/// Frame-Tick der Wiedergabe.
pub fn advance(state: &mut AppState, dt: f64) {
    use_cases::playback::advance(state, dt);
}

pub fn set_speed(state: &mut AppState, speed: f64) {
    use_cases::playback::set_speed(state, speed);
}
