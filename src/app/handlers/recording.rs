//! Handler für die Pfad-Aufzeichnung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Orientation;
use glam::DVec3;

pub fn start(state: &mut AppState) {
    use_cases::recording::start(state);
}

/// Übernimmt eine Fahrzeugpose (und zeichnet ggf. auf).
pub fn record(
    state: &mut AppState,
    position: DVec3,
    orientation: Option<Orientation>,
    threshold: f64,
) {
    use_cases::recording::record_waypoint(state, position, orientation, threshold);
}

pub fn stop(state: &mut AppState) {
    use_cases::recording::stop(state);
}

/// Setzt die Aufzeichnung ab einem Wegpunkt fort.
pub fn resume_from(state: &mut AppState, index: usize) {
    use_cases::recording::resume_from(state, index);
}
