//! Use-Cases für die Pfad-Aufzeichnung aus der Fahrzeugbewegung.

use crate::app::state::VehiclePose;
use crate::core::{Orientation, Waypoint};
use crate::AppState;
use glam::{DQuat, DVec3};

/// Startet die Aufzeichnung. Der bisherige Pfad wird einmalig gesichert.
pub fn start(state: &mut AppState) {
    if state.recording.active {
        log::debug!("Aufzeichnung läuft bereits");
        return;
    }
    state.playback.cursor = None;
    state.record_undo_snapshot();
    state.editor.abort_drags();
    state.recording.active = true;
    state.ui.set_status("Recording path...".to_string());
}

/// Übernimmt eine neue Fahrzeugpose.
///
/// Während der Aufzeichnung wird ein Wegpunkt angehängt, wenn der Abstand
/// zum letzten Punkt `threshold` übersteigt; der erste Punkt immer.
pub fn record_waypoint(
    state: &mut AppState,
    position: DVec3,
    orientation: Option<Orientation>,
    threshold: f64,
) {
    let waypoint = Waypoint {
        position,
        orientation,
    };
    if let Err(e) = waypoint.validate() {
        log::warn!("Fahrzeugpose verworfen: {}", e);
        return;
    }

    state.vehicle = VehiclePose {
        position,
        attitude: orientation.map_or(DQuat::IDENTITY, Orientation::to_quat),
    };
    if !state.recording.active {
        return;
    }

    let far_enough = state
        .path
        .last()
        .map_or(true, |last| last.position.distance(position) > threshold);
    if far_enough {
        if let Err(e) = state.path_mut().append(waypoint) {
            log::warn!("Wegpunkt nicht aufgezeichnet: {}", e);
        }
    }
}

/// Beendet Aufzeichnung und Wiedergabe.
///
/// Ein Pfad mit weniger als zwei Punkten wird komplett verworfen.
pub fn stop(state: &mut AppState) {
    state.recording.active = false;
    state.playback.cursor = None;

    if state.path.len() < 2 {
        super::file_io::clear_path(state);
        state.ui.set_status("Path too short, cleared.".to_string());
    } else {
        state.ui.set_status("Path recorded.".to_string());
    }
}

/// Verwirft alle Punkte nach `index` und zeichnet von dort aus weiter auf.
pub fn resume_from(state: &mut AppState, index: usize) {
    let waypoint = match state.path.waypoint_at(index) {
        Ok(wp) => *wp,
        Err(e) => {
            log::warn!("Aufzeichnung nicht fortgesetzt: {}", e);
            return;
        }
    };

    state.playback.cursor = None;
    state.record_undo_snapshot();
    state.editor.abort_drags();
    if let Err(e) = state.path_mut().truncate_after(index) {
        log::warn!("Aufzeichnung nicht fortgesetzt: {}", e);
        return;
    }
    state.selection.clear();
    state.vehicle = VehiclePose {
        position: waypoint.position,
        attitude: waypoint.local_quat(),
    };
    state.recording.active = true;
    state.ui.set_status("Recording path...".to_string());
}
