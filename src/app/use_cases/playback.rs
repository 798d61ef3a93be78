//! Use-Cases für die Wiedergabe entlang der Playback-Kurve.

use crate::app::state::VehiclePose;
use crate::core::{PlaybackCursor, PlaybackTick};
use crate::AppState;

/// Startet die Wiedergabe am Anfang (bzw. Ende bei `reversed`).
pub fn start(state: &mut AppState, reversed: bool) {
    let Some(curve) = state.playback_curve() else {
        state
            .ui
            .set_status("Path too short for playback.".to_string());
        return;
    };

    state.recording.active = false;
    let cursor = PlaybackCursor::start(reversed);
    let sample = curve.sample_at(cursor.t);
    state.vehicle = VehiclePose {
        position: sample.position,
        attitude: sample.look_rotation(),
    };
    state.playback.cursor = Some(cursor);
    state.ui.set_status(if reversed {
        "Playing path backwards...".to_string()
    } else {
        "Playing path...".to_string()
    });
}

/// Pausiert bzw. setzt die laufende Wiedergabe fort.
pub fn toggle_pause(state: &mut AppState) {
    let Some(cursor) = state.playback.cursor.as_mut() else {
        return;
    };
    cursor.paused = !cursor.paused;
    let paused = cursor.paused;
    state.ui.set_status(playing_status(paused));
}

/// Wechselt die Richtung der laufenden Wiedergabe und hebt eine Pause auf.
pub fn set_direction(state: &mut AppState, reversed: bool) {
    let Some(cursor) = state.playback.cursor.as_mut() else {
        return;
    };
    cursor.reversed = reversed;
    cursor.paused = false;
    state.ui.set_status(playing_status(false));
}

/// Beendet die Wiedergabe, das Fahrzeug bleibt stehen.
pub fn stop(state: &mut AppState) {
    if state.playback.cursor.take().is_some() {
        log::debug!("Wiedergabe gestoppt");
    }
}

/// Rückt die Wiedergabe um `dt` Sekunden vor und bewegt das Fahrzeug.
///
/// Das Fahrzeug blickt entlang der Kurventangente.
pub fn advance(state: &mut AppState, dt: f64) {
    let Some(mut cursor) = state.playback.cursor else {
        return;
    };
    if !dt.is_finite() || dt < 0.0 {
        log::warn!("Ungültiger Zeitschritt {} ignoriert", dt);
        return;
    }
    let Some(curve) = state.playback_curve() else {
        state.playback.cursor = None;
        log::debug!("Wiedergabe beendet: Pfad zu kurz");
        return;
    };

    let tick = cursor.tick(dt, state.playback.speed);
    if tick == PlaybackTick::Paused {
        return;
    }

    let sample = curve.sample_at(cursor.t);
    state.vehicle = VehiclePose {
        position: sample.position,
        attitude: sample.look_rotation(),
    };

    if tick == PlaybackTick::Finished {
        state.playback.cursor = None;
        state.ui.set_status("Playback finished.".to_string());
    } else {
        state.playback.cursor = Some(cursor);
    }
}

/// Setzt die Abspielgeschwindigkeit (endlich, nicht negativ).
pub fn set_speed(state: &mut AppState, speed: f64) {
    if !speed.is_finite() || speed < 0.0 {
        log::warn!("Ungültige Abspielgeschwindigkeit {} ignoriert", speed);
        return;
    }
    state.playback.speed = speed;
}

fn playing_status(paused: bool) -> String {
    if paused {
        "Playback paused.".to_string()
    } else {
        "Playing...".to_string()
    }
}
