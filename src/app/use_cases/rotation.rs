//! Use-Cases für die globale Pfad-Rotation (Vorschau, Anwenden, Verwerfen).

use crate::core::RotationAxis;
use crate::AppState;

/// Startet die Rotations-Vorschau.
pub fn begin_preview(state: &mut AppState) {
    state.rotation.begin_preview();
}

/// Setzt den Winkel einer Achse absolut (Slider).
pub fn set_angle(state: &mut AppState, axis: RotationAxis, degrees: f64) {
    if let Err(e) = state.rotation.set_axis_angle(axis, degrees) {
        log::warn!("Rotationswinkel verworfen: {}", e);
    }
}

/// Verändert den Winkel einer Achse relativ (Schrittbuttons).
pub fn step_angle(state: &mut AppState, axis: RotationAxis, delta_degrees: f64) {
    if let Err(e) = state.rotation.increment_axis_angle(axis, delta_degrees) {
        log::warn!("Rotationsschritt verworfen: {}", e);
    }
}

/// Wählt den Drehpunkt (None = Schwerpunkt).
pub fn set_origin(state: &mut AppState, index: Option<usize>) {
    state.rotation.set_origin(index);
    log::debug!("Drehpunkt: {:?}", state.rotation.origin());
}

/// Backt die ausstehende Rotation in den Pfad (ein Undo-Schritt).
///
/// Eine Null-Rotation beendet nur die Vorschau.
pub fn apply(state: &mut AppState) {
    if state.rotation.rotation().is_zero() {
        state.rotation.cancel();
        log::debug!("Rotation anwenden: nichts zu tun");
        return;
    }

    state.record_undo_snapshot();
    state.editor.abort_drags();
    let baked = state.rotation.bake(&state.path);
    state.replace_waypoints(baked);
    log::info!("Rotation auf {} Wegpunkte angewendet", state.path.len());
}

/// Verwirft die Vorschau, der Pfad bleibt unverändert.
pub fn cancel(state: &mut AppState) {
    state.rotation.cancel();
    log::debug!("Rotation verworfen");
}
