//! Use-Case: Gizmo-Drag mit proportionalem Falloff.

use crate::app::state::DragSession;
use crate::core::{proportional_move, proportional_rotate, PathError, Waypoint};
use crate::AppState;
use glam::{DQuat, DVec3};

/// Startet einen Drag am Wegpunkt `index`.
///
/// Der aktuelle Pfad wird als Undo-Snapshot gesichert und als
/// Ausgangszustand eingefroren. Alle Updates rechnen von hier aus.
/// Solange ein Drag läuft, wird kein zweiter gestartet.
pub fn begin_drag(state: &mut AppState, index: usize) {
    if let Some(session) = state.editor.drag.as_ref() {
        log::debug!("Drag an Wegpunkt {} läuft bereits", session.index);
        return;
    }
    if let Err(e) = state.path.waypoint_at(index) {
        log::warn!("Drag nicht gestartet: {}", e);
        return;
    }

    state.record_undo_snapshot();
    state.editor.drag = Some(DragSession {
        index,
        original: state.path.clone(),
    });
    log::debug!("Drag an Wegpunkt {} gestartet", index);
}

/// Verschiebt den gezogenen Punkt um das Gesamt-Delta seit Drag-Beginn.
pub fn update_move(state: &mut AppState, delta: DVec3) {
    let falloff = state.editor.falloff;
    apply_drag_update(state, |original, index| {
        proportional_move(original, index, delta, falloff)
    });
}

/// Dreht den gezogenen Punkt um die Gesamt-Drehung seit Drag-Beginn.
pub fn update_rotate(state: &mut AppState, delta: DQuat) {
    let falloff = state.editor.falloff;
    apply_drag_update(state, |original, index| {
        proportional_rotate(original, index, delta, falloff)
    });
}

/// Beendet den Drag. Der Snapshot vom Drag-Beginn bleibt als Undo-Schritt.
pub fn end_drag(state: &mut AppState) {
    if let Some(session) = state.editor.drag.take() {
        log::info!("Wegpunkt {} proportional bearbeitet", session.index);
    }
}

fn apply_drag_update<F>(state: &mut AppState, compute: F)
where
    F: FnOnce(&[Waypoint], usize) -> Result<Vec<Waypoint>, PathError>,
{
    let Some(session) = state.editor.drag.as_ref() else {
        log::debug!("Drag-Update ohne aktiven Drag ignoriert");
        return;
    };

    if session.original.len() != state.path.len() {
        log::warn!("Drag-Update verworfen: Pfad wurde seit Drag-Beginn verändert");
        state.editor.drag = None;
        return;
    }

    match compute(session.original.waypoints(), session.index) {
        Ok(waypoints) if waypoints.is_empty() => {}
        Ok(waypoints) => state.replace_waypoints(waypoints),
        Err(e) => log::warn!("Drag-Update verworfen: {}", e),
    }
}
