//! Use-Cases für das Verlängern des Pfades am letzten Wegpunkt.

use crate::app::state::ExtendDrag;
use crate::core::{
    constrain_drag_end, extend_forward as forward_copy, extend_vertical as vertical_copy,
    interpolate_segment, ExtendMode, PathError, Waypoint,
};
use crate::AppState;
use glam::DVec3;

/// Kopiert den letzten Wegpunkt um `delta` nach oben bzw. unten versetzt.
pub fn extend_vertical(state: &mut AppState, delta: f64) {
    let Some(last) = state.path.last().copied() else {
        log::debug!("Vertikal verlängern: {}", PathError::EmptyPath);
        return;
    };
    push_waypoint(state, vertical_copy(&last, delta));
}

/// Kopiert den letzten Wegpunkt um `delta` entlang der horizontalen Blickrichtung.
pub fn extend_forward(state: &mut AppState, delta: f64, direction_hint: DVec3) {
    let Some(last) = state.path.last().copied() else {
        log::debug!("Vorwärts verlängern: {}", PathError::EmptyPath);
        return;
    };
    push_waypoint(state, forward_copy(&last, delta, direction_hint));
}

/// Startet einen Verlängerungs-Drag am letzten Wegpunkt.
pub fn begin_drag(state: &mut AppState, mode: ExtendMode) {
    let Some(last) = state.path.last() else {
        log::debug!("Drag-Verlängerung: {}", PathError::EmptyPath);
        return;
    };
    let start = last.position;
    state.editor.extend_drag = Some(ExtendDrag {
        start,
        end: start,
        mode,
    });
    state.ui.set_status(
        "Click and drag the last waypoint or use R/F/T/G to extend the path.".to_string(),
    );
}

/// Aktualisiert den Endpunkt der Vorschau (auf die Ebene des Modus beschränkt).
pub fn update_drag(state: &mut AppState, end: DVec3) {
    if !end.is_finite() {
        log::warn!("{}", PathError::NonFinite("extend drag end"));
        return;
    }
    if let Some(drag) = state.editor.extend_drag.as_mut() {
        drag.end = constrain_drag_end(drag.start, end, drag.mode);
    }
}

/// Schließt den Drag ab und hängt die Zwischenpunkte an (ein Undo-Schritt).
pub fn finish_drag(state: &mut AppState, min_spacing: f64) {
    let Some(drag) = state.editor.extend_drag.take() else {
        log::debug!("Drag-Verlängerung abschließen: kein aktiver Drag");
        return;
    };

    let points = match interpolate_segment(drag.start, drag.end, min_spacing) {
        Ok(points) => points,
        Err(e) => {
            log::warn!("Drag-Verlängerung verworfen: {}", e);
            return;
        }
    };
    if points.is_empty() {
        log::debug!("Drag-Verlängerung ohne Länge verworfen");
        return;
    }

    state.record_undo_snapshot();
    state.editor.abort_drags();
    let path = state.path_mut();
    for position in &points {
        if let Err(e) = path.append(Waypoint::new(*position)) {
            log::warn!("Zwischenpunkt verworfen: {}", e);
        }
    }
    log::info!("Pfad um {} Wegpunkte verlängert", points.len());
}

/// Bricht den Drag ohne Änderung ab.
pub fn cancel_drag(state: &mut AppState) {
    if state.editor.extend_drag.take().is_some() {
        state.ui.set_status("Path extension cancelled.".to_string());
    }
}

fn push_waypoint(state: &mut AppState, waypoint: Waypoint) {
    if let Err(e) = waypoint.validate() {
        log::warn!("Verlängerung verworfen: {}", e);
        return;
    }
    state.record_undo_snapshot();
    state.editor.abort_drags();
    if let Err(e) = state.path_mut().append(waypoint) {
        log::warn!("Verlängerung verworfen: {}", e);
    }
}
