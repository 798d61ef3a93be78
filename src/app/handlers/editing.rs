//! Handler für Gizmo-Drags, Löschen und direkte Koordinateneingabe.

use crate::app::state::GizmoMode;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::EditConstraint;
use glam::{DQuat, DVec3};

/// Startet einen proportionalen Drag.
pub fn begin_drag(state: &mut AppState, index: usize) {
    use_cases::editing::begin_drag(state, index);
}

/// Aktualisiert einen Verschiebe-Drag.
pub fn drag_move(state: &mut AppState, delta: DVec3) {
    use_cases::editing::update_move(state, delta);
}

/// Aktualisiert einen Dreh-Drag.
pub fn drag_rotate(state: &mut AppState, delta: DQuat) {
    use_cases::editing::update_rotate(state, delta);
}

pub fn end_drag(state: &mut AppState) {
    use_cases::editing::end_drag(state);
}

/// Setzt den Falloff-Radius (nicht negativ, endlich).
pub fn set_falloff(state: &mut AppState, radius: f64) {
    if !radius.is_finite() || radius < 0.0 {
        log::warn!("Ungültiger Falloff-Radius {} ignoriert", radius);
        return;
    }
    state.editor.falloff = radius;
}

pub fn set_constraint(state: &mut AppState, constraint: EditConstraint) {
    state.editor.constraint = constraint;
}

pub fn set_gizmo_mode(state: &mut AppState, mode: GizmoMode) {
    state.editor.gizmo_mode = mode;
}

/// Löscht Wegpunkte per Index.
pub fn delete(state: &mut AppState, indices: &[usize]) {
    use_cases::editing::delete_waypoints(state, indices);
}

/// Löscht alle markierten Wegpunkte.
pub fn delete_checked(state: &mut AppState) {
    use_cases::editing::delete_checked_waypoints(state);
}

/// Setzt die Position eines Wegpunkts.
pub fn set_position(state: &mut AppState, index: usize, position: DVec3) {
    use_cases::editing::set_waypoint_position(state, index, position);
}
