//! Builder für Darstellungs-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::RotationPhase;
use crate::shared::{PathScene, SceneWaypoint};

/// Abtastpunkte der Kurve je Wegpunkt.
const CURVE_SAMPLES_PER_WAYPOINT: usize = 10;

/// Baut eine PathScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> PathScene {
    let display = state.display_path();

    let waypoints = display
        .iter()
        .enumerate()
        .map(|(i, wp)| SceneWaypoint {
            position: wp.position,
            attitude: wp.local_quat(),
            has_orientation: wp.orientation.is_some(),
            selected: state.selection.selected == Some(i),
            checked: state.selection.checked.contains(&i),
        })
        .collect();

    let curve_points = state
        .playback_curve()
        .map(|curve| curve.sample_points(display.len() * CURVE_SAMPLES_PER_WAYPOINT))
        .unwrap_or_default();

    let rotation_origin = (state.rotation.phase() == RotationPhase::Previewing
        && !state.path.is_empty())
    .then(|| state.rotation.origin().resolve(&state.path));

    PathScene {
        waypoints,
        curve_points,
        rotation_origin,
        extend_preview: state.editor.extend_drag.map(|drag| (drag.start, drag.end)),
        falloff: state.editor.falloff,
        vehicle_position: state.vehicle.position,
        vehicle_attitude: state.vehicle.attitude,
    }
}
