//! Writer für das JSON-Austauschformat.

use super::WaypointRecord;
use crate::core::{GlobalRotation, Orientation, PathError, WaypointPath};
use glam::DVec3;

/// Wandelt den Pfad in Export-Records um.
///
/// Eine ausstehende globale Rotation wird um den Schwerpunkt des
/// unrotierten Pfades eingebacken; der Pfad selbst bleibt unverändert.
/// Fehlende lokale Orientierungen gelten als Identität.
pub fn write_records(
    path: &WaypointPath,
    rotation: GlobalRotation,
    wait_time: f64,
    speed: f64,
) -> Vec<WaypointRecord> {
    let q_global = rotation.to_quat();
    let origin = path.centroid().unwrap_or(DVec3::ZERO);

    path.waypoints()
        .iter()
        .enumerate()
        .map(|(i, wp)| {
            let position = q_global * (wp.position - origin) + origin;
            let orientation = Orientation::from_quat(q_global * wp.local_quat());
            WaypointRecord {
                name: format!("waypoint{}", i),
                pose_x: position.x,
                pose_y: position.y,
                pose_z: position.z,
                roll: orientation.roll,
                pitch: orientation.pitch,
                yaw: orientation.yaw,
                wait_time,
                speed,
            }
        })
        .collect()
}

/// Serialisiert den Pfad als formatiertes JSON.
pub fn write_waypoints_json(
    path: &WaypointPath,
    rotation: GlobalRotation,
    wait_time: f64,
    speed: f64,
) -> Result<Vec<u8>, PathError> {
    let records = write_records(path, rotation, wait_time, speed);
    serde_json::to_vec_pretty(&records).map_err(|e| PathError::InvalidFormat(e.to_string()))
}
