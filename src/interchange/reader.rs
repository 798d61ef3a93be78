//! Parser für das JSON-Austauschformat.
//!
//! Akzeptiert neben dem Record-Format zwei ältere Formen ohne Orientierung:
//! `{"path": [[x, y, z], …]}` und ein nacktes `[[x, y, z], …]`.

use super::WaypointRecord;
use crate::core::{Orientation, PathError, Waypoint};
use glam::DVec3;
use serde_json::Value;

/// Liest Wegpunkte aus JSON-Bytes.
///
/// Bei unbekannter Form oder ungültigen Werten wird nichts zurückgegeben,
/// auch kein Teilergebnis.
pub fn read_waypoints(bytes: &[u8]) -> Result<Vec<Waypoint>, PathError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| PathError::InvalidFormat(e.to_string()))?;

    let waypoints = match &value {
        Value::Array(items) => match items.first() {
            Some(Value::Object(first)) if first.contains_key("pose_x") => read_records(value)?,
            Some(Value::Array(_)) => read_triples(value)?,
            Some(_) => return Err(invalid("unrecognized waypoint entry")),
            None => return Err(invalid("empty waypoint array")),
        },
        Value::Object(map) => match map.get("path") {
            Some(path @ Value::Array(_)) => read_triples(path.clone())?,
            _ => return Err(invalid("object without `path` array")),
        },
        _ => return Err(invalid("expected array or object")),
    };

    for wp in &waypoints {
        wp.validate()?;
    }
    Ok(waypoints)
}

fn invalid(reason: &str) -> PathError {
    PathError::InvalidFormat(reason.to_string())
}

fn read_records(value: Value) -> Result<Vec<Waypoint>, PathError> {
    let records: Vec<WaypointRecord> =
        serde_json::from_value(value).map_err(|e| PathError::InvalidFormat(e.to_string()))?;
    log::debug!("{} Waypoint-Records gelesen", records.len());

    Ok(records
        .into_iter()
        .map(|r| {
            Waypoint::with_orientation(
                DVec3::new(r.pose_x, r.pose_y, r.pose_z),
                Orientation::new(r.roll, r.pitch, r.yaw),
            )
        })
        .collect())
}

fn read_triples(value: Value) -> Result<Vec<Waypoint>, PathError> {
    let triples: Vec<[f64; 3]> =
        serde_json::from_value(value).map_err(|e| PathError::InvalidFormat(e.to_string()))?;
    log::debug!("{} Positionen im Legacy-Format gelesen", triples.len());

    Ok(triples
        .into_iter()
        .map(|p| Waypoint::new(DVec3::from_array(p)))
        .collect())
}
