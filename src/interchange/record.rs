use serde::{Deserialize, Serialize};

/// Ein Wegpunkt im JSON-Austauschformat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaypointRecord {
    /// Anzeigename (`waypoint<i>`)
    #[serde(rename = "Name", alias = "name", default)]
    pub name: String,
    pub pose_x: f64,
    pub pose_y: f64,
    pub pose_z: f64,
    #[serde(default)]
    pub roll: f64,
    #[serde(default)]
    pub pitch: f64,
    #[serde(default)]
    pub yaw: f64,
    #[serde(default)]
    pub wait_time: f64,
    #[serde(default)]
    pub speed: f64,
}
