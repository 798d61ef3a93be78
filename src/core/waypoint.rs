//! Wegpunkt mit Position und optionaler lokaler Orientierung.

use super::PathError;
use glam::{DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

/// Intrinsische Euler-Orientierung (Reihenfolge XYZ, Radiant).
///
/// `roll` = Drehung um X, `pitch` = um Y, `yaw` = um Z.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Orientation {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl Orientation {
    /// Nullorientierung (Identität)
    pub const IDENTITY: Self = Self {
        roll: 0.0,
        pitch: 0.0,
        yaw: 0.0,
    };

    /// Erstellt eine Orientierung aus Roll/Pitch/Yaw in Radiant.
    pub fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }
    }

    /// Quaternion dieser Orientierung.
    pub fn to_quat(self) -> DQuat {
        DQuat::from_euler(EulerRot::XYZ, self.roll, self.pitch, self.yaw)
    }

    /// Zerlegt ein Quaternion zurück in Euler-Winkel (XYZ).
    pub fn from_quat(q: DQuat) -> Self {
        let (roll, pitch, yaw) = q.normalize().to_euler(EulerRot::XYZ);
        Self { roll, pitch, yaw }
    }

    /// Prüft, ob alle drei Winkel endlich sind.
    pub fn is_finite(self) -> bool {
        self.roll.is_finite() && self.pitch.is_finite() && self.yaw.is_finite()
    }
}

/// Ein Punkt des Pfades.
///
/// `orientation` fehlt bei Punkten ohne Lage-Information (z.B. per Drag
/// erzeugte Zwischenpunkte). Sie ist immer lokal, also unabhängig von einer
/// noch nicht angewendeten globalen Pfad-Rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Weltposition
    pub position: DVec3,
    /// Lokale Orientierung (optional)
    pub orientation: Option<Orientation>,
}

impl Waypoint {
    /// Wegpunkt ohne Orientierung
    pub fn new(position: DVec3) -> Self {
        Self {
            position,
            orientation: None,
        }
    }

    /// Wegpunkt mit Orientierung
    pub fn with_orientation(position: DVec3, orientation: Orientation) -> Self {
        Self {
            position,
            orientation: Some(orientation),
        }
    }

    /// Lokales Quaternion; fehlende Orientierung entspricht der Identität.
    pub fn local_quat(&self) -> DQuat {
        self.orientation.map_or(DQuat::IDENTITY, Orientation::to_quat)
    }

    /// Lehnt NaN/Unendlich in Position oder Orientierung ab.
    pub fn validate(&self) -> Result<(), PathError> {
        if !self.position.is_finite() {
            return Err(PathError::NonFinite("waypoint position"));
        }
        if let Some(o) = self.orientation {
            if !o.is_finite() {
                return Err(PathError::NonFinite("waypoint orientation"));
            }
        }
        Ok(())
    }
}
