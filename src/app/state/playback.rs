use crate::core::PlaybackCursor;
use crate::shared::options::VEHICLE_HOME_POSITION;
use glam::{DQuat, DVec3};

/// Pose des Fahrzeugs (Position + Lage)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehiclePose {
    pub position: DVec3,
    pub attitude: DQuat,
}

impl VehiclePose {
    /// Ausgangspose nach Start und `Clear`.
    pub fn home() -> Self {
        Self {
            position: VEHICLE_HOME_POSITION,
            attitude: DQuat::IDENTITY,
        }
    }
}

impl Default for VehiclePose {
    fn default() -> Self {
        Self::home()
    }
}

/// Wiedergabe-Zustand
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Aktiver Cursor (None = keine Wiedergabe)
    pub cursor: Option<PlaybackCursor>,
    /// Abspielgeschwindigkeit
    pub speed: f64,
}

impl PlaybackState {
    pub fn new(speed: f64) -> Self {
        Self {
            cursor: None,
            speed,
        }
    }
}

/// Aufzeichnungs-Zustand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordingState {
    /// Aufzeichnung aktiv
    pub active: bool,
}
