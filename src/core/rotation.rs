//! Starre Rotation des gesamten Pfades um einen wählbaren Ursprung.
//!
//! Die Rotation bleibt so lange eine ausstehende Vorschau, bis sie explizit
//! eingebacken wird. Die kanonischen Positionen ändern sich erst beim Backen.

use super::{Orientation, PathError, Waypoint, WaypointPath};
use glam::{DQuat, DVec3, EulerRot};

/// Rotationsachse für Slider und Schrittbuttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAxis {
    X,
    Y,
    Z,
}

/// Globale Pfad-Rotation als Euler-Tripel (Radiant, XYZ intrinsisch).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlobalRotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl GlobalRotation {
    /// Keine Rotation
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Erstellt eine Rotation aus Winkeln in Grad.
    pub fn from_degrees(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: x.to_radians(),
            y: y.to_radians(),
            z: z.to_radians(),
        }
    }

    /// Quaternion der Rotation
    pub fn to_quat(self) -> DQuat {
        DQuat::from_euler(EulerRot::XYZ, self.x, self.y, self.z)
    }

    /// Gibt `true` zurück, wenn alle Winkel 0 sind.
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Winkel einer Achse in Grad
    pub fn degrees(self, axis: RotationAxis) -> f64 {
        self.radians(axis).to_degrees()
    }

    fn radians(self, axis: RotationAxis) -> f64 {
        match axis {
            RotationAxis::X => self.x,
            RotationAxis::Y => self.y,
            RotationAxis::Z => self.z,
        }
    }

    fn set_radians(&mut self, axis: RotationAxis, value: f64) {
        match axis {
            RotationAxis::X => self.x = value,
            RotationAxis::Y => self.y = value,
            RotationAxis::Z => self.z = value,
        }
    }
}

/// Drehpunkt der globalen Rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationOrigin {
    /// Position eines Wegpunkts; außerhalb des Pfades wird der Schwerpunkt genutzt
    Waypoint(usize),
    /// Schwerpunkt aller Wegpunkte
    Centroid,
}

impl Default for RotationOrigin {
    fn default() -> Self {
        Self::Waypoint(0)
    }
}

impl RotationOrigin {
    /// Löst den Ursprung gegen den aktuellen Pfad auf (leerer Pfad: Nullpunkt).
    pub fn resolve(self, path: &WaypointPath) -> DVec3 {
        if let Self::Waypoint(index) = self {
            if let Ok(wp) = path.waypoint_at(index) {
                return wp.position;
            }
        }
        path.centroid().unwrap_or(DVec3::ZERO)
    }
}

/// Rotiert alle Wegpunkte um `origin`: Positionen um den Ursprung,
/// Orientierungen als `q_global * q_local` (Weltraum nach lokaler Lage).
pub fn rotate_waypoints(waypoints: &[Waypoint], q_global: DQuat, origin: DVec3) -> Vec<Waypoint> {
    waypoints
        .iter()
        .map(|wp| Waypoint {
            position: q_global * (wp.position - origin) + origin,
            orientation: wp
                .orientation
                .map(|o| Orientation::from_quat(q_global * o.to_quat())),
        })
        .collect()
}

/// Zustand der Rotations-Vorschau
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationPhase {
    #[default]
    Idle,
    Previewing,
}

/// Rotations-Engine: hält die ausstehende Rotation und den Drehpunkt.
#[derive(Debug, Clone, Default)]
pub struct RotationEngine {
    phase: RotationPhase,
    rotation: GlobalRotation,
    origin: RotationOrigin,
}

impl RotationEngine {
    /// Erstellt eine Engine ohne Rotation (Drehpunkt: erster Wegpunkt).
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktuelle Phase
    pub fn phase(&self) -> RotationPhase {
        self.phase
    }

    /// Ausstehende Rotation
    pub fn rotation(&self) -> GlobalRotation {
        self.rotation
    }

    /// Gewählter Drehpunkt
    pub fn origin(&self) -> RotationOrigin {
        self.origin
    }

    /// Startet die Vorschau; die aktuelle Rotation bleibt als Ausgangswert erhalten.
    pub fn begin_preview(&mut self) {
        self.phase = RotationPhase::Previewing;
    }

    /// Setzt den Winkel einer Achse absolut (Grad).
    pub fn set_axis_angle(&mut self, axis: RotationAxis, degrees: f64) -> Result<(), PathError> {
        if !degrees.is_finite() {
            return Err(PathError::NonFinite("rotation angle"));
        }
        self.rotation.set_radians(axis, degrees.to_radians());
        self.phase = RotationPhase::Previewing;
        Ok(())
    }

    /// Verändert den Winkel einer Achse relativ (Grad).
    pub fn increment_axis_angle(
        &mut self,
        axis: RotationAxis,
        delta_degrees: f64,
    ) -> Result<(), PathError> {
        let current = self.rotation.degrees(axis);
        self.set_axis_angle(axis, current + delta_degrees)
    }

    /// Setzt den Drehpunkt auf einen Wegpunkt-Index (oder Schwerpunkt bei `None`).
    pub fn set_origin(&mut self, index: Option<usize>) {
        self.origin = index.map_or(RotationOrigin::Centroid, RotationOrigin::Waypoint);
    }

    /// Pfad wie angezeigt, inklusive ausstehender Rotation.
    pub fn display_waypoints(&self, path: &WaypointPath) -> Vec<Waypoint> {
        if self.rotation.is_zero() {
            return path.waypoints().to_vec();
        }
        rotate_waypoints(
            path.waypoints(),
            self.rotation.to_quat(),
            self.origin.resolve(path),
        )
    }

    /// Backt die Rotation in eine neue Wegpunktliste und setzt sie zurück.
    ///
    /// Der Aufrufer übernimmt die Liste in den Pfad (nach Undo-Snapshot).
    pub fn bake(&mut self, path: &WaypointPath) -> Vec<Waypoint> {
        let baked = self.display_waypoints(path);
        self.reset();
        baked
    }

    /// Verwirft die Vorschau ohne den Pfad anzufassen.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.rotation = GlobalRotation::ZERO;
        self.phase = RotationPhase::Idle;
    }
}
