//! Darstellungs-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und externe Darstellungen sie
//! konsumieren. Die Szene ist eine Einweg-Projektion: Änderungen an ihr
//! fließen nie in den Pfad zurück.

use glam::{DQuat, DVec3};

/// Ein Wegpunkt wie angezeigt (inklusive ausstehender Rotation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneWaypoint {
    pub position: DVec3,
    /// Angezeigte Lage (`q_global * q_local`), fehlende Orientierung als Identität
    pub attitude: DQuat,
    /// Lokale Orientierung vorhanden
    pub has_orientation: bool,
    pub selected: bool,
    /// Zum Löschen markiert
    pub checked: bool,
}

/// Read-only Daten für einen Darstellungs-Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PathScene {
    pub waypoints: Vec<SceneWaypoint>,
    /// Abgetastete Playback-Kurve (leer bei < 2 Wegpunkten)
    pub curve_points: Vec<DVec3>,
    /// Aufgelöster Drehpunkt der ausstehenden Rotation
    pub rotation_origin: Option<DVec3>,
    /// Vorschau-Segment eines laufenden Verlängerungs-Drags
    pub extend_preview: Option<(DVec3, DVec3)>,
    /// Falloff-Radius um den selektierten Punkt
    pub falloff: f64,
    pub vehicle_position: DVec3,
    pub vehicle_attitude: DQuat,
}

impl PathScene {
    /// Gibt zurück, ob Wegpunkte vorhanden sind.
    pub fn has_path(&self) -> bool {
        !self.waypoints.is_empty()
    }
}
