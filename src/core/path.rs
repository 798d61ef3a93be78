//! Die zentrale Pfad-Datenstruktur: geordnete Liste von Wegpunkten.

use super::{PathError, Waypoint};
use glam::DVec3;

/// Geordneter Wegpunkt-Pfad.
///
/// Die Reihenfolge ist fachlich relevant: sie bestimmt Kurvenparameter,
/// Abspielreihenfolge und Nachbarschaft. Der Pfad ist die einzige Quelle
/// der Wahrheit; Darstellungen werden daraus abgeleitet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WaypointPath {
    waypoints: Vec<Waypoint>,
}

impl WaypointPath {
    /// Erstellt einen leeren Pfad
    pub fn new() -> Self {
        Self {
            waypoints: Vec::new(),
        }
    }

    /// Erstellt einen Pfad aus einer Wegpunktliste (alle Punkte werden validiert).
    pub fn from_waypoints(waypoints: Vec<Waypoint>) -> Result<Self, PathError> {
        for wp in &waypoints {
            wp.validate()?;
        }
        Ok(Self { waypoints })
    }

    /// Alle Wegpunkte in Pfadreihenfolge
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Ersetzt den kompletten Inhalt (Undo/Redo, Laden, Leeren).
    pub fn set(&mut self, waypoints: Vec<Waypoint>) {
        self.waypoints = waypoints;
    }

    /// Hängt einen Wegpunkt an. Nicht-endliche Werte werden abgelehnt.
    pub fn append(&mut self, waypoint: Waypoint) -> Result<(), PathError> {
        waypoint.validate()?;
        self.waypoints.push(waypoint);
        Ok(())
    }

    /// Entfernt mehrere Wegpunkte auf einmal.
    ///
    /// Indizes werden absteigend abgearbeitet, damit frühere Löschungen die
    /// späteren nicht verschieben. Ungültige und doppelte Indizes werden
    /// ignoriert. Gibt die Anzahl tatsächlich entfernter Punkte zurück.
    pub fn remove_at<I>(&mut self, indices: I) -> usize
    where
        I: IntoIterator<Item = usize>,
    {
        let len = self.waypoints.len();
        let mut sorted: Vec<usize> = indices.into_iter().filter(|&i| i < len).collect();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.dedup();

        for &index in &sorted {
            self.waypoints.remove(index);
        }
        sorted.len()
    }

    /// Wegpunkt an Index `index`
    pub fn waypoint_at(&self, index: usize) -> Result<&Waypoint, PathError> {
        self.waypoints.get(index).ok_or(PathError::IndexOutOfRange {
            index,
            len: self.waypoints.len(),
        })
    }

    /// Mutable Referenz auf einen Wegpunkt
    pub fn waypoint_at_mut(&mut self, index: usize) -> Result<&mut Waypoint, PathError> {
        let len = self.waypoints.len();
        self.waypoints
            .get_mut(index)
            .ok_or(PathError::IndexOutOfRange { index, len })
    }

    /// Anzahl der Wegpunkte
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Gibt `true` zurück, wenn der Pfad keine Wegpunkte enthält.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Letzter Wegpunkt (Anker für Aufnahme und Verlängerung)
    pub fn last(&self) -> Option<&Waypoint> {
        self.waypoints.last()
    }

    /// Nur die Positionen, in Pfadreihenfolge
    pub fn positions(&self) -> Vec<DVec3> {
        self.waypoints.iter().map(|wp| wp.position).collect()
    }

    /// Mittelwert aller Positionen (None bei leerem Pfad)
    pub fn centroid(&self) -> Option<DVec3> {
        if self.waypoints.is_empty() {
            return None;
        }
        let sum: DVec3 = self.waypoints.iter().map(|wp| wp.position).sum();
        Some(sum / self.waypoints.len() as f64)
    }

    /// Behält nur die Wegpunkte `0..=index` (Aufnahme ab Wegpunkt fortsetzen).
    pub fn truncate_after(&mut self, index: usize) -> Result<(), PathError> {
        if index >= self.waypoints.len() {
            return Err(PathError::IndexOutOfRange {
                index,
                len: self.waypoints.len(),
            });
        }
        self.waypoints.truncate(index + 1);
        Ok(())
    }

    /// Entfernt alle Wegpunkte
    pub fn clear(&mut self) {
        self.waypoints.clear();
    }
}
