use crate::core::{EditConstraint, ExtendMode, WaypointPath};
use glam::DVec3;
use std::sync::Arc;

/// Modus des Transform-Gizmos am selektierten Wegpunkt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GizmoMode {
    /// Verschieben mit Falloff
    #[default]
    Translate,
    /// Drehen mit Falloff
    Rotate,
}

/// Laufender Drag am Gizmo.
///
/// `original` ist der beim Drag-Start eingefrorene Pfad; jedes Update
/// rechnet von hier aus mit dem Gesamt-Delta.
#[derive(Debug, Clone)]
pub struct DragSession {
    /// Gezogener Wegpunkt
    pub index: usize,
    /// Pfad zum Drag-Beginn (Arc-Klon, O(1))
    pub original: Arc<WaypointPath>,
}

/// Laufender Verlängerungs-Drag ab dem letzten Wegpunkt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtendDrag {
    pub start: DVec3,
    /// Bereits auf die Ebene des Modus beschränkter Endpunkt
    pub end: DVec3,
    pub mode: ExtendMode,
}

/// Zustand der Editier-Werkzeuge
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Falloff-Radius für proportionales Editieren
    pub falloff: f64,
    /// Achsbeschränkung für Verschiebe-Drags
    pub constraint: EditConstraint,
    pub gizmo_mode: GizmoMode,
    /// Aktiver Gizmo-Drag
    pub drag: Option<DragSession>,
    /// Aktiver Verlängerungs-Drag
    pub extend_drag: Option<ExtendDrag>,
}

impl EditorState {
    /// Erstellt den Standard-Editorzustand mit gegebenem Falloff.
    pub fn new(falloff: f64) -> Self {
        Self {
            falloff,
            constraint: EditConstraint::Free,
            gizmo_mode: GizmoMode::Translate,
            drag: None,
            extend_drag: None,
        }
    }

    /// Beendet alle laufenden Drags ohne Wirkung.
    pub fn abort_drags(&mut self) {
        self.drag = None;
        self.extend_drag = None;
    }
}
