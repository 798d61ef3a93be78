use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::{CurveSample, PlaybackCurve, RotationEngine, Waypoint, WaypointPath};
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::{EditorState, PlaybackState, RecordingState, SelectionState, UiState, VehiclePose};

/// Verfügbarkeit von Undo/Redo für die Buttons der UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryAvailability {
    pub can_undo: bool,
    pub can_redo: bool,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kanonischer Pfad (ohne ausstehende Rotation); Arc für O(1)-Snapshots
    pub path: Arc<WaypointPath>,
    /// Ausstehende globale Rotation
    pub rotation: RotationEngine,
    /// Selektion und Lösch-Markierungen
    pub selection: SelectionState,
    /// Editier-Werkzeuge und laufende Drags
    pub editor: EditorState,
    pub recording: RecordingState,
    pub playback: PlaybackState,
    /// Fahrzeug-Pose (Aufzeichnung, Wiedergabe)
    pub vehicle: VehiclePose,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standardoptionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            path: Arc::new(WaypointPath::new()),
            rotation: RotationEngine::new(),
            selection: SelectionState::new(),
            editor: EditorState::new(options.edit_falloff),
            recording: RecordingState::default(),
            playback: PlaybackState::new(options.playback_speed),
            vehicle: VehiclePose::home(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_depth),
            options,
        }
    }

    /// Anzahl der Wegpunkte (für UI-Anzeige)
    pub fn waypoint_count(&self) -> usize {
        self.path.len()
    }

    /// Mutable Referenz auf den Pfad (CoW: klont nur, wenn ein Snapshot ihn teilt).
    #[inline]
    pub fn path_mut(&mut self) -> &mut WaypointPath {
        Arc::make_mut(&mut self.path)
    }

    /// Ersetzt den Pfad komplett durch eine fertig berechnete Wegpunktliste.
    ///
    /// Ein von Snapshots geteilter Pfad wird dabei nicht geklont.
    pub fn replace_waypoints(&mut self, waypoints: Vec<Waypoint>) {
        let mut path = WaypointPath::new();
        path.set(waypoints);
        self.path = Arc::new(path);
    }

    /// Pfad wie angezeigt, inklusive ausstehender Rotation.
    pub fn display_path(&self) -> Vec<Waypoint> {
        self.rotation.display_waypoints(&self.path)
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Undo/Redo-Verfügbarkeit
    pub fn history_available(&self) -> HistoryAvailability {
        HistoryAvailability {
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        }
    }

    /// Playback-Kurve durch den angezeigten Pfad (None bei < 2 Punkten).
    pub fn playback_curve(&self) -> Option<PlaybackCurve> {
        let positions: Vec<_> = self.display_path().iter().map(|wp| wp.position).collect();
        PlaybackCurve::build(&positions)
    }

    /// Kurvenstelle bei normiertem Parameter `t`.
    pub fn playback_sample(&self, t: f64) -> Option<CurveSample> {
        self.playback_curve().map(|curve| curve.sample_at(t))
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
