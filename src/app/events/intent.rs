use crate::app::GizmoMode;
use crate::core::{EditConstraint, ExtendMode, Orientation, RotationAxis};
use crate::shared::EditorOptions;
use glam::{DQuat, DVec3};

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // === Datei ===
    /// Pfad als JSON exportieren (Ergebnis in `UiState::export_buffer`)
    SaveRequested,
    /// Pfad aus JSON-Bytes laden
    LoadRequested { bytes: Vec<u8> },
    /// Pfad, History und Fahrzeug zurücksetzen
    ClearRequested,

    // === History ===
    UndoRequested,
    RedoRequested,

    // === Selektion ===
    /// Wegpunkt selektieren (None = Selektion aufheben)
    SelectPoint { index: Option<usize> },
    SelectNextPoint,
    SelectPreviousPoint,
    /// Lösch-Markierung (Checkbox) eines Wegpunkts umschalten
    CheckboxToggled { index: usize },

    // === Proportionales Editieren ===
    /// Gizmo-Drag am Wegpunkt beginnt
    BeginDrag { index: usize },
    /// Gesamt-Verschiebung seit Drag-Beginn
    DragTo { delta: DVec3 },
    /// Gesamt-Drehung (Weltraum) seit Drag-Beginn
    RotateDragTo { delta: DQuat },
    EndDrag,
    FalloffChanged { radius: f64 },
    EditConstraintChanged { constraint: EditConstraint },
    GizmoModeChanged { mode: GizmoMode },

    // === Löschen / direktes Editieren ===
    DeleteIndices { indices: Vec<usize> },
    /// Alle markierten Wegpunkte löschen
    DeleteCheckedRequested,
    /// Koordinateneingabe im Wegpunkt-Panel
    WaypointPositionEdited { index: usize, position: DVec3 },

    // === Globale Rotation ===
    RotationPreviewStarted,
    /// Slider: absoluter Winkel in Grad
    RotationSliderChanged { axis: RotationAxis, degrees: f64 },
    /// Schrittbutton: relativer Winkel in Grad
    RotationStepRequested { axis: RotationAxis, delta_degrees: f64 },
    /// Drehpunkt wählen (None = Schwerpunkt)
    RotationOriginSelected { index: Option<usize> },
    RotationApplyRequested,
    RotationCancelRequested,

    // === Verlängerung ===
    /// Letzten Punkt nach oben (`true`) bzw. unten kopieren
    ExtendVerticalRequested { upward: bool },
    /// Letzten Punkt vorwärts (`true`) bzw. rückwärts kopieren, entlang der Blickrichtung
    ExtendForwardRequested { forward: bool, view_direction: DVec3 },
    ExtendDragStarted { mode: ExtendMode },
    ExtendDragMoved { end: DVec3 },
    ExtendDragFinished,
    ExtendDragCancelled,

    // === Aufzeichnung ===
    BeginRecording,
    /// Neue Fahrzeugpose während der Aufzeichnung
    RecordPoint {
        position: DVec3,
        orientation: Option<Orientation>,
    },
    StopRecording,
    /// Ab Wegpunkt weiter aufzeichnen (Rest wird verworfen)
    ResumeRecordingFrom { index: usize },

    // === Wiedergabe ===
    /// Play-Button (vorwärts oder rückwärts)
    PlayRequested { reversed: bool },
    StopPlaybackRequested,
    /// Frame-Tick mit vergangener Zeit in Sekunden
    PlaybackTick { dt: f64 },
    PlaybackSpeedChanged { speed: f64 },

    // === Optionen ===
    OptionsChanged { options: Box<EditorOptions> },
}
