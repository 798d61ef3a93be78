use crate::app::GizmoMode;
use crate::core::{EditConstraint, ExtendMode, Orientation, RotationAxis};
use crate::shared::EditorOptions;
use glam::{DQuat, DVec3};

/// App-Commands: mutierende Operationen auf dem AppState.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Datei ===
    SavePath,
    LoadPath { bytes: Vec<u8> },
    ClearPath,

    // === History ===
    Undo,
    Redo,

    // === Selektion ===
    SelectWaypoint { index: Option<usize> },
    CycleSelection { forward: bool },
    ToggleChecked { index: usize },

    // === Proportionales Editieren ===
    BeginProportionalDrag { index: usize },
    UpdateProportionalMove { delta: DVec3 },
    UpdateProportionalRotate { delta: DQuat },
    EndProportionalDrag,
    SetFalloff { radius: f64 },
    SetEditConstraint { constraint: EditConstraint },
    SetGizmoMode { mode: GizmoMode },

    // === Löschen / direktes Editieren ===
    DeleteWaypoints { indices: Vec<usize> },
    DeleteCheckedWaypoints,
    SetWaypointPosition { index: usize, position: DVec3 },

    // === Globale Rotation ===
    BeginRotationPreview,
    SetRotationAngle { axis: RotationAxis, degrees: f64 },
    StepRotationAngle { axis: RotationAxis, delta_degrees: f64 },
    SetRotationOrigin { index: Option<usize> },
    ApplyRotation,
    CancelRotation,

    // === Verlängerung ===
    ExtendVertical { delta: f64 },
    ExtendForward { delta: f64, direction_hint: DVec3 },
    BeginExtendDrag { mode: ExtendMode },
    UpdateExtendDrag { end: DVec3 },
    FinishExtendDrag { min_spacing: f64 },
    CancelExtendDrag,

    // === Aufzeichnung ===
    StartRecording,
    RecordWaypoint {
        position: DVec3,
        orientation: Option<Orientation>,
        threshold: f64,
    },
    StopRecording,
    ResumeRecordingFrom { index: usize },

    // === Wiedergabe ===
    StartPlayback { reversed: bool },
    TogglePlaybackPause,
    SetPlaybackDirection { reversed: bool },
    StopPlayback,
    AdvancePlayback { dt: f64 },
    SetPlaybackSpeed { speed: f64 },

    // === Optionen ===
    ApplyOptions { options: Box<EditorOptions> },
}
