//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::constrain_delta;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SaveRequested => vec![AppCommand::SavePath],
        AppIntent::LoadRequested { bytes } => vec![AppCommand::LoadPath { bytes }],
        AppIntent::ClearRequested => vec![AppCommand::ClearPath],

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        AppIntent::SelectPoint { index } => vec![AppCommand::SelectWaypoint { index }],
        AppIntent::SelectNextPoint => vec![AppCommand::CycleSelection { forward: true }],
        AppIntent::SelectPreviousPoint => vec![AppCommand::CycleSelection { forward: false }],
        AppIntent::CheckboxToggled { index } => vec![AppCommand::ToggleChecked { index }],

        AppIntent::BeginDrag { index } => vec![
            AppCommand::SelectWaypoint { index: Some(index) },
            AppCommand::BeginProportionalDrag { index },
        ],
        AppIntent::DragTo { delta } => vec![AppCommand::UpdateProportionalMove {
            delta: constrain_delta(delta, state.editor.constraint),
        }],
        AppIntent::RotateDragTo { delta } => {
            vec![AppCommand::UpdateProportionalRotate { delta }]
        }
        AppIntent::EndDrag => vec![AppCommand::EndProportionalDrag],
        AppIntent::FalloffChanged { radius } => vec![AppCommand::SetFalloff { radius }],
        AppIntent::EditConstraintChanged { constraint } => {
            vec![AppCommand::SetEditConstraint { constraint }]
        }
        AppIntent::GizmoModeChanged { mode } => vec![AppCommand::SetGizmoMode { mode }],

        AppIntent::DeleteIndices { indices } => vec![AppCommand::DeleteWaypoints { indices }],
        AppIntent::DeleteCheckedRequested => vec![AppCommand::DeleteCheckedWaypoints],
        AppIntent::WaypointPositionEdited { index, position } => {
            vec![AppCommand::SetWaypointPosition { index, position }]
        }

        AppIntent::RotationPreviewStarted => vec![AppCommand::BeginRotationPreview],
        AppIntent::RotationSliderChanged { axis, degrees } => {
            vec![AppCommand::SetRotationAngle { axis, degrees }]
        }
        AppIntent::RotationStepRequested {
            axis,
            delta_degrees,
        } => vec![AppCommand::StepRotationAngle {
            axis,
            delta_degrees,
        }],
        AppIntent::RotationOriginSelected { index } => {
            vec![AppCommand::SetRotationOrigin { index }]
        }
        AppIntent::RotationApplyRequested => vec![AppCommand::ApplyRotation],
        AppIntent::RotationCancelRequested => vec![AppCommand::CancelRotation],

        AppIntent::ExtendVerticalRequested { upward } => {
            let step = state.options.extend_step;
            vec![AppCommand::ExtendVertical {
                delta: if upward { step } else { -step },
            }]
        }
        AppIntent::ExtendForwardRequested {
            forward,
            view_direction,
        } => {
            let step = state.options.extend_step;
            vec![AppCommand::ExtendForward {
                delta: if forward { step } else { -step },
                direction_hint: view_direction,
            }]
        }
        AppIntent::ExtendDragStarted { mode } => vec![AppCommand::BeginExtendDrag { mode }],
        AppIntent::ExtendDragMoved { end } => vec![AppCommand::UpdateExtendDrag { end }],
        AppIntent::ExtendDragFinished => vec![AppCommand::FinishExtendDrag {
            min_spacing: state.options.extend_min_spacing,
        }],
        AppIntent::ExtendDragCancelled => vec![AppCommand::CancelExtendDrag],

        AppIntent::BeginRecording => vec![AppCommand::StartRecording],
        AppIntent::RecordPoint {
            position,
            orientation,
        } => vec![AppCommand::RecordWaypoint {
            position,
            orientation,
            threshold: state.options.waypoint_min_distance,
        }],
        AppIntent::StopRecording => vec![AppCommand::StopRecording],
        AppIntent::ResumeRecordingFrom { index } => {
            vec![AppCommand::ResumeRecordingFrom { index }]
        }

        AppIntent::PlayRequested { reversed } => match state.playback.cursor {
            None => vec![AppCommand::StartPlayback { reversed }],
            Some(cursor) if cursor.reversed == reversed => vec![AppCommand::TogglePlaybackPause],
            Some(_) => vec![AppCommand::SetPlaybackDirection { reversed }],
        },
        AppIntent::StopPlaybackRequested => vec![AppCommand::StopPlayback],
        AppIntent::PlaybackTick { dt } => vec![AppCommand::AdvancePlayback { dt }],
        AppIntent::PlaybackSpeedChanged { speed } => vec![AppCommand::SetPlaybackSpeed { speed }],

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}
