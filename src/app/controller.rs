//! Application Controller für zentrale Event-Verarbeitung.

use super::path_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::PathScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Datei ===
            AppCommand::SavePath => handlers::file_io::save(state)?,
            AppCommand::LoadPath { bytes } => handlers::file_io::load(state, &bytes)?,
            AppCommand::ClearPath => handlers::file_io::clear(state),

            // === History ===
            AppCommand::Undo => {
                handlers::history::undo(state);
            }
            AppCommand::Redo => {
                handlers::history::redo(state);
            }

            // === Selektion ===
            AppCommand::SelectWaypoint { index } => handlers::selection::select(state, index),
            AppCommand::CycleSelection { forward } => handlers::selection::cycle(state, forward),
            AppCommand::ToggleChecked { index } => {
                handlers::selection::toggle_checked(state, index)
            }

            // === Proportionales Editieren ===
            AppCommand::BeginProportionalDrag { index } => {
                handlers::editing::begin_drag(state, index)
            }
            AppCommand::UpdateProportionalMove { delta } => {
                handlers::editing::drag_move(state, delta)
            }
            AppCommand::UpdateProportionalRotate { delta } => {
                handlers::editing::drag_rotate(state, delta)
            }
            AppCommand::EndProportionalDrag => handlers::editing::end_drag(state),
            AppCommand::SetFalloff { radius } => handlers::editing::set_falloff(state, radius),
            AppCommand::SetEditConstraint { constraint } => {
                handlers::editing::set_constraint(state, constraint)
            }
            AppCommand::SetGizmoMode { mode } => handlers::editing::set_gizmo_mode(state, mode),

            // === Löschen / direktes Editieren ===
            AppCommand::DeleteWaypoints { indices } => handlers::editing::delete(state, &indices),
            AppCommand::DeleteCheckedWaypoints => handlers::editing::delete_checked(state),
            AppCommand::SetWaypointPosition { index, position } => {
                handlers::editing::set_position(state, index, position)
            }

            // === Globale Rotation ===
            AppCommand::BeginRotationPreview => handlers::rotation::begin_preview(state),
            AppCommand::SetRotationAngle { axis, degrees } => {
                handlers::rotation::set_angle(state, axis, degrees)
            }
            AppCommand::StepRotationAngle {
                axis,
                delta_degrees,
            } => handlers::rotation::step_angle(state, axis, delta_degrees),
            AppCommand::SetRotationOrigin { index } => {
                handlers::rotation::set_origin(state, index)
            }
            AppCommand::ApplyRotation => handlers::rotation::apply(state),
            AppCommand::CancelRotation => handlers::rotation::cancel(state),

            // === Verlängerung ===
            AppCommand::ExtendVertical { delta } => handlers::extension::vertical(state, delta),
            AppCommand::ExtendForward {
                delta,
                direction_hint,
            } => handlers::extension::forward(state, delta, direction_hint),
            AppCommand::BeginExtendDrag { mode } => handlers::extension::begin_drag(state, mode),
            AppCommand::UpdateExtendDrag { end } => handlers::extension::update_drag(state, end),
            AppCommand::FinishExtendDrag { min_spacing } => {
                handlers::extension::finish_drag(state, min_spacing)
            }
            AppCommand::CancelExtendDrag => handlers::extension::cancel_drag(state),

            // === Aufzeichnung ===
            AppCommand::StartRecording => handlers::recording::start(state),
            AppCommand::RecordWaypoint {
                position,
                orientation,
                threshold,
            } => handlers::recording::record(state, position, orientation, threshold),
            AppCommand::StopRecording => handlers::recording::stop(state),
            AppCommand::ResumeRecordingFrom { index } => {
                handlers::recording::resume_from(state, index)
            }

            // === Wiedergabe ===
            AppCommand::StartPlayback { reversed } => handlers::playback::start(state, reversed),
            AppCommand::TogglePlaybackPause => handlers::playback::toggle_pause(state),
            AppCommand::SetPlaybackDirection { reversed } => {
                handlers::playback::set_direction(state, reversed)
            }
            AppCommand::StopPlayback => handlers::playback::stop(state),
            AppCommand::AdvancePlayback { dt } => handlers::playback::advance(state, dt),
            AppCommand::SetPlaybackSpeed { speed } => handlers::playback::set_speed(state, speed),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, *options),
        }

        Ok(())
    }

    /// Baut die Darstellungs-Szene für den aktuellen Frame.
    pub fn build_path_scene(&self, state: &AppState) -> PathScene {
        path_scene::build(state)
    }
}
