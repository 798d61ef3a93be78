use approx::assert_abs_diff_eq;
use glam::DVec3;
use rov_path_planner::{AppCommand, AppController, AppIntent, AppState, EditorOptions, Orientation};

fn run(controller: &mut AppController, state: &mut AppState, intents: Vec<AppIntent>) {
    for intent in intents {
        controller
            .handle_intent(state, intent)
            .expect("Intent sollte ohne Fehler verarbeitet werden");
    }
}

fn pose(x: f64) -> AppIntent {
    AppIntent::RecordPoint {
        position: DVec3::new(x, 6.3, 0.0),
        orientation: Some(Orientation::new(0.0, 0.0, 0.1)),
    }
}

#[test]
fn test_recording_respects_minimum_distance() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::BeginRecording,
            pose(0.0),
            pose(0.1),
            pose(0.25),
            pose(0.3),
            pose(1.0),
            AppIntent::StopRecording,
        ],
    );

    let xs: Vec<f64> = state.path.waypoints().iter().map(|wp| wp.position.x).collect();
    assert_eq!(xs, vec![0.0, 0.25, 1.0]);
    assert!(!state.recording.active);
    assert_eq!(state.ui.status_message.as_deref(), Some("Path recorded."));

    let threshold = state.command_log.entries().iter().find_map(|cmd| match cmd {
        AppCommand::RecordWaypoint { threshold, .. } => Some(*threshold),
        _ => None,
    });
    assert_eq!(threshold, Some(0.2));
}

#[test]
fn test_short_recording_is_discarded() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::BeginRecording, pose(2.0), AppIntent::StopRecording],
    );

    assert!(state.path.is_empty());
    assert_eq!(state.vehicle.position, DVec3::new(0.0, 6.3, 0.0));
    assert_eq!(state.ui.status_message.as_deref(), Some("Path too short, cleared."));
}

#[test]
fn test_resume_recording_truncates_and_continues() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::BeginRecording,
            pose(0.0),
            pose(1.0),
            pose(2.0),
            pose(3.0),
            AppIntent::StopRecording,
        ],
    );

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::ResumeRecordingFrom { index: 1 },
            pose(1.1),
            pose(1.5),
            AppIntent::StopRecording,
        ],
    );

    let xs: Vec<f64> = state.path.waypoints().iter().map(|wp| wp.position.x).collect();
    assert_eq!(xs, vec![0.0, 1.0, 1.5]);

    run(&mut controller, &mut state, vec![AppIntent::UndoRequested]);
    assert_eq!(state.path.len(), 4);
}

#[test]
fn test_playback_runs_to_end_and_finishes() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::LoadRequested {
                bytes: include_bytes!("../fixtures/two_waypoints.json").to_vec(),
            },
            AppIntent::PlaybackSpeedChanged { speed: 2.0 },
            AppIntent::PlayRequested { reversed: false },
        ],
    );
    assert_eq!(state.ui.status_message.as_deref(), Some("Playing path..."));
    assert!(state.vehicle.position.abs_diff_eq(DVec3::ZERO, 1e-9));

    run(&mut controller, &mut state, vec![AppIntent::PlaybackTick { dt: 2.5 }]);
    let cursor = state.playback.cursor.expect("Wiedergabe läuft");
    assert_abs_diff_eq!(cursor.t, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(state.vehicle.position.x, 5.0, epsilon = 0.05);

    run(&mut controller, &mut state, vec![AppIntent::PlaybackTick { dt: 10.0 }]);
    assert!(state.playback.cursor.is_none());
    assert_abs_diff_eq!(state.vehicle.position.x, 10.0, epsilon = 1e-9);
    assert_eq!(state.ui.status_message.as_deref(), Some("Playback finished."));
}

#[test]
fn test_play_button_toggles_pause_and_switches_direction() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::LoadRequested {
                bytes: include_bytes!("../fixtures/two_waypoints.json").to_vec(),
            },
            AppIntent::PlayRequested { reversed: false },
            AppIntent::PlayRequested { reversed: false },
        ],
    );
    assert!(state.playback.cursor.is_some_and(|c| c.paused));
    assert_eq!(state.ui.status_message.as_deref(), Some("Playback paused."));

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::PlayRequested { reversed: true }],
    );
    let cursor = state.playback.cursor.expect("Wiedergabe läuft");
    assert!(cursor.reversed && !cursor.paused);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::SetPlaybackDirection { reversed: true })
    ));

    run(&mut controller, &mut state, vec![AppIntent::StopPlaybackRequested]);
    assert!(state.playback.cursor.is_none());
}

#[test]
fn test_playback_refused_for_single_waypoint() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::LoadRequested {
                bytes: b"[[1.0, 2.0, 3.0]]".to_vec(),
            },
            AppIntent::PlayRequested { reversed: false },
        ],
    );

    assert!(state.playback.cursor.is_none());
    assert_eq!(state.ui.status_message.as_deref(), Some("Path too short for playback."));
}

#[test]
fn test_options_change_updates_tools() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let options = EditorOptions {
        edit_falloff: 3.0,
        extend_step: 1.0,
        waypoint_min_distance: 0.5,
        playback_speed: 4.0,
        ..EditorOptions::default()
    };

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::OptionsChanged {
            options: Box::new(options.clone()),
        }],
    );

    assert_eq!(state.options, options);
    assert_eq!(state.editor.falloff, 3.0);
    assert_eq!(state.playback.speed, 4.0);
}
