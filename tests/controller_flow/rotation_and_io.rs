use approx::assert_abs_diff_eq;
use glam::DVec3;
use rov_path_planner::core::{RotationAxis, RotationPhase};
use rov_path_planner::{AppController, AppIntent, AppState, Orientation, Waypoint};

fn run(controller: &mut AppController, state: &mut AppState, intents: Vec<AppIntent>) {
    for intent in intents {
        controller
            .handle_intent(state, intent)
            .expect("Intent sollte ohne Fehler verarbeitet werden");
    }
}

fn triangle_state() -> AppState {
    let mut state = AppState::new();
    state.replace_waypoints(vec![
        Waypoint::new(DVec3::new(1.0, 2.0, 3.0)),
        Waypoint::new(DVec3::new(4.0, 2.0, 3.0)),
        Waypoint::with_orientation(DVec3::new(1.0, 5.0, -1.0), Orientation::new(0.1, 0.2, 0.3)),
    ]);
    state
}

#[test]
fn test_rotation_preview_is_rigid_about_first_waypoint() {
    let mut controller = AppController::new();
    let mut state = triangle_state();
    let before = state.path.positions();

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::RotationPreviewStarted,
            AppIntent::RotationSliderChanged {
                axis: RotationAxis::Y,
                degrees: 37.0,
            },
            AppIntent::RotationSliderChanged {
                axis: RotationAxis::X,
                degrees: -80.0,
            },
        ],
    );

    let display: Vec<DVec3> = state.display_path().iter().map(|wp| wp.position).collect();
    assert!(display[0].abs_diff_eq(before[0], 1e-12));
    for i in 0..before.len() {
        for j in 0..before.len() {
            assert_abs_diff_eq!(
                display[i].distance(display[j]),
                before[i].distance(before[j]),
                epsilon = 1e-9
            );
        }
    }
    assert_eq!(state.path.positions(), before);
}

#[test]
fn test_rotation_apply_bakes_and_undo_restores() {
    let mut controller = AppController::new();
    let mut state = triangle_state();
    let original = (*state.path).clone();

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::RotationPreviewStarted,
            AppIntent::RotationStepRequested {
                axis: RotationAxis::Z,
                delta_degrees: 45.0,
            },
            AppIntent::RotationStepRequested {
                axis: RotationAxis::Z,
                delta_degrees: 45.0,
            },
        ],
    );
    let display = state.display_path();

    run(&mut controller, &mut state, vec![AppIntent::RotationApplyRequested]);

    assert_eq!(state.rotation.phase(), RotationPhase::Idle);
    for (baked, shown) in state.path.waypoints().iter().zip(&display) {
        assert!(baked.position.abs_diff_eq(shown.position, 1e-12));
    }
    // 90° um Z um Wegpunkt 0: (4,2,3) -> (1,5,3)
    assert!(state.path.waypoints()[1]
        .position
        .abs_diff_eq(DVec3::new(1.0, 5.0, 3.0), 1e-9));

    run(&mut controller, &mut state, vec![AppIntent::UndoRequested]);
    assert_eq!(*state.path, original);
}

#[test]
fn test_rotation_cancel_keeps_path() {
    let mut controller = AppController::new();
    let mut state = triangle_state();
    let original = (*state.path).clone();

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::RotationPreviewStarted,
            AppIntent::RotationOriginSelected { index: None },
            AppIntent::RotationSliderChanged {
                axis: RotationAxis::Z,
                degrees: 120.0,
            },
            AppIntent::RotationCancelRequested,
        ],
    );

    assert_eq!(*state.path, original);
    assert_eq!(state.rotation.phase(), RotationPhase::Idle);
    assert!(state.rotation.rotation().is_zero());
    assert!(!state.history_available().can_undo);
}

#[test]
fn test_save_then_load_roundtrips_oriented_path() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.replace_waypoints(vec![
        Waypoint::with_orientation(DVec3::new(0.5, -3.25, 12.0), Orientation::new(0.1, -0.3, 2.0)),
        Waypoint::with_orientation(DVec3::new(-7.0, 1.0, 0.0), Orientation::new(-1.2, 0.4, -0.7)),
        Waypoint::with_orientation(DVec3::new(2.0, 2.0, 2.0), Orientation::new(0.0, 0.0, 0.0)),
    ]);
    let original = (*state.path).clone();

    run(&mut controller, &mut state, vec![AppIntent::SaveRequested]);
    let bytes = state
        .ui
        .export_buffer
        .take()
        .expect("Speichern sollte einen Export-Puffer erzeugen");
    assert_eq!(state.ui.status_message.as_deref(), Some("Data saved successfully."));

    run(&mut controller, &mut state, vec![AppIntent::LoadRequested { bytes }]);

    assert_eq!(state.path.len(), original.len());
    for (loaded, expected) in state.path.waypoints().iter().zip(original.waypoints()) {
        assert!(loaded.position.abs_diff_eq(expected.position, 1e-9));
        let a = loaded.orientation.expect("Orientierung geladen");
        let b = expected.orientation.expect("Orientierung gesetzt");
        assert_abs_diff_eq!(a.roll, b.roll, epsilon = 1e-9);
        assert_abs_diff_eq!(a.pitch, b.pitch, epsilon = 1e-9);
        assert_abs_diff_eq!(a.yaw, b.yaw, epsilon = 1e-9);
    }
}

#[test]
fn test_save_bakes_pending_rotation_about_centroid() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.replace_waypoints(vec![
        Waypoint::new(DVec3::new(-1.0, 0.0, 0.0)),
        Waypoint::new(DVec3::new(1.0, 0.0, 0.0)),
    ]);

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::RotationPreviewStarted,
            AppIntent::RotationSliderChanged {
                axis: RotationAxis::Y,
                degrees: 90.0,
            },
            AppIntent::SaveRequested,
        ],
    );

    let bytes = state.ui.export_buffer.as_ref().expect("Export-Puffer");
    let records: serde_json::Value = serde_json::from_slice(bytes).expect("gültiges JSON");
    let second = &records[1];
    assert_abs_diff_eq!(second["pose_x"].as_f64().unwrap_or(f64::NAN), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(second["pose_z"].as_f64().unwrap_or(f64::NAN), -1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(second["speed"].as_f64().unwrap_or(f64::NAN), 0.2, epsilon = 1e-12);

    assert_eq!(state.path.waypoints()[1].position, DVec3::new(1.0, 0.0, 0.0));
    assert_eq!(state.rotation.phase(), RotationPhase::Previewing);
}

#[test]
fn test_legacy_fixture_loads_positions_without_orientation() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::LoadRequested {
            bytes: include_bytes!("../fixtures/legacy_path.json").to_vec(),
        }],
    );

    assert_eq!(state.path.len(), 4);
    assert_eq!(state.path.waypoints()[0].position, DVec3::new(0.0, 6.3, 0.0));
    assert!(state.path.waypoints().iter().all(|wp| wp.orientation.is_none()));
}
