use approx::assert_abs_diff_eq;
use glam::{DQuat, DVec3};
use rov_path_planner::app::GizmoMode;
use rov_path_planner::core::{EditConstraint, ExtendMode};
use rov_path_planner::{AppCommand, AppController, AppIntent, AppState, EditorOptions, Waypoint};

fn state_on_x_axis(xs: &[f64]) -> AppState {
    let mut state = AppState::new();
    state.replace_waypoints(
        xs.iter()
            .map(|&x| Waypoint::new(DVec3::new(x, 0.0, 0.0)))
            .collect(),
    );
    state
}

fn run(controller: &mut AppController, state: &mut AppState, intents: Vec<AppIntent>) {
    for intent in intents {
        controller
            .handle_intent(state, intent)
            .expect("Intent sollte ohne Fehler verarbeitet werden");
    }
}

#[test]
fn test_gizmo_drag_moves_neighbours_with_cosine_falloff() {
    let mut controller = AppController::new();
    let mut state = state_on_x_axis(&[0.0, 5.0, 10.0, 20.0]);

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::FalloffChanged { radius: 10.0 },
            AppIntent::BeginDrag { index: 1 },
            AppIntent::DragTo {
                delta: DVec3::new(0.0, 2.0, 0.0),
            },
            AppIntent::EndDrag,
        ],
    );

    let ys: Vec<f64> = state.path.waypoints().iter().map(|wp| wp.position.y).collect();
    assert_abs_diff_eq!(ys[1], 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(ys[0], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(ys[2], 1.0, epsilon = 1e-12);
    assert_eq!(ys[3], 0.0);
    assert_eq!(state.selection.selected, Some(1));
    assert!(state.editor.drag.is_none());

    let logged: Vec<&AppCommand> = state.command_log.entries().iter().collect();
    assert!(logged
        .iter()
        .any(|cmd| matches!(cmd, AppCommand::BeginProportionalDrag { index: 1 })));
}

#[test]
fn test_drag_updates_are_idempotent_for_same_total_delta() {
    let mut controller = AppController::new();
    let mut direct = state_on_x_axis(&[0.0, 3.0, 6.0]);
    let mut stepped = state_on_x_axis(&[0.0, 3.0, 6.0]);
    let target = DVec3::new(1.0, 4.0, -2.0);

    run(
        &mut controller,
        &mut direct,
        vec![
            AppIntent::BeginDrag { index: 2 },
            AppIntent::DragTo { delta: target },
            AppIntent::EndDrag,
        ],
    );
    run(
        &mut controller,
        &mut stepped,
        vec![
            AppIntent::BeginDrag { index: 2 },
            AppIntent::DragTo {
                delta: target * 0.3,
            },
            AppIntent::DragTo {
                delta: target * 1.7,
            },
            AppIntent::DragTo { delta: target },
            AppIntent::EndDrag,
        ],
    );

    for (a, b) in direct.path.waypoints().iter().zip(stepped.path.waypoints()) {
        assert_abs_diff_eq!(a.position.distance(b.position), 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_horizontal_constraint_drops_vertical_component() {
    let mut controller = AppController::new();
    let mut state = state_on_x_axis(&[0.0, 50.0]);

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::EditConstraintChanged {
                constraint: EditConstraint::Horizontal,
            },
            AppIntent::BeginDrag { index: 0 },
            AppIntent::DragTo {
                delta: DVec3::new(1.0, 9.0, 2.0),
            },
            AppIntent::EndDrag,
        ],
    );

    assert_eq!(state.path.waypoints()[0].position, DVec3::new(1.0, 0.0, 2.0));
}

#[test]
fn test_rotate_drag_turns_selected_waypoint() {
    let mut controller = AppController::new();
    let mut state = state_on_x_axis(&[0.0, 100.0]);
    let turn = DQuat::from_rotation_y(0.5);

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::GizmoModeChanged {
                mode: GizmoMode::Rotate,
            },
            AppIntent::BeginDrag { index: 0 },
            AppIntent::RotateDragTo { delta: turn },
            AppIntent::EndDrag,
        ],
    );

    assert_eq!(state.editor.gizmo_mode, GizmoMode::Rotate);
    let orientation = state.path.waypoints()[0]
        .orientation
        .expect("Gedrehter Punkt sollte eine Orientierung haben");
    assert!((orientation.to_quat() * DVec3::Z).abs_diff_eq(turn * DVec3::Z, 1e-9));
    assert_eq!(state.path.waypoints()[0].position, DVec3::ZERO);
}

#[test]
fn test_delete_first_and_last_of_three() {
    let mut controller = AppController::new();
    let mut state = state_on_x_axis(&[0.0, 1.0, 2.0]);

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::DeleteIndices {
            indices: vec![2, 0, 2],
        }],
    );

    assert_eq!(state.path.len(), 1);
    assert_eq!(state.path.waypoints()[0].position, DVec3::X);

    run(&mut controller, &mut state, vec![AppIntent::UndoRequested]);
    assert_eq!(state.path.len(), 3);
}

#[test]
fn test_checkbox_toggles_feed_delete_checked() {
    let mut controller = AppController::new();
    let mut state = state_on_x_axis(&[0.0, 1.0, 2.0, 3.0]);

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::CheckboxToggled { index: 1 },
            AppIntent::CheckboxToggled { index: 3 },
            AppIntent::CheckboxToggled { index: 1 },
            AppIntent::CheckboxToggled { index: 2 },
            AppIntent::DeleteCheckedRequested,
        ],
    );

    let xs: Vec<f64> = state.path.waypoints().iter().map(|wp| wp.position.x).collect();
    assert_eq!(xs, vec![0.0, 1.0]);
    assert!(state.selection.checked.is_empty());
    assert_eq!(state.ui.status_message.as_deref(), Some("Deleted 2 waypoint(s)."));
}

#[test]
fn test_selection_cycles_through_path() {
    let mut controller = AppController::new();
    let mut state = state_on_x_axis(&[0.0, 1.0, 2.0]);

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::SelectPoint { index: Some(2) }, AppIntent::SelectNextPoint],
    );
    assert_eq!(state.selection.selected, Some(0));

    run(&mut controller, &mut state, vec![AppIntent::SelectPreviousPoint]);
    assert_eq!(state.selection.selected, Some(2));
    assert_eq!(state.ui.status_message.as_deref(), Some("Point 2 selected."));
}

#[test]
fn test_extension_keys_append_copies_of_last_point() {
    let mut controller = AppController::new();
    let mut state = state_on_x_axis(&[0.0]);

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::ExtendVerticalRequested { upward: false },
            AppIntent::ExtendForwardRequested {
                forward: true,
                view_direction: DVec3::new(0.0, -1.0, -1.0),
            },
        ],
    );

    let positions: Vec<DVec3> = state.path.waypoints().iter().map(|wp| wp.position).collect();
    assert_eq!(positions.len(), 3);
    assert_abs_diff_eq!(positions[1].y, -0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(positions[2].z, -0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(positions[2].y, -0.2, epsilon = 1e-12);
}

#[test]
fn test_extend_drag_is_one_undo_step() {
    let mut controller = AppController::new();
    let mut state = state_on_x_axis(&[0.0]);

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::ExtendDragStarted {
                mode: ExtendMode::Vertical,
            },
            AppIntent::ExtendDragMoved {
                end: DVec3::new(5.0, 1.0, 5.0),
            },
            AppIntent::ExtendDragFinished,
        ],
    );

    assert_eq!(state.path.len(), 6);
    let last = state.path.last().expect("Endpunkt");
    assert_eq!(last.position, DVec3::new(0.0, 1.0, 0.0));

    run(&mut controller, &mut state, vec![AppIntent::UndoRequested]);
    assert_eq!(state.path.len(), 1);
}

#[test]
fn test_cancelled_extend_drag_leaves_path_untouched() {
    let mut controller = AppController::new();
    let mut state = state_on_x_axis(&[0.0, 1.0]);

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::ExtendDragStarted {
                mode: ExtendMode::Horizontal,
            },
            AppIntent::ExtendDragMoved {
                end: DVec3::new(4.0, 0.0, 0.0),
            },
            AppIntent::ExtendDragCancelled,
        ],
    );

    assert_eq!(state.path.len(), 2);
    assert!(!state.history_available().can_undo);
    assert_eq!(state.ui.status_message.as_deref(), Some("Path extension cancelled."));
}

#[test]
fn test_drag_after_delete_does_not_restore_removed_point() {
    let mut controller = AppController::new();
    let mut state = state_on_x_axis(&[0.0, 1.0, 2.0]);

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::BeginDrag { index: 0 },
            AppIntent::DeleteIndices { indices: vec![2] },
            AppIntent::DragTo { delta: DVec3::Y },
        ],
    );

    assert_eq!(state.path.len(), 2);
    assert!(state.editor.drag.is_none());
    assert_eq!(state.path.waypoints()[0].position, DVec3::ZERO);
}

#[test]
fn test_drag_after_rotation_apply_keeps_rotated_path() {
    let mut controller = AppController::new();
    let mut state = state_on_x_axis(&[0.0, 4.0]);

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::BeginDrag { index: 1 },
            AppIntent::RotationPreviewStarted,
            AppIntent::RotationSliderChanged {
                axis: rov_path_planner::core::RotationAxis::Y,
                degrees: 90.0,
            },
            AppIntent::RotationApplyRequested,
            AppIntent::DragTo { delta: DVec3::Y },
        ],
    );

    assert!(state.path.waypoints()[1]
        .position
        .abs_diff_eq(DVec3::new(0.0, 0.0, -4.0), 1e-9));
}

#[test]
fn test_tiny_extend_spacing_rejects_drag_without_panicking() {
    let mut controller = AppController::new();
    let mut state = state_on_x_axis(&[0.0]);
    let options = EditorOptions {
        extend_min_spacing: 1e-300,
        ..EditorOptions::default()
    };

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::OptionsChanged {
                options: Box::new(options),
            },
            AppIntent::ExtendDragStarted {
                mode: ExtendMode::Horizontal,
            },
            AppIntent::ExtendDragMoved { end: DVec3::X },
            AppIntent::ExtendDragFinished,
        ],
    );

    assert_eq!(state.path.len(), 1);
    assert!(state.editor.extend_drag.is_none());
    assert!(!state.history_available().can_undo);
}

#[test]
fn test_invalid_options_are_ignored() {
    let mut controller = AppController::new();
    let mut state = state_on_x_axis(&[0.0]);
    let options = EditorOptions {
        extend_min_spacing: 0.0,
        edit_falloff: 3.0,
        ..EditorOptions::default()
    };

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::OptionsChanged {
            options: Box::new(options),
        }],
    );

    assert_eq!(state.options, EditorOptions::default());
    assert_eq!(state.editor.falloff, 10.0);
}
