//! Use-Case-Funktionen für Speichern, Laden und Leeren des Pfades.
//!
//! Der Core macht keine Datei-I/O: Laden nimmt Bytes entgegen, Speichern
//! legt das JSON in `UiState::export_buffer` ab. Den Dateizugriff übernimmt
//! der Host.

use crate::app::state::VehiclePose;
use crate::core::WaypointPath;
use crate::interchange::{read_waypoints, write_waypoints_json};
use crate::AppState;
use anyhow::Context;
use std::sync::Arc;

/// Exportiert den Pfad (inklusive ausstehender Rotation) als JSON.
pub fn save_path(state: &mut AppState) -> anyhow::Result<()> {
    if state.path.is_empty() {
        log::warn!("Speichern abgelehnt: Pfad ist leer");
        state
            .ui
            .set_status("Path is empty, nothing to save.".to_string());
        return Ok(());
    }

    let bytes = write_waypoints_json(
        &state.path,
        state.rotation.rotation(),
        state.options.export_wait_time,
        state.options.export_speed,
    )
    .context("Pfad konnte nicht serialisiert werden")?;

    log::info!(
        "{} Wegpunkte exportiert ({} Bytes)",
        state.path.len(),
        bytes.len()
    );
    state.ui.export_buffer = Some(bytes);
    state.ui.set_status("Data saved successfully.".to_string());
    Ok(())
}

/// Ersetzt den Pfad durch den Inhalt der JSON-Bytes.
///
/// Pfad und History werden vorher geleert; bei einem Fehler bleibt der Pfad
/// leer und der Fehler wird zusätzlich zurückgegeben.
pub fn load_path(state: &mut AppState, bytes: &[u8]) -> anyhow::Result<()> {
    clear_path(state);

    let waypoints = match read_waypoints(bytes) {
        Ok(waypoints) => waypoints,
        Err(e) => {
            log::warn!("Laden fehlgeschlagen: {}", e);
            state.ui.set_status(format!("Failed to load path: {}", e));
            return Err(e).context("Pfad konnte nicht geladen werden");
        }
    };

    let path = WaypointPath::from_waypoints(waypoints)
        .context("Geladener Pfad enthält ungültige Werte")?;
    log::info!("Pfad geladen: {} Wegpunkte", path.len());
    state.path = Arc::new(path);
    state.ui.set_status("Data loaded successfully.".to_string());
    Ok(())
}

/// Leert Pfad, History und alle laufenden Vorgänge; das Fahrzeug kehrt heim.
pub fn clear_path(state: &mut AppState) {
    state.path = Arc::new(WaypointPath::new());
    state.history.clear();
    state.rotation.cancel();
    state.selection.clear();
    state.editor.abort_drags();
    state.playback.cursor = None;
    state.recording.active = false;
    state.vehicle = VehiclePose::home();
    state.ui.set_status("Data cleared.".to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Waypoint;
    use glam::DVec3;

    #[test]
    fn save_empty_path_is_refused() {
        let mut state = AppState::new();
        save_path(&mut state).expect("kein Fehler");
        assert!(state.ui.export_buffer.is_none());
        assert_eq!(
            state.ui.status_message.as_deref(),
            Some("Path is empty, nothing to save.")
        );
    }

    #[test]
    fn failed_load_leaves_path_empty_and_errors() {
        let mut state = AppState::new();
        state.replace_waypoints(vec![Waypoint::new(DVec3::ONE)]);
        state.record_undo_snapshot();

        let result = load_path(&mut state, b"{\"foo\":1}");

        assert!(result.is_err());
        assert!(state.path.is_empty());
        assert!(!state.can_undo());
        assert!(state
            .ui
            .status_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Failed to load path")));
    }

    #[test]
    fn clear_resets_vehicle_and_history() {
        let mut state = AppState::new();
        state.replace_waypoints(vec![Waypoint::new(DVec3::ONE)]);
        state.record_undo_snapshot();
        state.vehicle.position = DVec3::new(9.0, 9.0, 9.0);

        clear_path(&mut state);

        assert!(state.path.is_empty());
        assert!(!state.can_undo() && !state.can_redo());
        assert_eq!(state.vehicle, VehiclePose::home());
    }
}
