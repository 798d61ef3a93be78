//! Proportionales Editieren: Verschieben und Drehen mit Cosinus-Falloff.
//!
//! Alle Funktionen rechnen ausschließlich auf dem eingefrorenen Snapshot vom
//! Drag-Beginn. Mehrfache Aufrufe mit demselben Gesamt-Delta liefern daher
//! dasselbe Ergebnis, statt Fehler aufzusummieren.

use super::{Orientation, PathError, Waypoint};
use glam::{DQuat, DVec3};
use std::f64::consts::PI;

/// Einfluss eines Nachbarpunkts im euklidischen Abstand `distance`.
///
/// 1 bei Abstand 0, fällt glatt auf 0 bei `distance == falloff`.
/// `falloff <= 0` bedeutet: kein Nachbar wird mitgezogen.
pub fn falloff_influence(distance: f64, falloff: f64) -> f64 {
    if falloff > 0.0 && distance < falloff {
        ((distance / falloff * PI).cos() + 1.0) / 2.0
    } else {
        0.0
    }
}

/// Einfluss je Wegpunkt relativ zum gezogenen Punkt `selected`.
fn influences(original: &[Waypoint], selected: usize, falloff: f64) -> Vec<f64> {
    let anchor = original[selected].position;
    original
        .iter()
        .enumerate()
        .map(|(i, wp)| {
            if i == selected {
                1.0
            } else {
                falloff_influence(wp.position.distance(anchor), falloff)
            }
        })
        .collect()
}

fn check_selected(original: &[Waypoint], selected: usize) -> Result<(), PathError> {
    if selected >= original.len() {
        return Err(PathError::IndexOutOfRange {
            index: selected,
            len: original.len(),
        });
    }
    Ok(())
}

/// Verschiebt `original[selected]` um `delta` und zieht Nachbarn gewichtet mit.
///
/// Gibt die komplette neue Wegpunktliste zurück; ein leerer Snapshot ergibt
/// eine leere Liste (No-op für den Aufrufer).
pub fn proportional_move(
    original: &[Waypoint],
    selected: usize,
    delta: DVec3,
    falloff: f64,
) -> Result<Vec<Waypoint>, PathError> {
    if original.is_empty() {
        return Ok(Vec::new());
    }
    check_selected(original, selected)?;
    if !delta.is_finite() || !falloff.is_finite() {
        return Err(PathError::NonFinite("proportional move"));
    }

    let weights = influences(original, selected, falloff);
    Ok(original
        .iter()
        .zip(weights)
        .map(|(wp, influence)| Waypoint {
            position: wp.position + delta * influence,
            orientation: wp.orientation,
        })
        .collect())
}

/// Dreht die Orientierung von `original[selected]` um `delta` (Weltraum) und
/// dreht Nachbarn anteilig per Slerp mit.
///
/// Punkte ohne Einfluss behalten ihre Orientierung (auch eine fehlende).
pub fn proportional_rotate(
    original: &[Waypoint],
    selected: usize,
    delta: DQuat,
    falloff: f64,
) -> Result<Vec<Waypoint>, PathError> {
    if original.is_empty() {
        return Ok(Vec::new());
    }
    check_selected(original, selected)?;
    if !delta.is_finite() || !falloff.is_finite() {
        return Err(PathError::NonFinite("proportional rotate"));
    }

    let delta = delta.normalize();
    let weights = influences(original, selected, falloff);
    Ok(original
        .iter()
        .zip(weights)
        .map(|(wp, influence)| {
            if influence <= 0.0 {
                return *wp;
            }
            let partial = DQuat::IDENTITY.slerp(delta, influence);
            Waypoint {
                position: wp.position,
                orientation: Some(Orientation::from_quat(partial * wp.local_quat())),
            }
        })
        .collect())
}
