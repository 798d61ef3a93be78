//! Pfad-Verlängerung: vertikal, vorwärts und per Drag-Segment.

use super::{PathError, Waypoint};
use glam::DVec3;

/// Horizontale Hinweis-Richtungen unterhalb dieser Länge gelten als entartet.
const MIN_HORIZONTAL_LENGTH: f64 = 1e-9;

/// Obergrenze der Zwischenpunkte eines Drag-Segments.
pub const MAX_SEGMENT_POINTS: usize = 10_000;

/// Ersatzrichtung für Vorwärts-Verlängerung
pub const DEFAULT_FORWARD: DVec3 = DVec3::X;

/// Ebene, in der ein Verlängerungs-Drag geführt wird
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtendMode {
    /// Höhe des Startpunkts bleibt erhalten
    #[default]
    Horizontal,
    /// Nur die Höhe ändert sich
    Vertical,
}

/// Achsbeschränkung für Verschiebe-Deltas beim Editieren
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditConstraint {
    #[default]
    Free,
    /// Nur in der XZ-Ebene
    Horizontal,
    /// Nur entlang Y
    Vertical,
}

/// Wendet eine Achsbeschränkung auf ein Delta an.
pub fn constrain_delta(delta: DVec3, constraint: EditConstraint) -> DVec3 {
    match constraint {
        EditConstraint::Free => delta,
        EditConstraint::Horizontal => DVec3::new(delta.x, 0.0, delta.z),
        EditConstraint::Vertical => DVec3::new(0.0, delta.y, 0.0),
    }
}

/// Beschränkt den Drag-Endpunkt auf die Ebene des Modus durch `start`.
pub fn constrain_drag_end(start: DVec3, end: DVec3, mode: ExtendMode) -> DVec3 {
    match mode {
        ExtendMode::Horizontal => DVec3::new(end.x, start.y, end.z),
        ExtendMode::Vertical => DVec3::new(start.x, end.y, start.z),
    }
}

/// Normierte horizontale Projektion eines Richtungshinweises.
pub fn horizontal_direction(hint: DVec3) -> Result<DVec3, PathError> {
    let flat = DVec3::new(hint.x, 0.0, hint.z);
    if !flat.is_finite() || flat.length() < MIN_HORIZONTAL_LENGTH {
        return Err(PathError::DegenerateGeometry("horizontal direction hint"));
    }
    Ok(flat.normalize())
}

/// Kopie von `last`, um `delta` nach oben (Y) versetzt.
pub fn extend_vertical(last: &Waypoint, delta: f64) -> Waypoint {
    Waypoint {
        position: last.position + DVec3::Y * delta,
        orientation: last.orientation,
    }
}

/// Kopie von `last`, um `delta` entlang der horizontalen Hinweisrichtung versetzt.
///
/// Ohne verwertbare horizontale Richtung wird `DEFAULT_FORWARD` genutzt.
pub fn extend_forward(last: &Waypoint, delta: f64, direction_hint: DVec3) -> Waypoint {
    let direction = horizontal_direction(direction_hint).unwrap_or_else(|e| {
        log::debug!("{}, verwende Standardrichtung", e);
        DEFAULT_FORWARD
    });
    Waypoint {
        position: last.position + direction * delta,
        orientation: last.orientation,
    }
}

/// Zwischenpunkte von `start` (exklusiv) bis `end` (inklusiv) im Abstand `min_spacing`.
///
/// `steps = max(1, floor(distance / min_spacing))`; identische Endpunkte
/// ergeben keine Punkte. Mehr als `MAX_SEGMENT_POINTS` Schritte werden
/// abgelehnt.
pub fn interpolate_segment(
    start: DVec3,
    end: DVec3,
    min_spacing: f64,
) -> Result<Vec<DVec3>, PathError> {
    if !start.is_finite() || !end.is_finite() {
        return Err(PathError::NonFinite("segment endpoint"));
    }
    if start == end {
        return Ok(Vec::new());
    }
    let distance = start.distance(end);
    let steps = if min_spacing > 0.0 && min_spacing.is_finite() {
        let ratio = (distance / min_spacing).floor();
        if !ratio.is_finite() || ratio > MAX_SEGMENT_POINTS as f64 {
            return Err(PathError::DegenerateGeometry("segment spacing too small"));
        }
        (ratio as usize).max(1)
    } else {
        1
    };
    Ok((1..=steps)
        .map(|i| start.lerp(end, i as f64 / steps as f64))
        .collect())
}
