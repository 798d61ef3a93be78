//! Core-Domänentypen: Wegpunkte, Pfad, Falloff, Rotation, Kurve, Verlängerung.

pub mod curve;
pub mod error;
pub mod extension;
pub mod falloff;
pub mod path;
pub mod playback;
pub mod rotation;
/// Einzelner Wegpunkt mit Position und optionaler lokaler Orientierung
pub mod waypoint;

pub use curve::{look_rotation, CurveSample, PlaybackCurve};
pub use error::PathError;
pub use extension::{
    constrain_delta, constrain_drag_end, extend_forward, extend_vertical, horizontal_direction,
    interpolate_segment, EditConstraint, ExtendMode,
};
pub use falloff::{falloff_influence, proportional_move, proportional_rotate};
pub use path::WaypointPath;
pub use playback::{PlaybackCursor, PlaybackTick, PLAYBACK_RATE};
pub use rotation::{
    rotate_waypoints, GlobalRotation, RotationAxis, RotationEngine, RotationOrigin, RotationPhase,
};
pub use waypoint::{Orientation, Waypoint};
