//! Fehlertypen des Pfad-Cores.

use thiserror::Error;

/// Fehler, die von Core-Operationen auf Pfad und Wegpunkten gemeldet werden.
///
/// Der App-Layer übersetzt sie in Statusmeldungen; keine Core-Operation
/// hinterlässt bei einem Fehler einen halb mutierten Pfad.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// Wegpunkt-Index außerhalb des Pfades
    #[error("waypoint index {index} out of range (path has {len} waypoints)")]
    IndexOutOfRange { index: usize, len: usize },
    /// Austauschdaten nicht lesbar oder unbekanntes Format
    #[error("invalid path format: {0}")]
    InvalidFormat(String),
    /// Richtungsvektor ohne verwertbare Länge
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),
    /// NaN oder Unendlich in einer Eingabe
    #[error("non-finite value in {0}")]
    NonFinite(&'static str),
    /// Operation braucht mindestens einen Wegpunkt
    #[error("path is empty")]
    EmptyPath,
}
