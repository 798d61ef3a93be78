//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod editing;
pub mod extension;
pub mod file_io;
pub mod history;
pub mod options;
pub mod playback;
pub mod recording;
pub mod rotation;
pub mod selection;
