//! Use-Cases der Application-Layer-Orchestrierung.

pub mod editing;
pub mod extension;
pub mod file_io;
pub mod playback;
pub mod recording;
pub mod rotation;
pub mod selection;
