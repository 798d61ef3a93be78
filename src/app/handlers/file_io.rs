//! Handler für Datei-Operationen (Speichern, Laden, Leeren).

use crate::app::use_cases;
use crate::app::AppState;

/// Exportiert den Pfad in den Export-Puffer.
pub fn save(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::file_io::save_path(state)
}

/// Lädt einen Pfad aus JSON-Bytes.
pub fn load(state: &mut AppState, bytes: &[u8]) -> anyhow::Result<()> {
    use_cases::file_io::load_path(state, bytes)
}

/// Leert Pfad und History.
pub fn clear(state: &mut AppState) {
    use_cases::file_io::clear_path(state);
}
