//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen und gleicht abhängige Zustände an.
///
/// Eine geänderte History-Tiefe gilt erst für neue Sitzungen. Ungültige
/// Optionen werden verworfen.
pub fn apply(state: &mut AppState, options: EditorOptions) {
    if let Err(e) = options.validate() {
        log::warn!("Optionen verworfen: {}", e);
        return;
    }
    state.editor.falloff = options.edit_falloff;
    state.playback.speed = options.playback_speed;
    state.options = options;
    log::info!("Optionen übernommen");
}
