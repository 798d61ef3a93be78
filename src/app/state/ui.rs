/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Temporäre Statusnachricht für die Statusleiste
    pub status_message: Option<String>,
    /// Ergebnis des letzten Speicherns (JSON-Bytes für den Download)
    pub export_buffer: Option<Vec<u8>>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt die Statusnachricht und schreibt sie ins Log.
    pub fn set_status(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::info!("{}", message);
        self.status_message = Some(message);
    }
}
