/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Statusnachricht für die Status-Bar (z.B. Ergebnis beim Speichern)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self {
            status_message: None,
        }
    }
}
