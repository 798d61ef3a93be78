use indexmap::IndexSet;

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Aktuell selektierter Wegpunkt (Gizmo-Ziel)
    pub selected: Option<usize>,
    /// Zum Löschen markierte Wegpunkte in Markier-Reihenfolge
    pub checked: IndexSet<usize>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hebt Selektion und Markierungen auf.
    pub fn clear(&mut self) {
        self.selected = None;
        self.checked.clear();
    }

    /// Schaltet die Lösch-Markierung eines Wegpunkts um.
    ///
    /// Gibt `true` zurück, wenn der Punkt danach markiert ist.
    pub fn toggle_checked(&mut self, index: usize) -> bool {
        if self.checked.shift_remove(&index) {
            false
        } else {
            self.checked.insert(index);
            true
        }
    }

    /// Nächster (bzw. vorheriger) Index mit Umlauf, ausgehend von der Selektion.
    ///
    /// Ohne Selektion beginnt die Vorwärtssuche bei 0, rückwärts beim letzten Punkt.
    pub fn cycled(&self, len: usize, forward: bool) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(match (self.selected, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i.min(len - 1) + len - 1) % len,
        })
    }
}
