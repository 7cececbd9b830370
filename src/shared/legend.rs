//! Legende mit Deduplizierung nach Beschriftung.

use indexmap::IndexMap;

/// Darstellungsart eines Legenden-Eintrags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendKind {
    /// Durchgezogene Linie
    Line,
    /// Gestrichelte Linie
    DashedLine,
    /// Punkt-Marker
    Marker,
}

/// Ein Eintrag der Legende.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: [f32; 4],
    pub kind: LegendKind,
}

/// Legende eines Frames.
///
/// Gleiche Beschriftungen erscheinen nur einmal: die Position bleibt die des
/// ersten Auftretens, Farbe und Art stammen vom letzten.
#[derive(Debug, Clone, Default)]
pub struct Legend {
    entries: IndexMap<String, LegendEntry>,
}

impl Legend {
    /// Erstellt eine leere Legende.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen Eintrag hinzu oder ersetzt den mit gleicher Beschriftung.
    pub fn push(&mut self, label: impl Into<String>, color: [f32; 4], kind: LegendKind) {
        let label = label.into();
        self.entries.insert(
            label.clone(),
            LegendEntry { label, color, kind },
        );
    }

    /// Einträge in Anzeigereihenfolge.
    pub fn entries(&self) -> impl Iterator<Item = &LegendEntry> {
        self.entries.values()
    }

    /// Anzahl der (deduplizierten) Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn die Legende leer ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_labels_keep_first_position_and_last_style() {
        let mut legend = Legend::new();
        legend.push("Tangenten", [0.0, 0.0, 1.0, 1.0], LegendKind::Line);
        legend.push("Schnittpunkt", [0.0, 0.0, 0.0, 1.0], LegendKind::Marker);
        legend.push("Tangenten", [1.0, 0.0, 0.0, 1.0], LegendKind::DashedLine);

        assert_eq!(legend.len(), 2);
        let entries: Vec<&LegendEntry> = legend.entries().collect();
        assert_eq!(entries[0].label, "Tangenten");
        assert_eq!(entries[0].color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(entries[0].kind, LegendKind::DashedLine);
        assert_eq!(entries[1].label, "Schnittpunkt");
    }
}
