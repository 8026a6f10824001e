//! Filter-Zustand der Legende: ein Häkchen pro Kategorie.

use super::MarkerCategory;

/// Checkbox-Zustand pro Kategorie. Initial sind alle Kategorien sichtbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryFilterState {
    checked: [bool; 3],
}

impl CategoryFilterState {
    /// Erstellt den Startzustand (alles angehakt).
    pub fn new() -> Self {
        Self {
            checked: [true; 3],
        }
    }

    /// Gibt zurück, ob die Checkbox der Kategorie angehakt ist.
    pub fn is_checked(&self, category: MarkerCategory) -> bool {
        self.checked[category.index()]
    }

    /// Setzt den Checkbox-Zustand der Kategorie.
    pub fn set_checked(&mut self, category: MarkerCategory, checked: bool) {
        self.checked[category.index()] = checked;
    }

    /// Anzahl der angehakten Kategorien.
    pub fn checked_count(&self) -> usize {
        self.checked.iter().filter(|c| **c).count()
    }
}

impl Default for CategoryFilterState {
    fn default() -> Self {
        Self::new()
    }
}
