use crate::core::{MarkerCategory, MarkerId};

/// Mutierende App-Commands, ausgeführt vom `AppController`.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Sichtbarkeit aller Marker einer Kategorie setzen und Checkbox synchronisieren
    SetCategoryVisible {
        category: MarkerCategory,
        visible: bool,
    },
    /// Checkbox-Klick der Legende, ausgeführt über `on_filter_toggle`
    ToggleFilter {
        category: MarkerCategory,
        checked: bool,
    },
    /// Zur URL des Markers navigieren
    NavigateToMarker { id: MarkerId },
    /// Anwendung kontrolliert beenden
    RequestExit,
}
