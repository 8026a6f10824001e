use crate::core::{MarkerCategory, MarkerId};

/// App-Intent Events.
/// Intents sind Eingaben aus UI/SDK ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Legenden-Checkbox wurde geklickt
    FilterToggled {
        category: MarkerCategory,
        checked: bool,
    },
    /// Marker auf der Karte wurde angeklickt
    MarkerClicked { id: MarkerId },
    /// Anwendung beenden
    ExitRequested,
}
