//! Fehlertypen der Marker-Domäne.

use thiserror::Error;

/// Konfigurations- und Startfehler der Karte.
///
/// Alle Varianten sind fatal für die Initialisierung: es gibt keine
/// transienten Operationen, die einen Retry rechtfertigen würden.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    /// Kategorie ist keine von `grants`, `groups`, `projects`.
    #[error("Unbekannte Kategorie: '{0}'")]
    UnknownCategory(String),

    /// Koordinaten außerhalb des gültigen Bereichs oder nicht endlich.
    #[error("Ungültige Koordinate: lat={lat}, lng={lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    /// Marker ohne Navigationsziel.
    #[error("Marker #{index} hat keine URL")]
    MissingUrl { index: usize },

    /// Container-Element für die Karte existiert nicht.
    #[error("Karten-Container '{0}' nicht gefunden")]
    ContainerMissing(String),

    /// Marker sollen gemountet werden, bevor die Karte erstellt wurde.
    #[error("Karte wurde noch nicht erstellt")]
    MapNotCreated,

    /// `mount` wurde ein zweites Mal aufgerufen.
    #[error("Marker sind bereits gemountet")]
    AlreadyMounted,

    /// Marker-ID existiert nicht in der Registry.
    #[error("Unbekannter Marker: {0}")]
    UnknownMarker(usize),
}
