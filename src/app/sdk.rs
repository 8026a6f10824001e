//! Schnittstelle zum externen Mapping-SDK.
//!
//! Der Kern implementiert weder Rendering noch Projektion noch
//! Event-Dispatch; er ruft nur diese Primitive auf. Klicks auf Marker
//! meldet das SDK über die beim Erstellen übergebene `MarkerId` zurück,
//! der Host übersetzt sie in `AppIntent::MarkerClicked`.

use crate::core::{LatLng, MapError, MarkerCategory, MarkerId};
use crate::render::Tooltip;
use crate::shared::MapOptions;

/// Primitive des Mapping-SDKs, die der Presenter benötigt.
pub trait MapSdk {
    /// SDK-natives Marker-Handle.
    type Marker: Copy + std::fmt::Debug;

    /// Erstellt die Karte im Container. Fehlt der Container, ist das fatal.
    fn create_map(&mut self, container_id: &str, options: &MapOptions) -> Result<(), MapError>;

    /// Erstellt einen Marker; Klicks werden mit `id` zurückgemeldet.
    ///
    /// `icon` ist der Asset-Pfad der Kategorie. SDKs mit eigenen Icons
    /// wählen sie über `category`.
    fn create_marker(
        &mut self,
        id: MarkerId,
        position: LatLng,
        category: MarkerCategory,
        icon: &'static str,
    ) -> Self::Marker;

    /// Hängt ein dauerhaft sichtbares Tooltip-Overlay an den Marker.
    fn create_tooltip_overlay(&mut self, marker: Self::Marker, tooltip: &Tooltip, css_class: &str);

    /// Blendet den Marker samt Overlay ein oder aus.
    fn set_marker_visible(&mut self, marker: Self::Marker, visible: bool);
}
