//! Ein Point-of-Interest auf der Karte.

use super::{LatLng, MarkerCategory};
use serde::Serialize;

/// Dichte Registrierungs-Nummer eines Markers (0-basiert).
pub type MarkerId = usize;

/// Repräsentiert einen Marker mit Tooltip-Inhalt.
///
/// Kategorie und Position sind nach der Erstellung unveränderlich,
/// nur `visible` ändert sich durch Filter-Aktionen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerRecord {
    category: MarkerCategory,
    position: LatLng,
    url: String,
    title: Option<String>,
    image: Option<String>,
    body: Option<String>,
    visible: bool,
}

impl MarkerRecord {
    /// Erstellt einen sichtbaren Marker ohne Tooltip-Felder.
    pub fn new(category: MarkerCategory, position: LatLng, url: impl Into<String>) -> Self {
        Self {
            category,
            position,
            url: url.into(),
            title: None,
            image: None,
            body: None,
            visible: true,
        }
    }

    /// Setzt den Tooltip-Titel. Leere Strings gelten als nicht vorhanden.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = non_empty(title.into());
        self
    }

    /// Setzt das Tooltip-Bild. Leere Strings gelten als nicht vorhanden.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = non_empty(image.into());
        self
    }

    /// Setzt den Tooltip-Text. Leere Strings gelten als nicht vorhanden.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = non_empty(body.into());
        self
    }

    pub fn category(&self) -> MarkerCategory {
        self.category
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Aktueller Filter-Zustand des Markers.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
