//! Registry aller Marker in Registrierungsreihenfolge.
//!
//! Wird einmal beim Start aus der statischen Konfiguration befüllt und lebt
//! so lange wie die Karte. Nach der Registrierung ändert sich nur noch die
//! Sichtbarkeit einzelner Records.

use super::{MapError, MarkerCategory, MarkerId, MarkerRecord};

/// Geordnete Sammlung aller `MarkerRecord`s mit kategoriebasierter Iteration.
#[derive(Debug, Clone, Default)]
pub struct MarkerRegistry {
    records: Vec<MarkerRecord>,
}

impl MarkerRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validiert und hängt einen Record an. Gibt die vergebene ID zurück.
    ///
    /// Die Kategorie ist durch den Typ bereits geprüft; hier werden
    /// Koordinaten und URL validiert.
    pub fn register(&mut self, record: MarkerRecord) -> Result<MarkerId, MapError> {
        let id = self.records.len();
        let position = record.position();
        if !position.is_valid() {
            return Err(MapError::InvalidCoordinate {
                lat: position.lat,
                lng: position.lng,
            });
        }
        if record.url().trim().is_empty() {
            return Err(MapError::MissingUrl { index: id });
        }

        log::debug!(
            "Marker #{} registriert: {} @ ({:.4}, {:.4})",
            id,
            record.category(),
            position.lat,
            position.lng
        );
        self.records.push(record);
        Ok(id)
    }

    /// Alle Records der Kategorie, in Registrierungsreihenfolge.
    ///
    /// Der Iterator ist lazy und klonbar; ein erneuter Aufruf startet von vorn.
    pub fn records_in(
        &self,
        category: MarkerCategory,
    ) -> impl Iterator<Item = (MarkerId, &MarkerRecord)> + Clone + '_ {
        self.records
            .iter()
            .enumerate()
            .filter(move |(_, r)| r.category() == category)
    }

    /// Icon-Pfad der Kategorie.
    pub fn icon_for(category: MarkerCategory) -> &'static str {
        category.icon_path()
    }

    /// Gibt den Record mit der angegebenen ID zurück (falls vorhanden).
    pub fn get(&self, id: MarkerId) -> Option<&MarkerRecord> {
        self.records.get(id)
    }

    /// Iteriert über alle Records in Registrierungsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (MarkerId, &MarkerRecord)> + '_ {
        self.records.iter().enumerate()
    }

    /// Setzt `visible` für alle Records der Kategorie und gibt deren IDs zurück.
    pub fn set_visible_in(&mut self, category: MarkerCategory, visible: bool) -> Vec<MarkerId> {
        self.records
            .iter_mut()
            .enumerate()
            .filter(|(_, r)| r.category() == category)
            .map(|(id, r)| {
                r.set_visible(visible);
                id
            })
            .collect()
    }

    /// Anzahl sichtbarer Records der Kategorie.
    pub fn visible_count(&self, category: MarkerCategory) -> usize {
        self.records_in(category)
            .filter(|(_, r)| r.is_visible())
            .count()
    }

    /// Gibt die Anzahl der gespeicherten Records zurück.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Gibt zurück ob die Registry leer ist.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialisiert alle Records als JSON-Array (Debug-Ausgabe).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.records)
    }
}
