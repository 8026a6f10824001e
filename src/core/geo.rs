//! Geografische Koordinaten.

use serde::{Deserialize, Serialize};

/// Geografische Position in Grad (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    /// Breitengrad, -90..=90
    pub lat: f64,
    /// Längengrad, -180..=180
    pub lng: f64,
}

impl LatLng {
    /// Erstellt eine Position ohne Prüfung.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Gibt `true` zurück, wenn beide Werte endlich und im gültigen Bereich sind.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ranges() {
        assert!(LatLng::new(0.0, 0.0).is_valid());
        assert!(LatLng::new(-90.0, 180.0).is_valid());
        assert!(LatLng::new(3.387226, -73.07016).is_valid());
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(!LatLng::new(90.5, 0.0).is_valid());
        assert!(!LatLng::new(0.0, -180.1).is_valid());
        assert!(!LatLng::new(f64::NAN, 0.0).is_valid());
        assert!(!LatLng::new(0.0, f64::INFINITY).is_valid());
    }
}
