//! Statische Marker-Konfiguration (TOML).
//!
//! Die Binary bringt die Standard-Marker eingebettet mit. Eine Datei
//! `amphibian_map.toml` neben der Binary ersetzt sie vollständig.

use super::MapOptions;
use crate::core::{LatLng, MapError, MarkerCategory, MarkerRecord, MarkerRegistry};
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Eingebettete Standard-Konfiguration.
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../assets/amphibian_map.toml");

/// Ein Marker-Eintrag, wie er in der Konfiguration steht.
///
/// `category` bleibt ein String, damit unbekannte Werte erst bei der
/// Registrierung auffallen und dort als `UnknownCategory` gemeldet werden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerEntry {
    pub category: String,
    pub lat: f64,
    pub lng: f64,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl MarkerEntry {
    /// Konvertiert den Eintrag in einen typisierten Record.
    pub fn to_record(&self) -> Result<MarkerRecord, MapError> {
        let category: MarkerCategory = self.category.parse()?;
        let mut record =
            MarkerRecord::new(category, LatLng::new(self.lat, self.lng), self.url.clone());
        if let Some(title) = &self.title {
            record = record.with_title(title.clone());
        }
        if let Some(image) = &self.image {
            record = record.with_image(image.clone());
        }
        if let Some(body) = &self.body {
            record = record.with_body(body.clone());
        }
        Ok(record)
    }
}

/// Gesamte Seiten-Konfiguration: Karten-Optionen plus Marker-Liste.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub map: MapOptions,
    #[serde(default)]
    pub markers: Vec<MarkerEntry>,
}

impl SiteConfig {
    /// Parst eine Konfiguration aus TOML-Text.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("Marker-Konfiguration ist kein gueltiges TOML")
    }

    /// Die eingebettete Standard-Konfiguration.
    pub fn embedded_default() -> anyhow::Result<Self> {
        Self::from_toml_str(DEFAULT_CONFIG_TOML)
    }

    /// Lädt die Konfiguration aus einer Datei. Bei Fehler: eingebettete Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(config) => {
                    log::info!("Konfiguration geladen aus: {}", path.display());
                    Ok(config)
                }
                Err(e) => {
                    log::warn!(
                        "Konfigurationsdatei fehlerhaft, verwende Standardwerte: {:#}",
                        e
                    );
                    Self::embedded_default()
                }
            },
            Err(_) => {
                log::info!("Keine Konfigurationsdatei gefunden, verwende Standardwerte");
                Self::embedded_default()
            }
        }
    }

    /// Speichert die Konfiguration als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Konfiguration gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Konfigurationsdatei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("amphibian-map"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("amphibian_map.toml")
    }

    /// Registriert alle Marker in Konfigurationsreihenfolge.
    ///
    /// Bricht beim ersten ungültigen Eintrag ab; eine halb befüllte
    /// Registry wird nie zurückgegeben.
    pub fn build_registry(&self) -> Result<MarkerRegistry, MapError> {
        let mut registry = MarkerRegistry::new();
        for entry in &self.markers {
            registry.register(entry.to_record()?)?;
        }
        log::info!("{} Marker registriert", registry.len());
        Ok(registry)
    }
}
