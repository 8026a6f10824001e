//! Marker-Kategorien und ihre Zuordnung zu Icons, Labels und Checkbox-IDs.

use super::MapError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Klassifikation eines Markers. Bestimmt Icon und Filtergruppe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerCategory {
    /// Förderprojekte
    Grants,
    /// Arbeitsgruppen
    Groups,
    /// Schutzprojekte
    Projects,
}

impl MarkerCategory {
    /// Alle Kategorien in kanonischer Reihenfolge (Legende, Filter-State).
    pub const ALL: [MarkerCategory; 3] = [
        MarkerCategory::Grants,
        MarkerCategory::Groups,
        MarkerCategory::Projects,
    ];

    /// Kleingeschriebener Schlüssel, wie er in Konfiguration und Checkbox-Events steht.
    pub fn key(self) -> &'static str {
        match self {
            MarkerCategory::Grants => "grants",
            MarkerCategory::Groups => "groups",
            MarkerCategory::Projects => "projects",
        }
    }

    /// Großgeschriebenes Anzeige-Label für Tooltip und Legende.
    pub fn label(self) -> &'static str {
        match self {
            MarkerCategory::Grants => "Grants",
            MarkerCategory::Groups => "Groups",
            MarkerCategory::Projects => "Projects",
        }
    }

    /// Pfad zum Icon-Asset der Kategorie. Total über alle Varianten.
    pub fn icon_path(self) -> &'static str {
        match self {
            MarkerCategory::Grants => "images/grant.png",
            MarkerCategory::Groups => "images/group.png",
            MarkerCategory::Projects => "images/project.png",
        }
    }

    /// DOM-ID der zugehörigen Legenden-Checkbox (z.B. `grantsbox`).
    pub fn checkbox_id(self) -> String {
        format!("{}box", self.key())
    }

    /// Index in `ALL`, für dichte Per-Kategorie-Tabellen.
    pub(crate) fn index(self) -> usize {
        match self {
            MarkerCategory::Grants => 0,
            MarkerCategory::Groups => 1,
            MarkerCategory::Projects => 2,
        }
    }

    /// Leitet die Kategorie aus einem Icon-Pfad ab (Umkehrung von `icon_path`).
    pub fn from_icon_path(icon: &str) -> Result<Self, MapError> {
        Self::ALL
            .into_iter()
            .find(|c| c.icon_path() == icon)
            .ok_or_else(|| MapError::UnknownCategory(icon.to_string()))
    }
}

impl FromStr for MarkerCategory {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grants" => Ok(MarkerCategory::Grants),
            "groups" => Ok(MarkerCategory::Groups),
            "projects" => Ok(MarkerCategory::Projects),
            other => Err(MapError::UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for MarkerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Icon-Pfad für einen Kategorie-Schlüssel.
///
/// Für die drei bekannten Kategorien immer ein nicht-leerer Pfad,
/// sonst `MapError::UnknownCategory`.
pub fn icon_for(category: &str) -> Result<&'static str, MapError> {
    category.parse::<MarkerCategory>().map(MarkerCategory::icon_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_for_known_categories_is_non_empty() {
        for category in MarkerCategory::ALL {
            let icon = icon_for(category.key()).expect("bekannte Kategorie");
            assert!(!icon.is_empty());
            assert_eq!(icon, category.icon_path());
        }
    }

    #[test]
    fn icon_for_unknown_category_fails() {
        assert_eq!(
            icon_for("frogs"),
            Err(MapError::UnknownCategory("frogs".to_string()))
        );
        // Schlüssel sind case-sensitiv
        assert!(icon_for("Grants").is_err());
        assert!(icon_for("").is_err());
    }

    #[test]
    fn icon_path_roundtrips_through_from_icon_path() {
        for category in MarkerCategory::ALL {
            assert_eq!(
                MarkerCategory::from_icon_path(category.icon_path()),
                Ok(category)
            );
        }
        assert!(MarkerCategory::from_icon_path("images/frog.png").is_err());
    }

    #[test]
    fn checkbox_ids_match_legend_convention() {
        assert_eq!(MarkerCategory::Grants.checkbox_id(), "grantsbox");
        assert_eq!(MarkerCategory::Groups.checkbox_id(), "groupsbox");
        assert_eq!(MarkerCategory::Projects.checkbox_id(), "projectsbox");
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, category) in MarkerCategory::ALL.into_iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }
}
