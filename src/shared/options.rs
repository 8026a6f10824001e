//! Karten-Optionen für die Erstellung der Karte über das Mapping-SDK.
//!
//! `MapOptions` enthält alle konfigurierbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::LatLng;
use serde::{Deserialize, Serialize};

// ── Karte ───────────────────────────────────────────────────────────

/// DOM-ID des Karten-Containers.
pub const MAP_CONTAINER_ID: &str = "map_projects";
/// Kartenmittelpunkt beim Start.
pub const MAP_CENTER: LatLng = LatLng::new(0.0, 0.0);
/// Zoomstufe beim Start (Google-Maps-Konvention: Weltbreite = 256 · 2^zoom px).
pub const MAP_ZOOM: u8 = 2;

// ── Tooltip ─────────────────────────────────────────────────────────

/// CSS-Klasse des Tooltip-Overlays.
pub const TOOLTIP_CSS_CLASS: &str = "tooltip";
/// Breite des Kategorie-Icons im Tooltip (px).
pub const TOOLTIP_ICON_WIDTH_PX: u32 = 16;
/// Höhe des Kategorie-Icons im Tooltip (px).
pub const TOOLTIP_ICON_HEIGHT_PX: u32 = 19;

/// Basis-Kartentyp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapType {
    #[default]
    Roadmap,
    Satellite,
    Hybrid,
    Terrain,
}

/// Ankerposition für Karten-Controls (Legende).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    RightBottom,
}

/// Alle Optionen zur Karten-Erstellung.
///
/// Die Standardwerte ergeben eine statische Weltkarte: kein Ziehen,
/// kein Scroll-Zoom, keine eingeblendeten Controls.
///
/// Kartentyp, Interaktions- und Control-Flags werden nur an ein
/// interaktives Mapping-SDK durchgereicht. Die egui-Karte ignoriert sie
/// und warnt beim Erstellen, wenn sie vom Standard abweichen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    /// DOM-ID des Containers, in den die Karte gerendert wird
    pub container_id: String,
    /// Kartenmittelpunkt
    pub center: LatLng,
    /// Zoomstufe
    pub zoom: u8,
    /// Basis-Kartentyp
    pub map_type: MapType,
    /// Doppelklick-Zoom deaktivieren
    pub disable_double_click_zoom: bool,
    /// Karte per Maus verschiebbar
    pub draggable: bool,
    /// Mausrad-Zoom
    pub scrollwheel: bool,
    /// Kartentyp-Auswahl einblenden
    pub map_type_control: bool,
    /// Übersichtskarte einblenden
    pub overview_map_control: bool,
    /// Pan-Control einblenden
    pub pan_control: bool,
    /// Rotations-Control einblenden
    pub rotate_control: bool,
    /// Street-View-Control einblenden
    pub street_view_control: bool,
    /// Zoom-Buttons einblenden
    pub zoom_control: bool,
    /// Position der Filter-Legende
    pub legend_position: ControlPosition,
    /// CSS-Klasse der Tooltip-Overlays
    pub tooltip_css_class: String,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            container_id: MAP_CONTAINER_ID.to_string(),
            center: MAP_CENTER,
            zoom: MAP_ZOOM,
            map_type: MapType::Roadmap,
            disable_double_click_zoom: true,
            draggable: false,
            scrollwheel: false,
            map_type_control: false,
            overview_map_control: false,
            pan_control: false,
            rotate_control: false,
            street_view_control: false,
            zoom_control: false,
            legend_position: ControlPosition::RightBottom,
            tooltip_css_class: TOOLTIP_CSS_CLASS.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_static_world_map() {
        let options = MapOptions::default();
        assert_eq!(options.container_id, "map_projects");
        assert_eq!(options.zoom, 2);
        assert!(!options.draggable);
        assert!(!options.scrollwheel);
        assert!(options.disable_double_click_zoom);
        assert_eq!(options.legend_position, ControlPosition::RightBottom);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let options: MapOptions = toml::from_str("zoom = 3\nmap_type = \"terrain\"").unwrap();
        assert_eq!(options.zoom, 3);
        assert_eq!(options.map_type, MapType::Terrain);
        assert_eq!(options.container_id, MAP_CONTAINER_ID);
        assert_eq!(options.tooltip_css_class, "tooltip");
    }
}
