//! Presentation-Adapter: übersetzt Registry-Records in SDK-Marker und
//! setzt Filter-Aktionen auf Marker und Legende um.

use super::sdk::MapSdk;
use crate::core::{CategoryFilterState, MapError, MarkerCategory, MarkerId, MarkerRegistry};
use crate::render::render_tooltip;
use crate::shared::MapOptions;

/// Brücke zwischen `MarkerRegistry` und einem konkreten `MapSdk`.
///
/// Hält die SDK-Handles aller gemounteten Marker, indiziert über `MarkerId`.
pub struct MarkerPresenter<S: MapSdk> {
    sdk: S,
    tooltip_css_class: Option<String>,
    markers: Vec<S::Marker>,
    mounted: bool,
}

impl<S: MapSdk> MarkerPresenter<S> {
    /// Erstellt einen Presenter ohne Karte.
    pub fn new(sdk: S) -> Self {
        Self {
            sdk,
            tooltip_css_class: None,
            markers: Vec::new(),
            mounted: false,
        }
    }

    /// Erstellt die Karte im konfigurierten Container.
    pub fn create_map(&mut self, options: &MapOptions) -> Result<(), MapError> {
        self.sdk.create_map(&options.container_id, options)?;
        self.tooltip_css_class = Some(options.tooltip_css_class.clone());
        log::info!(
            "Karte in '{}' erstellt (Zoom {})",
            options.container_id,
            options.zoom
        );
        Ok(())
    }

    /// Erstellt Marker und Tooltip für jeden Record, in Registrierungsreihenfolge.
    ///
    /// Darf genau einmal aufgerufen werden. Records, die bereits ausgeblendet
    /// sind, werden direkt nach dem Erstellen verborgen.
    pub fn mount(&mut self, registry: &MarkerRegistry) -> Result<usize, MapError> {
        let css_class = self
            .tooltip_css_class
            .clone()
            .ok_or(MapError::MapNotCreated)?;
        if self.mounted {
            return Err(MapError::AlreadyMounted);
        }

        self.markers.reserve(registry.len());
        for (id, record) in registry.iter() {
            let category = record.category();
            let icon = MarkerRegistry::icon_for(category);
            let marker = self
                .sdk
                .create_marker(id, record.position(), category, icon);
            self.sdk
                .create_tooltip_overlay(marker, &render_tooltip(record), &css_class);
            if !record.is_visible() {
                self.sdk.set_marker_visible(marker, false);
            }
            self.markers.push(marker);
        }
        self.mounted = true;

        log::info!("{} Marker gemountet", self.markers.len());
        Ok(self.markers.len())
    }

    /// Setzt die Sichtbarkeit aller Records einer Kategorie und synchronisiert
    /// die SDK-Marker sowie die Legenden-Checkbox.
    ///
    /// Gibt die Anzahl betroffener Records zurück. Ohne passende Records
    /// (oder vor `mount`) ändert sich nur die Checkbox.
    pub fn set_category_visible(
        &mut self,
        registry: &mut MarkerRegistry,
        filter: &mut CategoryFilterState,
        category: MarkerCategory,
        visible: bool,
    ) -> usize {
        let ids = registry.set_visible_in(category, visible);
        for &id in &ids {
            if let Some(&marker) = self.markers.get(id) {
                self.sdk.set_marker_visible(marker, visible);
            }
        }
        filter.set_checked(category, visible);

        log::info!(
            "Kategorie '{}' {} ({} Marker)",
            category,
            if visible { "eingeblendet" } else { "ausgeblendet" },
            ids.len()
        );
        ids.len()
    }

    /// Einstiegspunkt für einen Checkbox-Klick.
    pub fn on_filter_toggle(
        &mut self,
        registry: &mut MarkerRegistry,
        filter: &mut CategoryFilterState,
        category: MarkerCategory,
        checked: bool,
    ) -> usize {
        self.set_category_visible(registry, filter, category, checked)
    }

    /// Wie `on_filter_toggle`, aber mit dem Kategorie-Schlüssel der Checkbox.
    pub fn on_filter_toggle_key(
        &mut self,
        registry: &mut MarkerRegistry,
        filter: &mut CategoryFilterState,
        category: &str,
        checked: bool,
    ) -> Result<usize, MapError> {
        let category: MarkerCategory = category.parse()?;
        Ok(self.on_filter_toggle(registry, filter, category, checked))
    }

    /// Navigationsziel eines angeklickten Markers.
    pub fn click_target<'r>(
        &self,
        registry: &'r MarkerRegistry,
        id: MarkerId,
    ) -> Result<&'r str, MapError> {
        registry
            .get(id)
            .map(|r| r.url())
            .ok_or(MapError::UnknownMarker(id))
    }

    /// SDK-Handle eines gemounteten Markers.
    pub fn marker(&self, id: MarkerId) -> Option<S::Marker> {
        self.markers.get(id).copied()
    }

    /// Gibt zurück, ob `mount` bereits gelaufen ist.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn sdk(&self) -> &S {
        &self.sdk
    }

    pub fn sdk_mut(&mut self) -> &mut S {
        &mut self.sdk
    }
}
