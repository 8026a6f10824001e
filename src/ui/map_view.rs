//! egui-Kartenfläche als Implementierung von `MapSdk`.
//!
//! Hält Marker und Tooltips retained, zeichnet sie jedes Frame auf eine
//! statische Weltkarte (Gradnetz, keine Kacheln) und meldet Klicks als
//! `AppIntent::MarkerClicked` zurück.

use crate::app::{AppIntent, MapSdk};
use crate::core::{LatLng, MapError, MarkerCategory, MarkerId};
use crate::render::{MapProjection, Tooltip, TooltipSection};
use crate::shared::{MapOptions, MapType};
use glam::DVec2;

use super::icons::category_icon_image;

/// Radius eines Marker-Punkts in Pixeln.
const MARKER_RADIUS_PX: f32 = 6.0;
/// Maximale Breite eines Tooltips in Pixeln.
const TOOLTIP_MAX_WIDTH_PX: f32 = 180.0;
/// Abstand der Gradnetz-Linien in Grad.
const GRATICULE_STEP_DEG: f64 = 30.0;

const WATER_COLOR: egui::Color32 = egui::Color32::from_rgb(170, 211, 223);
const GRATICULE_COLOR: egui::Color32 = egui::Color32::from_rgb(140, 180, 195);

/// Füllfarbe eines Markers je Kategorie.
fn category_color(category: MarkerCategory) -> egui::Color32 {
    match category {
        MarkerCategory::Grants => egui::Color32::from_rgb(230, 160, 30),
        MarkerCategory::Groups => egui::Color32::from_rgb(60, 140, 220),
        MarkerCategory::Projects => egui::Color32::from_rgb(70, 170, 80),
    }
}

/// Handle eines Markers der egui-Karte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EguiMarker(usize);

#[derive(Debug, Clone)]
struct MarkerShape {
    id: MarkerId,
    position: LatLng,
    category: MarkerCategory,
    tooltip: Option<Tooltip>,
    visible: bool,
}

/// Kartenfläche für den egui-Host.
pub struct EguiMapSdk {
    container_id: String,
    options: Option<MapOptions>,
    markers: Vec<MarkerShape>,
}

impl EguiMapSdk {
    /// Erstellt die Fläche für den angegebenen Container.
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            options: None,
            markers: Vec::new(),
        }
    }

    /// Anzahl aktuell sichtbarer Marker.
    pub fn visible_marker_count(&self) -> usize {
        self.markers.iter().filter(|m| m.visible).count()
    }

    /// Zeichnet Karte, Marker und Tooltips und sammelt Klick-Intents.
    pub fn show(&self, ui: &mut egui::Ui) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let Some(options) = &self.options else {
            return events;
        };

        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        let projection = MapProjection::new(options.center, options.zoom);
        let viewport = DVec2::new(f64::from(rect.width()), f64::from(rect.height()));
        let to_screen = |position: LatLng| {
            let p = projection.to_screen(position, viewport);
            rect.min + egui::vec2(p.x as f32, p.y as f32)
        };

        painter.rect_filled(rect, 0.0, WATER_COLOR);
        draw_graticule(&painter, &to_screen);

        for shape in self.markers.iter().filter(|m| m.visible) {
            let center = to_screen(shape.position);
            if !rect.contains(center) {
                continue;
            }

            painter.circle(
                center,
                MARKER_RADIUS_PX,
                category_color(shape.category),
                egui::Stroke::new(1.5, egui::Color32::WHITE),
            );

            let hit_rect =
                egui::Rect::from_center_size(center, egui::Vec2::splat(MARKER_RADIUS_PX * 3.0));
            let response = ui
                .interact(
                    hit_rect,
                    ui.id().with(("marker", shape.id)),
                    egui::Sense::click(),
                )
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            if response.clicked() {
                events.push(AppIntent::MarkerClicked { id: shape.id });
            }

            if let Some(tooltip) = &shape.tooltip {
                show_tooltip(ui.ctx(), shape, center, tooltip);
            }
        }

        events
    }
}

impl MapSdk for EguiMapSdk {
    type Marker = EguiMarker;

    fn create_map(&mut self, container_id: &str, options: &MapOptions) -> Result<(), MapError> {
        if container_id != self.container_id {
            return Err(MapError::ContainerMissing(container_id.to_string()));
        }
        for name in ignored_options(options) {
            log::warn!("Option '{}' wird von der statischen Karte ignoriert", name);
        }
        self.options = Some(options.clone());
        Ok(())
    }

    fn create_marker(
        &mut self,
        id: MarkerId,
        position: LatLng,
        category: MarkerCategory,
        _icon: &'static str,
    ) -> EguiMarker {
        self.markers.push(MarkerShape {
            id,
            position,
            category,
            tooltip: None,
            visible: true,
        });
        EguiMarker(self.markers.len() - 1)
    }

    fn create_tooltip_overlay(&mut self, marker: EguiMarker, tooltip: &Tooltip, _css_class: &str) {
        if let Some(shape) = self.markers.get_mut(marker.0) {
            shape.tooltip = Some(tooltip.clone());
        }
    }

    fn set_marker_visible(&mut self, marker: EguiMarker, visible: bool) {
        if let Some(shape) = self.markers.get_mut(marker.0) {
            shape.visible = visible;
        }
    }
}

/// Optionen, die nur ein interaktives Mapping-SDK auswertet.
///
/// Liefert die Namen aller Werte, die vom statischen Standard abweichen.
fn ignored_options(options: &MapOptions) -> Vec<&'static str> {
    let checks = [
        ("map_type", options.map_type != MapType::Roadmap),
        ("draggable", options.draggable),
        ("scrollwheel", options.scrollwheel),
        ("disable_double_click_zoom", !options.disable_double_click_zoom),
        ("map_type_control", options.map_type_control),
        ("overview_map_control", options.overview_map_control),
        ("pan_control", options.pan_control),
        ("rotate_control", options.rotate_control),
        ("street_view_control", options.street_view_control),
        ("zoom_control", options.zoom_control),
    ];
    checks
        .into_iter()
        .filter(|(_, set)| *set)
        .map(|(name, _)| name)
        .collect()
}

fn draw_graticule(painter: &egui::Painter, to_screen: &impl Fn(LatLng) -> egui::Pos2) {
    let stroke = egui::Stroke::new(1.0, GRATICULE_COLOR);
    let mut lng = -180.0;
    while lng <= 180.0 {
        painter.line_segment(
            [to_screen(LatLng::new(80.0, lng)), to_screen(LatLng::new(-80.0, lng))],
            stroke,
        );
        lng += GRATICULE_STEP_DEG;
    }
    let mut lat = -60.0;
    while lat <= 60.0 {
        painter.line_segment(
            [to_screen(LatLng::new(lat, -180.0)), to_screen(LatLng::new(lat, 180.0))],
            stroke,
        );
        lat += GRATICULE_STEP_DEG;
    }
}

/// Tooltip ist dauerhaft sichtbar, nicht an Hover gebunden.
fn show_tooltip(ctx: &egui::Context, shape: &MarkerShape, anchor: egui::Pos2, tooltip: &Tooltip) {
    egui::Area::new(egui::Id::new(("tooltip", shape.id)))
        .fixed_pos(anchor + egui::vec2(MARKER_RADIUS_PX + 4.0, -MARKER_RADIUS_PX))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_max_width(TOOLTIP_MAX_WIDTH_PX);
                ui.horizontal(|ui| {
                    for section in &tooltip.sections {
                        match section {
                            TooltipSection::CategoryIcon { .. } => {
                                ui.add(category_icon_image(shape.category));
                            }
                            TooltipSection::CategoryLabel(label) => {
                                ui.label(egui::RichText::new(*label).small());
                            }
                            _ => {}
                        }
                    }
                });
                for section in &tooltip.sections {
                    match section {
                        TooltipSection::Title(title) => {
                            ui.heading(title);
                        }
                        TooltipSection::Image { src } => {
                            ui.add(egui::Image::new(src.clone()).max_width(TOOLTIP_MAX_WIDTH_PX));
                        }
                        TooltipSection::Body(body) => {
                            ui.label(body);
                        }
                        TooltipSection::CategoryIcon { .. } | TooltipSection::CategoryLabel(_) => {}
                    }
                }
            });
        });
}
