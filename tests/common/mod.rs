//! Aufzeichnendes `MapSdk` für Integrationstests.

#![allow(dead_code)]

use amphibian_map::{LatLng, MapError, MapOptions, MapSdk, MarkerCategory, MarkerId, Tooltip};

/// Ein aufgezeichneter SDK-Aufruf.
#[derive(Debug, Clone, PartialEq)]
pub enum SdkCall {
    CreateMap {
        container_id: String,
    },
    CreateMarker {
        id: MarkerId,
        position: LatLng,
        category: MarkerCategory,
        icon: &'static str,
    },
    CreateTooltip {
        marker: usize,
        html: String,
        css_class: String,
    },
    SetVisible {
        marker: usize,
        visible: bool,
    },
}

/// Zeichnet alle Aufrufe auf und führt die Sichtbarkeit pro Marker nach.
pub struct RecordingSdk {
    pub containers: Vec<String>,
    pub calls: Vec<SdkCall>,
    pub visible: Vec<bool>,
}

impl RecordingSdk {
    pub fn new() -> Self {
        Self {
            containers: vec!["map_projects".to_string()],
            calls: Vec::new(),
            visible: Vec::new(),
        }
    }

    pub fn tooltips(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SdkCall::CreateTooltip { html, .. } => Some(html.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn created_marker_ids(&self) -> Vec<MarkerId> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SdkCall::CreateMarker { id, .. } => Some(*id),
                _ => None,
            })
            .collect()
    }
}

impl MapSdk for RecordingSdk {
    type Marker = usize;

    fn create_map(&mut self, container_id: &str, _options: &MapOptions) -> Result<(), MapError> {
        if !self.containers.iter().any(|c| c == container_id) {
            return Err(MapError::ContainerMissing(container_id.to_string()));
        }
        self.calls.push(SdkCall::CreateMap {
            container_id: container_id.to_string(),
        });
        Ok(())
    }

    fn create_marker(
        &mut self,
        id: MarkerId,
        position: LatLng,
        category: MarkerCategory,
        icon: &'static str,
    ) -> usize {
        self.calls.push(SdkCall::CreateMarker {
            id,
            position,
            category,
            icon,
        });
        self.visible.push(true);
        self.visible.len() - 1
    }

    fn create_tooltip_overlay(&mut self, marker: usize, tooltip: &Tooltip, css_class: &str) {
        self.calls.push(SdkCall::CreateTooltip {
            marker,
            html: tooltip.to_html(),
            css_class: css_class.to_string(),
        });
    }

    fn set_marker_visible(&mut self, marker: usize, visible: bool) {
        self.calls.push(SdkCall::SetVisible { marker, visible });
        self.visible[marker] = visible;
    }
}
