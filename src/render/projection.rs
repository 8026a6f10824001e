//! Web-Mercator-Projektion für die egui-Kartenfläche.
//!
//! Folgt der Kachel-Konvention: bei Zoom `z` ist die Welt
//! `256 · 2^z` Pixel breit, Ursprung oben links.

use crate::core::LatLng;
use glam::DVec2;

/// Kantenlänge einer Kachel in Pixeln.
pub const TILE_SIZE: f64 = 256.0;
/// Grenze der Mercator-Projektion in Grad.
pub const MAX_LATITUDE: f64 = 85.051_128_78;

/// Projektion um einen festen Mittelpunkt.
#[derive(Debug, Clone, Copy)]
pub struct MapProjection {
    center_world: DVec2,
    scale: f64,
}

impl MapProjection {
    /// Erstellt eine Projektion für Mittelpunkt und Zoomstufe.
    pub fn new(center: LatLng, zoom: u8) -> Self {
        let scale = TILE_SIZE * f64::from(1u32 << zoom.min(22));
        Self {
            center_world: world_point(center) * scale,
            scale,
        }
    }

    /// Pixel-Breite der gesamten Welt bei dieser Zoomstufe.
    pub fn world_size(&self) -> f64 {
        self.scale
    }

    /// Projiziert eine Position relativ zur Viewport-Mitte (Pixel, y nach unten).
    pub fn to_screen(&self, position: LatLng, viewport_size: DVec2) -> DVec2 {
        let p = world_point(position) * self.scale;
        p - self.center_world + viewport_size * 0.5
    }

    /// Inverse zu `to_screen`.
    pub fn to_lat_lng(&self, screen: DVec2, viewport_size: DVec2) -> LatLng {
        let p = (screen - viewport_size * 0.5 + self.center_world) / self.scale;
        let lng = p.x * 360.0 - 180.0;
        let n = std::f64::consts::PI * (1.0 - 2.0 * p.y);
        let lat = n.sinh().atan().to_degrees();
        LatLng::new(lat, lng)
    }
}

/// Normierter Weltpunkt in [0, 1]².
fn world_point(position: LatLng) -> DVec2 {
    let lat = position.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (position.lng + 180.0) / 360.0;
    let y = 0.5 - ((1.0 + lat.sin()) / (1.0 - lat.sin())).ln() / (4.0 * std::f64::consts::PI);
    DVec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_center_maps_to_viewport_center() {
        let projection = MapProjection::new(LatLng::new(0.0, 0.0), 2);
        let viewport = DVec2::new(800.0, 600.0);
        let p = projection.to_screen(LatLng::new(0.0, 0.0), viewport);
        assert_relative_eq!(p.x, 400.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_world_size_follows_zoom() {
        assert_relative_eq!(MapProjection::new(LatLng::default(), 0).world_size(), 256.0);
        assert_relative_eq!(MapProjection::new(LatLng::default(), 2).world_size(), 1024.0);
    }

    #[test]
    fn test_east_is_right_and_north_is_up() {
        let projection = MapProjection::new(LatLng::default(), 2);
        let viewport = DVec2::new(1024.0, 1024.0);
        let east = projection.to_screen(LatLng::new(0.0, 90.0), viewport);
        let north = projection.to_screen(LatLng::new(45.0, 0.0), viewport);
        assert_relative_eq!(east.x, 512.0 + 256.0, epsilon = 1e-9);
        assert!(north.y < 512.0);
    }

    #[test]
    fn test_roundtrip_through_screen() {
        let projection = MapProjection::new(LatLng::new(10.0, 20.0), 3);
        let viewport = DVec2::new(640.0, 480.0);
        let original = LatLng::new(-20.154966, 46.492276);
        let back = projection.to_lat_lng(projection.to_screen(original, viewport), viewport);
        assert_relative_eq!(back.lat, original.lat, epsilon = 1e-9);
        assert_relative_eq!(back.lng, original.lng, epsilon = 1e-9);
    }
}
