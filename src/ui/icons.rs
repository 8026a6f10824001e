//! Eingebettete Kategorie-Icons für Legende und Tooltips.

use crate::core::MarkerCategory;

/// Darstellungsgröße eines Kategorie-Icons (px).
pub const CATEGORY_ICON_SIZE: egui::Vec2 = egui::vec2(16.0, 19.0);

/// Gibt die `ImageSource` für das Icon einer Kategorie zurück.
pub fn category_icon(category: MarkerCategory) -> egui::ImageSource<'static> {
    match category {
        MarkerCategory::Grants => egui::include_image!("../../assets/images/grant.png"),
        MarkerCategory::Groups => egui::include_image!("../../assets/images/group.png"),
        MarkerCategory::Projects => egui::include_image!("../../assets/images/project.png"),
    }
}

/// Icon-Widget in fester Größe.
pub fn category_icon_image(category: MarkerCategory) -> egui::Image<'static> {
    egui::Image::new(category_icon(category)).fit_to_exact_size(CATEGORY_ICON_SIZE)
}
