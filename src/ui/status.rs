//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::MarkerCategory;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Markers: {}", state.marker_count()));

            for category in MarkerCategory::ALL {
                ui.separator();
                ui.label(format!(
                    "{}: {}/{}",
                    category.label(),
                    state.registry.visible_count(category),
                    state.registry.records_in(category).count()
                ));
            }

            // Statusnachricht (z.B. leere Kategorie)
            if let Some(ref msg) = state.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "Zoom: {} | Center: ({:.1}, {:.1})",
                    state.options.zoom, state.options.center.lat, state.options.center.lng
                ));
            });
        });
    });
}
