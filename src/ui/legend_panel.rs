//! Filter-Legende als egui-Overlay über der Karte.

use crate::app::{AppIntent, AppState};
use crate::render::build_legend;
use crate::shared::ControlPosition;

use super::icons::category_icon_image;

fn anchor_for(position: ControlPosition) -> (egui::Align2, egui::Vec2) {
    match position {
        ControlPosition::TopLeft => (egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0)),
        ControlPosition::TopRight => (egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 10.0)),
        ControlPosition::BottomLeft => (egui::Align2::LEFT_BOTTOM, egui::vec2(10.0, -10.0)),
        ControlPosition::RightBottom => (egui::Align2::RIGHT_BOTTOM, egui::vec2(-10.0, -10.0)),
    }
}

/// Rendert die Legende und gibt erzeugte Events zurück.
pub fn render_legend(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let legend = build_legend(&state.filter);
    let (align, offset) = anchor_for(state.options.legend_position);

    egui::Area::new(egui::Id::new("map_legend"))
        .anchor(align, offset)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.strong(legend.heading);
                ui.horizontal(|ui| {
                    for entry in &legend.entries {
                        let mut checked = entry.checked;
                        if ui.checkbox(&mut checked, "").changed() {
                            events.push(AppIntent::FilterToggled {
                                category: entry.category,
                                checked,
                            });
                        }
                        ui.add(category_icon_image(entry.category));
                        ui.label(entry.label);
                        ui.add_space(8.0);
                    }
                });
            });
        });

    events
}
