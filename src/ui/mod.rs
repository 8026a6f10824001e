//! UI-Layer mit egui: Kartenfläche, Legende, Status-Bar.

pub mod icons;
pub mod legend_panel;
pub mod map_view;
pub mod status;

pub use icons::{category_icon, category_icon_image};
pub use legend_panel::render_legend;
pub use map_view::{EguiMapSdk, EguiMarker};
pub use status::render_status_bar;
