//! Reine Render-Schritte: Tooltip-Markup, Legende, Projektion.

mod html;
pub mod legend;
pub mod projection;
pub mod tooltip;

pub use legend::{build_legend, Legend, LegendEntry};
pub use projection::MapProjection;
pub use tooltip::{render_tooltip, Tooltip, TooltipSection};
