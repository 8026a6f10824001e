//! Amphibian Map Library.
//! Marker-Registry, Filter und Presenter als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, MapSdk, MarkerPresenter};
pub use core::{
    icon_for, CategoryFilterState, LatLng, MapError, MarkerCategory, MarkerId, MarkerRecord,
    MarkerRegistry,
};
pub use render::{build_legend, render_tooltip, Legend, Tooltip, TooltipSection};
pub use shared::{MapOptions, MarkerEntry, SiteConfig};
