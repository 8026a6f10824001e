//! Core-Domänentypen: Kategorien, Koordinaten, Marker-Records, Registry, Filter-State.

pub mod category;
pub mod error;
pub mod filter_state;
pub mod geo;
pub mod marker_record;
pub mod registry;

pub use category::{icon_for, MarkerCategory};
pub use error::MapError;
pub use filter_state::CategoryFilterState;
pub use geo::LatLng;
pub use marker_record::{MarkerId, MarkerRecord};
pub use registry::MarkerRegistry;
