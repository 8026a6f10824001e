//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfigurationstypen, die zwischen `app`, `render` und `ui`
//! geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;
pub mod site_config;

pub use options::{ControlPosition, MapOptions, MapType};
pub use site_config::{MarkerEntry, SiteConfig};
