//! Application State: Registry, Filter-State und Host-Signale.

use crate::app::CommandLog;
use crate::core::{CategoryFilterState, MarkerRegistry};
use crate::shared::MapOptions;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle Marker in Registrierungsreihenfolge
    pub registry: MarkerRegistry,
    /// Checkbox-Zustand der Legende
    pub filter: CategoryFilterState,
    /// Optionen, mit denen die Karte erstellt wurde
    pub options: MapOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// URL, die der Host als nächstes öffnen soll
    pub pending_navigation: Option<String>,
    /// Statusnachricht für die Status-Bar
    pub status_message: Option<String>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_registry(MarkerRegistry::new(), MapOptions::default())
    }

    /// Erstellt den App-State aus einer befüllten Registry.
    pub fn with_registry(registry: MarkerRegistry, options: MapOptions) -> Self {
        Self {
            registry,
            filter: CategoryFilterState::new(),
            options,
            command_log: CommandLog::new(),
            pending_navigation: None,
            status_message: None,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Marker zurück (für UI-Anzeige)
    pub fn marker_count(&self) -> usize {
        self.registry.len()
    }

    /// Übernimmt eine ausstehende Navigation (Host-Seite).
    pub fn take_pending_navigation(&mut self) -> Option<String> {
        self.pending_navigation.take()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
