//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::FilterToggled { category, checked } => {
            vec![AppCommand::ToggleFilter { category, checked }]
        }
        AppIntent::MarkerClicked { id } => {
            // Ausgeblendete Marker sind nicht klickbar
            if state.registry.get(id).is_some_and(|r| !r.is_visible()) {
                log::debug!("Klick auf ausgeblendeten Marker #{} ignoriert", id);
                return Vec::new();
            }
            vec![AppCommand::NavigateToMarker { id }]
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
