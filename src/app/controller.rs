//! Application Controller für zentrale Event-Verarbeitung.

use super::sdk::MapSdk;
use super::{AppCommand, AppIntent, AppState, MarkerPresenter};
use anyhow::Context;

/// Orchestriert UI-Events und Presenter-Aufrufe auf den AppState.
pub struct AppController<S: MapSdk> {
    presenter: MarkerPresenter<S>,
}

impl<S: MapSdk> AppController<S> {
    /// Erstellt einen neuen Controller über dem gegebenen SDK.
    pub fn new(sdk: S) -> Self {
        Self {
            presenter: MarkerPresenter::new(sdk),
        }
    }

    /// Erstellt die Karte und mountet alle registrierten Marker.
    ///
    /// Anschließend wird jede Kategorie einmal auf ihren Checkbox-Zustand
    /// gesetzt, damit Legende und Marker übereinstimmen.
    pub fn start(&mut self, state: &mut AppState) -> anyhow::Result<()> {
        self.presenter
            .create_map(&state.options)
            .context("Karte konnte nicht erstellt werden")?;
        self.presenter
            .mount(&state.registry)
            .context("Marker konnten nicht gemountet werden")?;

        for category in crate::core::MarkerCategory::ALL {
            let visible = state.filter.is_checked(category);
            self.handle_command(state, AppCommand::SetCategoryVisible { category, visible })?;
        }
        Ok(())
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            AppCommand::SetCategoryVisible { category, visible } => {
                handlers::filter::set_category_visible(state, &mut self.presenter, category, visible)
            }
            AppCommand::ToggleFilter { category, checked } => {
                handlers::filter::toggle_filter(state, &mut self.presenter, category, checked)
            }
            AppCommand::NavigateToMarker { id } => {
                handlers::navigation::navigate_to_marker(state, &self.presenter, id)?
            }
            AppCommand::RequestExit => handlers::lifecycle::request_exit(state),
        }

        Ok(())
    }

    pub fn presenter(&self) -> &MarkerPresenter<S> {
        &self.presenter
    }

    /// Zugriff auf das SDK, z.B. zum Zeichnen durch den Host.
    pub fn sdk(&self) -> &S {
        self.presenter.sdk()
    }

    pub fn sdk_mut(&mut self) -> &mut S {
        self.presenter.sdk_mut()
    }
}
