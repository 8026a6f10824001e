//! Handler für Marker-Klicks.

use crate::app::sdk::MapSdk;
use crate::app::{AppState, MarkerPresenter};
use crate::core::MarkerId;
use anyhow::Context;

/// Merkt die URL des Markers zur Navigation durch den Host vor.
pub fn navigate_to_marker<S: MapSdk>(
    state: &mut AppState,
    presenter: &MarkerPresenter<S>,
    id: MarkerId,
) -> anyhow::Result<()> {
    let url = presenter
        .click_target(&state.registry, id)
        .with_context(|| format!("Navigation zu Marker #{} fehlgeschlagen", id))?
        .to_string();
    log::info!("Navigiere zu {}", url);
    state.pending_navigation = Some(url);
    Ok(())
}
