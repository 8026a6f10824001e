//! Handler für Kategorie-Filter.

use crate::app::sdk::MapSdk;
use crate::app::{AppState, MarkerPresenter};
use crate::core::MarkerCategory;

/// Setzt die Sichtbarkeit einer Kategorie programmatisch (z.B. beim Start).
pub fn set_category_visible<S: MapSdk>(
    state: &mut AppState,
    presenter: &mut MarkerPresenter<S>,
    category: MarkerCategory,
    visible: bool,
) {
    let affected =
        presenter.set_category_visible(&mut state.registry, &mut state.filter, category, visible);
    update_status(state, category, affected);
}

/// Checkbox-Klick in der Legende.
pub fn toggle_filter<S: MapSdk>(
    state: &mut AppState,
    presenter: &mut MarkerPresenter<S>,
    category: MarkerCategory,
    checked: bool,
) {
    let affected =
        presenter.on_filter_toggle(&mut state.registry, &mut state.filter, category, checked);
    update_status(state, category, affected);
}

fn update_status(state: &mut AppState, category: MarkerCategory, affected: usize) {
    state.status_message = if affected == 0 {
        Some(format!("Keine Marker in '{}'", category.label()))
    } else {
        None
    };
}
