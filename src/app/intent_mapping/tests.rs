use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{LatLng, MarkerCategory, MarkerRecord};

use super::map_intent_to_commands;

fn state_with_grant() -> AppState {
    let mut state = AppState::new();
    state
        .registry
        .register(MarkerRecord::new(
            MarkerCategory::Grants,
            LatLng::new(30.021841, 31.209703),
            "http://www.amphibians.org/",
        ))
        .unwrap();
    state
}

#[test]
fn filter_toggle_maps_to_toggle_filter() {
    let state = state_with_grant();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::FilterToggled {
            category: MarkerCategory::Grants,
            checked: false,
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::ToggleFilter {
            category: MarkerCategory::Grants,
            checked: false,
        }]
    );
}

#[test]
fn filter_toggle_keeps_checked_state() {
    let state = state_with_grant();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::FilterToggled {
            category: MarkerCategory::Grants,
            checked: true,
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::ToggleFilter {
            category: MarkerCategory::Grants,
            checked: true,
        }]
    );
}

#[test]
fn marker_click_maps_to_navigation() {
    let state = state_with_grant();

    let commands = map_intent_to_commands(&state, AppIntent::MarkerClicked { id: 0 });

    assert_eq!(commands, vec![AppCommand::NavigateToMarker { id: 0 }]);
}

#[test]
fn click_on_hidden_marker_maps_to_nothing() {
    let mut state = state_with_grant();
    state.registry.set_visible_in(MarkerCategory::Grants, false);

    let commands = map_intent_to_commands(&state, AppIntent::MarkerClicked { id: 0 });

    assert!(commands.is_empty());
}

#[test]
fn click_on_unknown_marker_still_maps_to_navigation() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::MarkerClicked { id: 42 });

    assert_eq!(commands, vec![AppCommand::NavigateToMarker { id: 42 }]);
}

#[test]
fn exit_requested_maps_to_request_exit() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ExitRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::RequestExit));
}
