//! Handler für Anwendungssteuerung.

use crate::app::AppState;

/// Signalisiert dem Host, die Anwendung zu beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
