//! Application-Layer: SDK-Schnittstelle, Presenter, Controller, State und Events.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod presenter;
pub mod sdk;
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use presenter::MarkerPresenter;
pub use sdk::MapSdk;
pub use state::AppState;
