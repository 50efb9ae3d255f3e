//! recipe-app - Application state and orchestration for the recipe screen
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the model, [`Message`] the events, and
//! [`handler::update`] the only place state changes. It also owns settings
//! loading, the serving counter, scroll bookkeeping and the action hooks the
//! runner dispatches to.

pub mod config;
pub mod counter;
pub mod handler;
pub mod hooks;
pub mod input_key;
pub mod message;
pub mod scroll_state;
pub mod signals;
pub mod state;

// Re-export primary types
pub use counter::ServingCounter;
pub use handler::{update, UpdateAction, UpdateResult};
pub use hooks::{HookEvent, LoggingHooks, RecipeHooks};
pub use input_key::InputKey;
pub use message::Message;
pub use scroll_state::ScrollState;
pub use state::{AppPhase, AppState};
