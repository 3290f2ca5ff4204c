//! portal-app - Application state and update logic for the NYQST portal mock
//!
//! This crate implements the TEA (The Elm Architecture) pattern: [`AppState`]
//! is the model, [`handler::update`] the update function, and the TUI crate
//! supplies the view. It also owns settings loading and the OS signal
//! listener.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod nav;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::UpdateResult;
pub use input_key::InputKey;
pub use message::Message;
pub use nav::NavKey;
pub use state::AppState;
