//! Handler module - TEA update function and key mapping
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per UI mode and focus

pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;

// Re-export main entry points
pub use keys::handle_key;
pub use update::update;

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}
