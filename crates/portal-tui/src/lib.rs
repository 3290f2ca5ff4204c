//! portal-tui - Terminal UI for the NYQST portal mock
//!
//! Renders [`portal_app::AppState`] with ratatui: sidebar, top bar, the active
//! screen and a key hint footer. [`run`] owns the terminal and event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
