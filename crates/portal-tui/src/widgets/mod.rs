//! Custom widget components

pub mod common;
mod key_hints;
pub mod modal_overlay;
mod project_picker;
pub mod screens;
mod sidebar;
mod top_bar;

pub use key_hints::KeyHints;
pub use project_picker::ProjectPicker;
pub use screens::{AppDetail, ScreenView};
pub use sidebar::Sidebar;
pub use top_bar::TopBar;
