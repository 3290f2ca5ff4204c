//! Configuration file parsing for the portal
//!
//! Supports:
//! - `config.toml` - UI, behavior and catalog settings

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_catalog, load_explicit_settings, load_settings,
};
pub use types::*;
