//! Settings loader for `config.toml` and catalog resolution

use super::types::Settings;
use portal_core::prelude::*;
use portal_core::Catalog;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "nyqst-portal";

/// Default location of the settings file: `<config dir>/nyqst-portal/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from a file, falling back to defaults
///
/// A missing or unreadable file is not an error; the portal runs with
/// defaults and logs why.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings from a path the user named explicitly
///
/// Unlike [`load_settings`], the file must exist.
pub fn load_explicit_settings(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        return Err(Error::config_not_found(config_path));
    }
    Ok(load_settings(config_path))
}

/// Build the catalog the portal renders
///
/// `override_path` (from the command line) wins over `settings.catalog.path`.
/// With neither, the seeded sample data is used.
pub fn load_catalog(settings: &Settings, override_path: Option<&Path>) -> Result<Catalog> {
    let path = override_path.or(settings.catalog.path.as_deref());
    match path {
        Some(path) => Catalog::load(path).with_context(|| format!("loading catalog {:?}", path)),
        None => {
            debug!("No catalog fixture configured, using seeded data");
            Ok(Catalog::seeded())
        }
    }
}

/// Write a commented default settings file if none exists
///
/// Returns `true` when a file was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    let default_content = r#"# NYQST portal mock configuration

[ui]
# "unicode" works everywhere; "nerd_fonts" needs a Nerd Font
icons = "unicode"
show_project_description = true
sidebar_width = 24

[behavior]
# projects | apps | studio | documents | crm | models | dashboards | workflows | runs | settings
start_screen = "projects"

[catalog]
# Replace the seeded sample data with a TOML fixture
# path = "catalog.toml"
"#;

    std::fs::write(config_path, default_content)?;
    info!("Created default config at {:?}", config_path);
    Ok(true)
}
