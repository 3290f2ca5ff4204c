//! Configuration types for the portal
//!
//! Defines `Settings` and its sections as read from `config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::nav::NavKey;

/// Global application settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,
}

/// Icon rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals (default)
    #[default]
    Unicode,
    /// Nerd Font glyphs, requires a Nerd Font installed in the terminal
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub icons: IconMode,

    /// Show the active project's description in the top bar
    #[serde(default = "default_true")]
    pub show_project_description: bool,

    /// Sidebar width in columns
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            show_project_description: true,
            sidebar_width: default_sidebar_width(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_sidebar_width() -> u16 {
    24
}

/// Behavior settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Section shown at startup
    #[serde(default)]
    pub start_screen: NavKey,
}

/// Catalog source settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// TOML fixture replacing the seeded catalog
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.ui.icons, IconMode::Unicode);
        assert!(settings.ui.show_project_description);
        assert_eq!(settings.ui.sidebar_width, 24);
        assert_eq!(settings.behavior.start_screen, NavKey::Projects);
        assert!(settings.catalog.path.is_none());
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [ui]
            icons = "nerd_fonts"
            "#,
        )
        .unwrap();
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert!(settings.ui.show_project_description);
        assert_eq!(settings.behavior.start_screen, NavKey::Projects);
    }

    #[test]
    fn test_start_screen_parses_lowercase() {
        let settings: Settings = toml::from_str(
            r#"
            [behavior]
            start_screen = "workflows"
            "#,
        )
        .unwrap();
        assert_eq!(settings.behavior.start_screen, NavKey::Workflows);
    }

    #[test]
    fn test_icon_mode_display() {
        assert_eq!(IconMode::Unicode.to_string(), "unicode");
        assert_eq!(IconMode::NerdFonts.to_string(), "nerd_fonts");
    }
}
