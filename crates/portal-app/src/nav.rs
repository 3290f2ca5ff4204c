//! Sidebar sections

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the ten fixed sidebar sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavKey {
    #[default]
    Projects,
    Apps,
    Studio,
    Documents,
    Crm,
    Models,
    Dashboards,
    Workflows,
    Runs,
    Settings,
}

impl NavKey {
    /// Sidebar order
    pub const ALL: [NavKey; 10] = [
        NavKey::Projects,
        NavKey::Apps,
        NavKey::Studio,
        NavKey::Documents,
        NavKey::Crm,
        NavKey::Models,
        NavKey::Dashboards,
        NavKey::Workflows,
        NavKey::Runs,
        NavKey::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NavKey::Projects => "projects",
            NavKey::Apps => "apps",
            NavKey::Studio => "studio",
            NavKey::Documents => "documents",
            NavKey::Crm => "crm",
            NavKey::Models => "models",
            NavKey::Dashboards => "dashboards",
            NavKey::Workflows => "workflows",
            NavKey::Runs => "runs",
            NavKey::Settings => "settings",
        }
    }

    /// Label shown in the sidebar
    pub fn label(&self) -> &'static str {
        match self {
            NavKey::Projects => "Projects",
            NavKey::Apps => "Apps",
            NavKey::Studio => "Studio",
            NavKey::Documents => "Documents",
            NavKey::Crm => "CRM",
            NavKey::Models => "Models",
            NavKey::Dashboards => "Dashboards",
            NavKey::Workflows => "Workflows",
            NavKey::Runs => "Runs",
            NavKey::Settings => "Settings",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|k| k == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<NavKey> {
        Self::ALL.get(index).copied()
    }

    /// Section bound to a digit key: `1`..`9` then `0` for the tenth
    pub fn from_digit(c: char) -> Option<NavKey> {
        match c {
            '0' => Some(NavKey::Settings),
            '1'..='9' => Self::from_index(c as usize - '1' as usize),
            _ => None,
        }
    }

    /// Next section, wrapping around
    pub fn next(&self) -> NavKey {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section, wrapping around
    pub fn prev(&self) -> NavKey {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for NavKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == needle)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|k| k.as_str()).collect();
                format!("unknown section '{}', expected one of: {}", s, valid.join(", "))
            })
    }
}
