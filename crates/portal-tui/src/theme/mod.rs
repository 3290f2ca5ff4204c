//! Centralized theme for the portal TUI.
//!
//! This module provides:
//! - `palette` — Raw color constants
//! - `styles` — Semantic style builders and status badges
//! - `icons` — Nerd Font glyphs with Unicode fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
