//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` — safe characters that work in all terminals
//! - `IconMode::NerdFonts` — rich Nerd Font glyphs (requires Nerd Font installed)

use portal_app::config::IconMode;
use portal_app::NavKey;

/// Runtime icon resolver.
///
/// Created from `IconMode`, returns the appropriate icon string for each
/// icon slot based on the configured mode.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Icon shown next to a sidebar section
    pub fn nav(&self, key: NavKey) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => match key {
                NavKey::Projects => "\u{f07b}",   // nf-fa-folder
                NavKey::Apps => "\u{f009}",       // nf-fa-th_large
                NavKey::Studio => "\u{f1fc}",     // nf-fa-paint_brush
                NavKey::Documents => "\u{f15b}",  // nf-fa-file
                NavKey::Crm => "\u{f0c0}",        // nf-fa-users
                NavKey::Models => "\u{f1b3}",     // nf-fa-cubes
                NavKey::Dashboards => "\u{f080}", // nf-fa-bar_chart
                NavKey::Workflows => "\u{f0e8}",  // nf-fa-sitemap
                NavKey::Runs => "\u{f1da}",       // nf-fa-history
                NavKey::Settings => "\u{f013}",   // nf-fa-cog
            },
            IconMode::Unicode => match key {
                NavKey::Projects => "\u{25a3}",   // ▣
                NavKey::Apps => "\u{25a6}",       // ▦
                NavKey::Studio => "\u{270e}",     // ✎
                NavKey::Documents => "\u{2261}",  // ≡
                NavKey::Crm => "\u{263a}",        // ☺
                NavKey::Models => "\u{25c7}",     // ◇
                NavKey::Dashboards => "\u{2630}", // ☰
                NavKey::Workflows => "\u{21c4}",  // ⇄
                NavKey::Runs => "\u{25b7}",       // ▷
                NavKey::Settings => "\u{2699}",   // ⚙
            },
        }
    }

    pub fn brand(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0e7}", // nf-fa-bolt
            IconMode::Unicode => "\u{25c6}",   // ◆
        }
    }

    pub fn search(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f002}", // nf-fa-search
            IconMode::Unicode => "\u{2315}",   // ⌕
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn play(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f04b}", // nf-fa-play
            IconMode::Unicode => "\u{25b6}",   // ▶
        }
    }

    pub fn plus(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f067}", // nf-fa-plus
            IconMode::Unicode => "+",
        }
    }

    pub fn chevron_right(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{203a}",   // ›
        }
    }

    pub fn chevron_down(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f078}", // nf-fa-chevron_down
            IconMode::Unicode => "\u{2304}",   // ⌄
        }
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_nav_icons_are_distinct() {
        let icons = IconSet::new(IconMode::Unicode);
        let mut seen: Vec<&str> = NavKey::ALL.iter().map(|k| icons.nav(*k)).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), NavKey::ALL.len());
    }

    #[test]
    fn test_nerd_font_icons_differ_from_unicode() {
        let unicode = IconSet::new(IconMode::Unicode);
        let nerd = IconSet::new(IconMode::NerdFonts);
        assert_ne!(unicode.search(), nerd.search());
        assert_ne!(unicode.alert(), nerd.alert());
        assert_ne!(unicode.nav(NavKey::Settings), nerd.nav(NavKey::Settings));
    }

    #[test]
    fn test_default_is_unicode() {
        assert_eq!(IconSet::default().plus(), "+");
    }
}
