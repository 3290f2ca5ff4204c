//! Color palette for the portal theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Card backgrounds
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43); // Modal/popup backgrounds
pub const SIDEBAR_BG: Color = Color::Rgb(14, 17, 22);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;
/// Foreground on accent-filled backgrounds
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Succeeded/published/pass
pub const STATUS_RED: Color = Color::Red; // Failed
pub const STATUS_YELLOW: Color = Color::Yellow; // Running/processing/warn
pub const STATUS_BLUE: Color = Color::Blue; // Info
pub const STATUS_INDIGO: Color = Color::Magenta; // Agents

// --- Inputs ---
pub const INPUT_BG: Color = Color::Rgb(40, 40, 50);
pub const INPUT_ACTIVE_BG: Color = Color::Rgb(60, 60, 80);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_backgrounds_are_rgb() {
        assert!(matches!(INPUT_BG, Color::Rgb(_, _, _)));
        assert!(matches!(INPUT_ACTIVE_BG, Color::Rgb(_, _, _)));
    }

    #[test]
    fn test_active_input_is_distinguishable() {
        assert_ne!(INPUT_BG, INPUT_ACTIVE_BG);
        assert_ne!(BORDER_DIM, BORDER_ACTIVE);
    }
}
