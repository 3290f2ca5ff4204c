//! Semantic style builders for the portal theme.

use portal_core::{
    AppStatus, AppType, ModelStatus, ProgressStatus, RunStatus, ValidationStatus, VersionStatus,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright_bold() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Selection styles ---

/// "Black on Cyan" - focused+selected rows and the active nav item
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Selected but not focused: accent text, no fill
pub fn unfocused_selected() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Input styles ---
pub fn input(focused: bool, editing: bool) -> Style {
    let bg = if focused {
        palette::INPUT_ACTIVE_BG
    } else {
        palette::INPUT_BG
    };
    let style = Style::default().fg(palette::TEXT_PRIMARY).bg(bg);
    if editing {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

/// Titled card used by every screen
pub fn card(title: &str, focused: bool) -> Block<'_> {
    glass_block(focused)
        .title(Span::styled(format!(" {} ", title), text_bright_bold()))
        .style(Style::default().bg(palette::CARD_BG))
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(format!(" {} ", title), accent_bold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Badges ---

/// Bracketed label in the given style, e.g. `[SUCCEEDED]`
pub fn badge(label: &str, style: Style) -> Span<'static> {
    Span::styled(format!("[{}]", label), style)
}

/// Inert button; rendered as a label, never bound to a key
pub fn button(label: &str) -> Span<'static> {
    Span::styled(format!("‹ {} ›", label), text_secondary())
}

fn colored(color: ratatui::style::Color) -> Style {
    Style::default().fg(color)
}

/// Attention and warning markers
pub fn warning() -> Style {
    colored(palette::STATUS_YELLOW)
}

pub fn app_type_style(app_type: AppType) -> Style {
    match app_type {
        AppType::View => colored(palette::STATUS_BLUE),
        AppType::Agent => colored(palette::STATUS_INDIGO),
        AppType::Analysis => colored(palette::ACCENT),
        AppType::Workflow => colored(palette::STATUS_YELLOW),
    }
}

pub fn app_status_style(status: AppStatus) -> Style {
    match status {
        AppStatus::Published => colored(palette::STATUS_GREEN),
        AppStatus::Draft => colored(palette::STATUS_YELLOW),
        AppStatus::Archived => text_muted(),
    }
}

pub fn version_status_style(status: VersionStatus) -> Style {
    match status {
        VersionStatus::Completed => colored(palette::STATUS_GREEN),
        VersionStatus::Processing => colored(palette::STATUS_YELLOW),
        VersionStatus::Failed => colored(palette::STATUS_RED),
    }
}

pub fn model_status_style(status: ModelStatus) -> Style {
    match status {
        ModelStatus::Active => colored(palette::STATUS_GREEN),
        ModelStatus::Draft => colored(palette::STATUS_YELLOW),
    }
}

pub fn validation_style(status: ValidationStatus) -> Style {
    match status {
        ValidationStatus::Pass => colored(palette::STATUS_GREEN),
        ValidationStatus::Fail => colored(palette::STATUS_RED),
    }
}

// --- Status indicator mapping ---

/// Run status indicator for badges and run rows.
///
/// Returns `(icon_char, label, Style)` for the given RunStatus.
pub fn run_status_indicator(status: RunStatus) -> (&'static str, &'static str, Style) {
    match status {
        RunStatus::Succeeded => (
            "●",
            status.label(),
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        RunStatus::Running => (
            "↻",
            status.label(),
            Style::default()
                .fg(palette::STATUS_YELLOW)
                .add_modifier(Modifier::BOLD),
        ),
        RunStatus::Failed => ("✗", status.label(), colored(palette::STATUS_RED)),
        RunStatus::Cancelled => ("○", status.label(), text_muted()),
    }
}

/// Run status rendered as `[● Succeeded]`
pub fn run_status_badge(status: RunStatus) -> Span<'static> {
    let (icon, label, style) = run_status_indicator(status);
    Span::styled(format!("[{} {}]", icon, label), style)
}

/// Indicator for a row of the live progress card
pub fn progress_indicator(status: ProgressStatus) -> (&'static str, &'static str, Style) {
    match status {
        ProgressStatus::Pending => ("○", status.as_str(), text_muted()),
        ProgressStatus::Running => ("↻", status.as_str(), colored(palette::STATUS_YELLOW)),
        ProgressStatus::Succeeded => ("✓", status.as_str(), colored(palette::STATUS_GREEN)),
        ProgressStatus::Failed => ("✗", status.as_str(), colored(palette::STATUS_RED)),
    }
}
