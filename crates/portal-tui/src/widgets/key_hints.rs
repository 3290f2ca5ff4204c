//! Footer with the key bindings that apply to the current mode and focus

use portal_app::state::{AppsPane, DetailTab, Focus, RunField, UiMode};
use portal_app::{AppState, NavKey};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

pub struct KeyHints<'a> {
    state: &'a AppState,
}

impl<'a> KeyHints<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// `(key, label)` pairs for the current context
    pub fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let state = self.state;
        match state.ui_mode {
            UiMode::ProjectPicker => vec![
                ("↑↓", "Move"),
                ("Enter", "Select"),
                ("Esc", "Cancel"),
            ],
            UiMode::TextInput => vec![
                ("Enter", "Done"),
                ("Esc", "Done"),
                ("^U", "Clear"),
            ],
            UiMode::Normal => match state.focus {
                Focus::Sidebar => vec![
                    ("↑↓", "Navigate"),
                    ("Enter", "Open"),
                    ("0-9", "Jump"),
                    ("p", "Project"),
                    ("q", "Quit"),
                ],
                Focus::Content if state.active != NavKey::Apps => vec![
                    ("↑↓", "Scroll"),
                    ("Esc", "Sidebar"),
                    ("0-9", "Jump"),
                    ("p", "Project"),
                    ("q", "Quit"),
                ],
                Focus::Content => self.apps_hints(),
            },
        }
    }

    fn apps_hints(&self) -> Vec<(&'static str, &'static str)> {
        let state = self.state;
        match (state.apps_view.pane, state.detail()) {
            (AppsPane::Detail, Some(detail)) => {
                let mut hints = vec![("Tab", "Next tab")];
                if detail.tab == DetailTab::Run {
                    hints.push(("↑↓", "Field"));
                    if detail.field == RunField::Bundle {
                        hints.push(("←→", "Bundle"));
                    } else {
                        hints.push(("Enter", "Edit"));
                    }
                }
                hints.push(("Esc", "Back"));
                hints.push(("q", "Quit"));
                hints
            }
            _ => vec![
                ("↑↓", "Select"),
                ("Enter", "Details"),
                ("f", "Filter"),
                ("Esc", "Sidebar"),
                ("q", "Quit"),
            ],
        }
    }
}

/// Columns one hint takes: `[key] label` plus two spaces
fn hint_width(key: &str, label: &str) -> usize {
    key.width() + label.width() + 5
}

/// Drop hints from the middle until the rest fit in `width`, keeping the
/// last one (quit or leave) in place
fn fit_hints(
    mut hints: Vec<(&'static str, &'static str)>,
    width: usize,
) -> Vec<(&'static str, &'static str)> {
    let total = |hints: &[(&str, &str)]| {
        1 + hints.iter().map(|(k, l)| hint_width(k, l)).sum::<usize>()
    };
    while hints.len() > 1 && total(&hints) > width {
        hints.remove(hints.len() - 2);
    }
    hints
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, label) in fit_hints(self.hints(), area.width as usize) {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!("] {}  ", label), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
