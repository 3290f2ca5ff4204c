//! Settings: integrations placeholder and the active preferences

use portal_app::{AppState, NavKey};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use super::{header, split_header, CardScreen};
use crate::theme::styles;
use crate::widgets::common::{buttons, card_height, render_card, ScreenHeader};

const INTEGRATIONS_HEIGHT: u16 = 6;

pub struct SettingsScreen<'a> {
    state: &'a AppState,
    focused: bool,
}

impl<'a> SettingsScreen<'a> {
    pub fn new(state: &'a AppState, focused: bool) -> Self {
        Self { state, focused }
    }

    fn integration_lines() -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                "Integrations (placeholder)",
                styles::text_bright_bold(),
            )),
            Line::from(Span::styled(
                "LLM providers • Web search • Storage • Billing • SSO.",
                styles::text_muted(),
            )),
            Line::default(),
            Line::from(buttons(&["Configure"])),
        ]
    }

    fn preference_lines(&self) -> Vec<Line<'static>> {
        let settings = &self.state.settings;
        let row = |key: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{:<26}", key), styles::text_secondary()),
                Span::styled(value, styles::text_primary()),
            ])
        };
        let catalog = settings
            .catalog
            .path
            .as_ref()
            .map_or_else(|| "built-in sample data".to_string(), |p| p.display().to_string());

        vec![
            row("ui.icons", settings.ui.icons.to_string()),
            row(
                "ui.show_project_description",
                settings.ui.show_project_description.to_string(),
            ),
            row("ui.sidebar_width", settings.ui.sidebar_width.to_string()),
            row("behavior.start_screen", settings.behavior.start_screen.to_string()),
            row("catalog.path", catalog),
        ]
    }
}

impl Widget for SettingsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (head, body) = split_header(area);
        header(NavKey::Settings).render(head, buf);

        let rows = Layout::vertical([Constraint::Length(INTEGRATIONS_HEIGHT), Constraint::Min(0)])
            .split(body);
        render_card(rows[0], buf, "Integrations", self.focused, Self::integration_lines());
        render_card(rows[1], buf, "Preferences", false, self.preference_lines());
    }
}

impl CardScreen for SettingsScreen<'_> {
    fn content_height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2);
        ScreenHeader::HEIGHT
            .saturating_add(INTEGRATIONS_HEIGHT)
            .saturating_add(card_height(&self.preference_lines(), inner))
    }
}
