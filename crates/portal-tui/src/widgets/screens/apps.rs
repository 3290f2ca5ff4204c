//! Apps screen: type filter, app list and the selected app's detail

use portal_app::state::{AppFilter, AppsPane, Focus, UiMode};
use portal_app::{AppState, NavKey};
use portal_core::AppCard;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{header, split_header, AppDetail};
use crate::layout::two_columns;
use crate::theme::{icons::IconSet, styles};
use crate::widgets::common::{card_frame, render_card, split_row, truncate};

/// Lines per app in the list, separator included
const ENTRY_HEIGHT: u16 = 4;

pub struct AppsScreen<'a> {
    state: &'a AppState,
    icons: IconSet,
}

impl<'a> AppsScreen<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self { state, icons }
    }

    fn content_focused(&self) -> bool {
        self.state.focus == Focus::Content
    }

    fn list_focused(&self) -> bool {
        self.content_focused() && self.state.apps_view.pane == AppsPane::List
    }

    fn filter_line(&self) -> Line<'static> {
        let current = self.state.apps_view.filter;
        let mut spans = Vec::new();
        for filter in AppFilter::ALL {
            let style = if filter == current {
                if self.list_focused() {
                    styles::focused_selected()
                } else {
                    styles::unfocused_selected()
                }
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {} ", filter.label()), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn app_lines(&self, app: &AppCard, selected: bool, width: u16) -> Vec<Line<'static>> {
        let name_style = match (selected, self.list_focused()) {
            (true, true) => styles::focused_selected(),
            (true, false) => styles::unfocused_selected(),
            (false, _) => styles::text_primary(),
        };
        let marker = if selected {
            self.icons.chevron_right()
        } else {
            " "
        };
        let name_width = (width as usize).saturating_sub(16);

        let title = vec![
            Span::styled(marker, styles::accent()),
            Span::raw(" "),
            Span::styled(truncate(&app.name, name_width), name_style),
        ];
        let type_badge = vec![styles::badge(
            app.app_type.label(),
            styles::app_type_style(app.app_type),
        )];

        let mut triggers = vec![Span::raw("  ")];
        for trigger in &app.triggers {
            triggers.push(styles::badge(trigger.as_str(), styles::text_secondary()));
            triggers.push(Span::raw(" "));
        }
        let last_run = match &app.last_run {
            Some(run) => vec![Span::styled(run.at.clone(), styles::text_muted())],
            None => vec![Span::styled("No runs", styles::text_muted())],
        };

        vec![
            split_row(title, type_badge, width),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    truncate(&app.inputs_summary, (width as usize).saturating_sub(2)),
                    styles::text_muted(),
                ),
            ]),
            split_row(triggers, last_run, width),
            Line::default(),
        ]
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let inner = card_frame(area, buf, "App list", self.list_focused());
        let apps = self.state.visible_apps();
        if apps.is_empty() {
            Paragraph::new(Span::styled(
                "No apps match this filter",
                styles::text_muted(),
            ))
            .render(inner, buf);
            return;
        }

        let selected = self.state.selected_app().map(|a| a.id.as_str());
        let lines: Vec<Line> = apps
            .iter()
            .flat_map(|app| self.app_lines(app, Some(app.id.as_str()) == selected, inner.width))
            .collect();

        let index = self.state.selected_app_index().unwrap_or(0);
        let scroll = list_scroll(index, inner.height);
        Paragraph::new(lines).scroll((scroll, 0)).render(inner, buf);
    }

    fn render_detail(&self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        match (state.selected_app(), state.detail()) {
            (Some(app), Some(detail)) => {
                let focused = self.content_focused() && state.apps_view.pane == AppsPane::Detail;
                AppDetail::new(app, detail, &state.catalog)
                    .focused(focused)
                    .editing(state.ui_mode == UiMode::TextInput)
                    .icons(self.icons)
                    .render(area, buf);
            }
            _ => render_card(
                area,
                buf,
                "App detail",
                false,
                vec![Line::from(Span::styled(
                    "No apps match this filter",
                    styles::text_muted(),
                ))],
            ),
        }
    }
}

impl Widget for AppsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (left, right) = two_columns(area, 40);
        let (head, body) = split_header(left);

        header(NavKey::Apps)
            .action(&format!("{} Create App", self.icons.plus()))
            .render(head, buf);

        let rows = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(body);
        render_card(rows[0], buf, "Filter (f/F)", false, vec![self.filter_line()]);
        self.render_list(rows[1], buf);

        self.render_detail(right, buf);
    }
}

/// Rows to scroll the app list so entry `index` ends inside `viewport`
fn list_scroll(index: usize, viewport: u16) -> u16 {
    u16::try_from(index)
        .unwrap_or(u16::MAX)
        .saturating_add(1)
        .saturating_mul(ENTRY_HEIGHT)
        .saturating_sub(viewport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, TestTerminal};
    use portal_app::handler::update;
    use portal_app::Message;
    use portal_core::AppType;

    fn apps_state() -> AppState {
        let mut state = create_test_state();
        update(&mut state, Message::SelectNav(NavKey::Apps));
        update(&mut state, Message::FocusContent);
        state
    }

    fn render(state: &AppState) -> (TestTerminal, Rect, Rect) {
        let mut term = TestTerminal::wide();
        let (left, right) = two_columns(term.area(), 40);
        term.render_widget(AppsScreen::new(state, IconSet::default()), term.area());
        (term, left, right)
    }

    #[test]
    fn test_lists_all_apps_by_default() {
        let (term, left, _) = render(&apps_state());
        for name in [
            "Research Notebook",
            "Lease Review",
            "Weekly Regulatory Refresh",
            "Vendor Due Diligence",
            "Obligation Mapper",
        ] {
            assert!(term.region_contains(left, name), "missing {}", name);
        }
        assert!(term.buffer_contains("Create App"));
    }

    #[test]
    fn test_analysis_filter_limits_list() {
        let mut state = apps_state();
        update(&mut state, Message::SetAppFilter(AppFilter::Type(AppType::Analysis)));
        let (term, left, _) = render(&state);

        assert!(term.region_contains(left, "Lease Review"));
        assert!(term.region_contains(left, "Obligation Mapper"));
        assert!(!term.region_contains(left, "Research Notebook"));
        assert!(!term.region_contains(left, "Weekly Regulatory Refresh"));
        assert!(!term.region_contains(left, "Vendor Due Diligence"));
    }

    #[test]
    fn test_detail_title_follows_selection() {
        let mut state = apps_state();
        let (term, _, right) = render(&state);
        let title_row = Rect { height: 1, ..right };
        assert!(term.region_contains(title_row, "Research Notebook"));

        update(&mut state, Message::SelectApp { id: "app_weekly_refresh".into() });
        let (term, _, right) = render(&state);
        let title_row = Rect { height: 1, ..right };
        assert!(term.region_contains(title_row, "Weekly Regulatory Refresh"));
    }

    #[test]
    fn test_list_row_details() {
        let (term, left, _) = render(&apps_state());
        assert!(term.region_contains(left, "Question, optional bundle(s), date range"));
        assert!(term.region_contains(left, "[MANUAL] [EVENT]"));
        assert!(term.region_contains(left, "No runs"));
        assert!(term.region_contains(left, "2026-02-19 16:12"));
    }

    #[test]
    fn test_empty_filter_shows_placeholder() {
        let mut state = apps_state();
        update(&mut state, Message::SetAppFilter(AppFilter::Type(AppType::View)));
        let (term, left, right) = render(&state);
        assert!(term.region_contains(left, "No apps match this filter"));
        assert!(term.region_contains(right, "No apps match this filter"));
    }

    #[test]
    fn test_selected_filter_chip_is_highlighted() {
        let mut state = apps_state();
        update(&mut state, Message::SetAppFilter(AppFilter::Type(AppType::Agent)));
        let (term, left, _) = render(&state);
        assert!(term.region_contains(left, " AGENT "));
    }

    #[test]
    fn test_list_scroll_keeps_selection_visible() {
        assert_eq!(list_scroll(0, 20), 0);
        assert_eq!(list_scroll(4, 12), 8);
        // Fixture catalogs can hold more apps than rows fit in a u16
        assert_eq!(list_scroll(70_000, 12), u16::MAX - 12);
    }
}
