//! Project home: pinned apps, attention items, recent documents and runs

use portal_app::{AppState, NavKey};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use super::{entry_lines, entry_title, header, split_header, CardScreen};
use crate::layout::{card_columns, is_stacked};
use crate::theme::{icons::IconSet, styles};
use crate::widgets::common::{
    buttons, card_height, render_card, spans_width, split_row, truncate, ScreenHeader, DOT,
};

/// Entries shown in the recent documents and recent runs cards
const RECENT_LIMIT: usize = 3;

/// Left column share of the wide layout, top row then bottom row
const TOP_SPLIT: u16 = 66;
const BOTTOM_SPLIT: u16 = 50;

pub struct ProjectsScreen<'a> {
    state: &'a AppState,
    icons: IconSet,
    focused: bool,
}

impl<'a> ProjectsScreen<'a> {
    pub fn new(state: &'a AppState, icons: IconSet, focused: bool) -> Self {
        Self {
            state,
            icons,
            focused,
        }
    }

    /// Heights of the pinned, attention, documents and runs cards
    fn card_heights(&self, width: u16) -> [u16; 4] {
        let inner = |percent: u16| {
            let column = if is_stacked(width) {
                width
            } else {
                width.saturating_mul(percent) / 100
            };
            column.saturating_sub(2)
        };
        let (pinned, attention) = (inner(TOP_SPLIT), inner(100 - TOP_SPLIT));
        let (documents, runs) = (inner(BOTTOM_SPLIT), inner(100 - BOTTOM_SPLIT));
        [
            card_height(&self.pinned_lines(pinned), pinned),
            card_height(&self.attention_lines(), attention),
            card_height(&self.document_lines(documents), documents),
            card_height(&self.run_lines(runs), runs),
        ]
    }

    fn pinned_lines(&self, width: u16) -> Vec<Line<'static>> {
        let catalog = &self.state.catalog;
        let Some(project) = self.state.active_project() else {
            return vec![Line::from(Span::styled(
                "No project selected",
                styles::text_muted(),
            ))];
        };

        let pinned = catalog.pinned_apps(project);
        if pinned.is_empty() {
            return vec![Line::from(Span::styled(
                "No pinned apps",
                styles::text_muted(),
            ))];
        }

        pinned
            .into_iter()
            .flat_map(|app| {
                let mut right = match &app.last_run {
                    Some(run) => vec![styles::run_status_badge(run.status)],
                    None => vec![Span::styled("No runs", styles::text_muted())],
                };
                right.push(Span::raw("  "));
                right.extend(buttons(&["Open"]));
                let name_width = (width as usize).saturating_sub(spans_width(&right) + 1);

                let badge = styles::badge(app.app_type.label(), styles::app_type_style(app.app_type));
                let description_width = (width as usize).saturating_sub(badge.width() + 1);
                vec![
                    split_row(vec![entry_title(&app.name, name_width)], right, width),
                    Line::from(vec![
                        badge,
                        Span::raw(" "),
                        Span::styled(
                            truncate(&app.description, description_width),
                            styles::text_muted(),
                        ),
                    ]),
                    Line::default(),
                ]
            })
            .collect()
    }

    fn attention_lines(&self) -> Vec<Line<'static>> {
        let alert = self.icons.alert();
        let item = |title: &'static str, detail: &'static str| {
            vec![
                Line::from(vec![
                    Span::styled(alert, styles::warning()),
                    Span::raw(" "),
                    Span::styled(title, styles::text_primary()),
                ]),
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(detail, styles::text_muted()),
                ]),
                Line::default(),
            ]
        };
        let mut lines = item(
            "Lease Risk Model validation failed",
            "2 rules failing, 3 stale insights",
        );
        lines.extend(item("Bundle v2 processing", "Lease Pack - Riverside (v2)"));
        lines.push(Line::from(buttons(&["View queue"])));
        lines
    }

    fn document_lines(&self, width: u16) -> Vec<Line<'static>> {
        self.state
            .catalog
            .recent_bundles(RECENT_LIMIT)
            .iter()
            .flat_map(|bundle| {
                let meta = format!(
                    "{}{}{} versions",
                    bundle.bundle_type,
                    DOT,
                    bundle.versions.len()
                );
                entry_lines(
                    vec![entry_title(&bundle.name, (width as usize).saturating_sub(12))],
                    Some(meta),
                    buttons(&["Open"]),
                    width,
                )
            })
            .collect()
    }

    fn run_lines(&self, width: u16) -> Vec<Line<'static>> {
        self.state
            .catalog
            .recent_runs(RECENT_LIMIT)
            .iter()
            .flat_map(|run| {
                let meta = format!("{}{}{}", run.kind.as_str(), DOT, run.started_at);
                entry_lines(
                    vec![entry_title(&run.name, (width as usize).saturating_sub(16))],
                    Some(meta),
                    vec![styles::run_status_badge(run.status)],
                    width,
                )
            })
            .collect()
    }
}

impl Widget for ProjectsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (head, body) = split_header(area);
        header(NavKey::Projects).render(head, buf);

        let [pinned_h, attention_h, documents_h, _] = self.card_heights(body.width);
        let top = if is_stacked(body.width) {
            pinned_h + attention_h
        } else {
            pinned_h.max(attention_h)
        };
        let rows = Layout::vertical([Constraint::Length(top), Constraint::Min(0)]).split(body);

        let (pinned, attention) = card_columns(rows[0], TOP_SPLIT, pinned_h);
        let (documents, runs) = card_columns(rows[1], BOTTOM_SPLIT, documents_h);

        let inner = |r: Rect| r.width.saturating_sub(2);
        render_card(
            pinned,
            buf,
            "Pinned Apps",
            self.focused,
            self.pinned_lines(inner(pinned)),
        );
        render_card(
            attention,
            buf,
            "Attention required",
            false,
            self.attention_lines(),
        );
        render_card(
            documents,
            buf,
            "Recent documents",
            false,
            self.document_lines(inner(documents)),
        );
        render_card(
            runs,
            buf,
            "Recent runs",
            false,
            self.run_lines(inner(runs)),
        );
    }
}

impl CardScreen for ProjectsScreen<'_> {
    fn content_height(&self, width: u16) -> u16 {
        let [pinned, attention, documents, runs] = self.card_heights(width);
        let body = if is_stacked(width) {
            pinned + attention + documents + runs
        } else {
            pinned.max(attention) + documents.max(runs)
        };
        ScreenHeader::HEIGHT.saturating_add(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_state, TestTerminal};

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::wide();
        term.render_widget(ProjectsScreen::new(state, IconSet::default(), false), term.area());
        term
    }

    #[test]
    fn test_pinned_apps_follow_active_project() {
        let term = render(&create_test_state());
        assert!(term.buffer_contains("Pinned Apps"));
        assert!(term.buffer_contains("Research Notebook"));
        assert!(term.buffer_contains("Lease Review"));
        assert!(term.buffer_contains("Weekly Regulatory Refresh"));
        assert!(!term.buffer_contains("Vendor Due Diligence"));
    }

    #[test]
    fn test_pinned_apps_for_regops() {
        let mut state = create_test_state();
        state.select_project("prj_002");
        let term = render(&state);
        assert!(term.buffer_contains("Obligation Mapper"));
        assert!(term.buffer_contains("Vendor Due Diligence"));
        assert!(term.buffer_contains("No runs"));
        assert!(!term.buffer_contains("Research Notebook"));
    }

    #[test]
    fn test_attention_items() {
        let term = render(&create_test_state());
        assert!(term.buffer_contains("Lease Risk Model validation failed"));
        assert!(term.buffer_contains("2 rules failing, 3 stale insights"));
        assert!(term.buffer_contains("View queue"));
        assert!(term.buffer_contains("⚠ Lease Risk Model validation failed"));
        assert!(term.buffer_contains("⚠ Bundle v2 processing"));
    }

    #[test]
    fn test_stacked_cards_get_their_full_height() {
        let state = create_test_state();
        let screen = ProjectsScreen::new(&state, IconSet::default(), false);
        let height = screen.content_height(56);
        assert_eq!(height, 45);

        let mut term = TestTerminal::with_size(56, height);
        term.render_widget(screen, term.area());
        for text in [
            "Research Notebook",
            "Lease Review",
            "Weekly Regulatory Refresh",
            "Bundle v2 processing",
            "View queue",
            "Vendor Pack - RiskCo",
            "Reg Pack - FCA Updates",
            "Weekly Refresh",
            "Ingest Bundle",
        ] {
            assert!(term.buffer_contains(text), "missing {}", text);
        }
    }

    #[test]
    fn test_recent_documents_and_runs() {
        let term = render(&create_test_state());
        assert!(term.buffer_contains("Lease Pack • 2 versions"));
        assert!(term.buffer_contains("Reg Pack - FCA Updates"));
        assert!(term.buffer_contains("WORKFLOW • 2026-02-16 09:00"));
        assert!(term.buffer_contains("[● Succeeded]"));
    }
}
