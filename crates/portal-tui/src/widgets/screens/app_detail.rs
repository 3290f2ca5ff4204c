//! App detail pane: header, tab row and the active tab's panel
//!
//! Only the Run tab carries live inputs; the progress checklist and output
//! preview are fixed.

use portal_app::state::{AppDetailState, DetailTab, RunField};
use portal_core::{AppCard, Catalog, ProgressStatus};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget, Wrap},
};

use super::{entry_lines, entry_title};
use crate::layout::two_columns;
use crate::theme::{icons::IconSet, palette, styles};
use crate::widgets::common::{
    buttons, card_frame, render_card, split_row, truncate, truncate_start, DOT,
};

/// Fixed rows of the live progress card
const PROGRESS_ROWS: [(&str, ProgressStatus); 4] = [
    ("Extracting deltas", ProgressStatus::Running),
    ("Rebuilding evidence", ProgressStatus::Running),
    ("Updating model fields", ProgressStatus::Succeeded),
    ("Refreshing dashboard tiles", ProgressStatus::Pending),
];

const OUTPUT_SUMMARY: &str = "Riverside Lease Pack v2 introduces changes in break clauses and \
rent review terms. Evidence coverage is 87%. Two model rules failed due to conflicting clauses.";

/// Rows above the tab panel: description, badges, gap, tabs, gap
const HEADER_ROWS: u16 = 5;

pub struct AppDetail<'a> {
    app: &'a AppCard,
    detail: &'a AppDetailState,
    catalog: &'a Catalog,
    focused: bool,
    editing: bool,
    icons: IconSet,
}

impl<'a> AppDetail<'a> {
    pub fn new(app: &'a AppCard, detail: &'a AppDetailState, catalog: &'a Catalog) -> Self {
        Self {
            app,
            detail,
            catalog,
            focused: false,
            editing: false,
            icons: IconSet::default(),
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// A text input is capturing keys
    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    pub fn icons(mut self, icons: IconSet) -> Self {
        self.icons = icons;
        self
    }

    fn header_lines(&self, width: u16) -> Vec<Line<'static>> {
        let app = self.app;
        let mut badges = vec![
            styles::badge(app.app_type.label(), styles::app_type_style(app.app_type)),
            Span::raw(" "),
            styles::badge(app.status.as_str(), styles::app_status_style(app.status)),
            Span::raw(" "),
        ];
        match &app.last_run {
            Some(run) => {
                badges.push(styles::run_status_badge(run.status));
                badges.push(Span::styled(format!(" {}", run.at), styles::text_muted()));
            }
            None => badges.push(Span::styled("No runs", styles::text_muted())),
        }
        let run_now = vec![Span::styled(
            format!("‹ {} Run now ›", self.icons.play()),
            styles::accent_bold(),
        )];

        vec![
            Line::from(Span::styled(
                truncate(&app.description, width as usize),
                styles::text_secondary(),
            )),
            split_row(badges, run_now, width),
        ]
    }

    fn tabs(&self) -> Tabs<'static> {
        let titles: Vec<Line> = DetailTab::ALL
            .iter()
            .map(|t| Line::from(format!(" {} ", t.label())))
            .collect();
        let highlight = if self.focused {
            styles::focused_selected()
        } else {
            styles::unfocused_selected()
        };
        Tabs::new(titles)
            .select(self.detail.tab.index())
            .style(styles::text_secondary())
            .highlight_style(highlight)
            .divider("│")
    }

    // ─────────────────────────────────────────────────────────
    // Run tab
    // ─────────────────────────────────────────────────────────

    fn input_line(&self, field: RunField, value: String, width: u16) -> Line<'static> {
        let is_focused = self.focused && self.detail.field == field;
        let editing = is_focused && self.editing;
        let marker = if is_focused { "›" } else { " " };

        let inner = (width as usize).saturating_sub(3);
        let shown = if editing {
            truncate_start(&format!("{}▏", value), inner)
        } else {
            truncate(&value, inner)
        };
        let padded = format!(" {:<w$}", shown, w = inner.saturating_sub(1));

        Line::from(vec![
            Span::styled(marker, styles::accent()),
            Span::raw(" "),
            Span::styled(padded, styles::input(is_focused, editing)),
        ])
    }

    fn bundle_value(&self) -> String {
        let name = self
            .detail
            .form
            .bundle_id
            .as_deref()
            .and_then(|id| self.catalog.bundle(id))
            .map(|b| b.name.clone());
        match name {
            Some(name) => format!("‹ {} ›", name),
            None => "No bundles".to_string(),
        }
    }

    fn inputs_lines(&self, width: u16) -> Vec<Line<'static>> {
        let label = |text: &'static str| Line::from(Span::styled(text, styles::text_muted()));
        let form = &self.detail.form;
        vec![
            label("Run name"),
            self.input_line(RunField::RunName, form.run_name.clone(), width),
            Line::default(),
            label("Bundle"),
            self.input_line(RunField::Bundle, self.bundle_value(), width),
            Line::default(),
            label("Question / focus"),
            self.input_line(RunField::Question, form.question.clone(), width),
            Line::default(),
            Line::from(vec![
                styles::badge("Context: project", styles::text_secondary()),
                Span::raw(" "),
                styles::badge("Context: bundle", styles::text_secondary()),
                Span::raw(" "),
                styles::badge("Web: optional", styles::text_secondary()),
            ]),
        ]
    }

    fn progress_lines(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled("Plan created: 6 tasks", styles::text_primary())),
            Line::default(),
        ];
        lines.extend(PROGRESS_ROWS.iter().map(|(task, status)| {
            let (icon, label, style) = styles::progress_indicator(*status);
            split_row(
                vec![
                    Span::styled(icon, style),
                    Span::raw(" "),
                    Span::styled(*task, styles::text_primary()),
                ],
                vec![Span::styled(label, style)],
                width,
            )
        }));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("Started {}", self.detail.started_at),
            styles::text_muted(),
        )));
        lines
    }

    fn output_lines(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled("Summary", styles::text_bright_bold())),
            Line::from(Span::styled(OUTPUT_SUMMARY, styles::text_secondary())),
            Line::default(),
            Line::from(buttons(&["Pin to canvas", "Create notebook page", "Open diff"])),
        ]
    }

    fn render_run_tab(&self, area: Rect, buf: &mut Buffer) {
        let (left, right) = two_columns(area, 50);
        let right_rows =
            Layout::vertical([Constraint::Length(10), Constraint::Min(0)]).split(right);

        let inner = |r: Rect| r.width.saturating_sub(2);
        render_card(
            left,
            buf,
            "Inputs",
            self.focused,
            self.inputs_lines(inner(left)),
        );
        render_card(
            right_rows[0],
            buf,
            "Live progress",
            false,
            self.progress_lines(inner(right_rows[0])),
        );
        render_card(
            right_rows[1],
            buf,
            "Output preview",
            false,
            self.output_lines(),
        );
    }

    // ─────────────────────────────────────────────────────────
    // Other tabs
    // ─────────────────────────────────────────────────────────

    fn render_placeholder(
        &self,
        area: Rect,
        buf: &mut Buffer,
        title: &str,
        description: &str,
        action: &str,
    ) {
        let lines = vec![
            Line::from(Span::styled(description.to_string(), styles::text_secondary())),
            Line::default(),
            Line::from(buttons(&[action])),
        ];
        render_card(area, buf, title, false, lines);
    }

    fn render_runs_tab(&self, area: Rect, buf: &mut Buffer) {
        let inner = card_frame(area, buf, "Runs", false);
        let width = inner.width;
        let lines: Vec<Line> = self
            .catalog
            .runs
            .iter()
            .flat_map(|run| {
                let meta = format!(
                    "{}{}{}{}{}",
                    run.started_at, DOT, run.duration, DOT, run.cost
                );
                entry_lines(
                    vec![entry_title(&run.name, (width as usize).saturating_sub(16))],
                    Some(meta),
                    vec![styles::run_status_badge(run.status)],
                    width,
                )
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for AppDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 4 {
            return;
        }
        let inner = card_frame(area, buf, &self.app.name, self.focused);

        let rows = Layout::vertical([Constraint::Length(HEADER_ROWS), Constraint::Min(0)])
            .split(inner);
        let head = rows[0];
        let panel = rows[1];

        Paragraph::new(self.header_lines(head.width))
            .wrap(Wrap { trim: false })
            .render(Rect { height: 2, ..head }, buf);
        if head.height > 3 {
            self.tabs().render(
                Rect {
                    y: head.y + 3,
                    height: 1,
                    ..head
                },
                buf,
            );
        }
        if head.height > 4 {
            // Rule under the tab row
            let rule = "─".repeat(head.width as usize);
            Paragraph::new(Span::styled(rule, Style::default().fg(palette::BORDER_DIM)))
                .render(
                    Rect {
                        y: head.y + 4,
                        height: 1,
                        ..head
                    },
                    buf,
                );
        }

        match self.detail.tab {
            DetailTab::Run => self.render_run_tab(panel, buf),
            DetailTab::Configure => self.render_placeholder(
                panel,
                buf,
                "Configuration wizard (placeholder)",
                "Inputs schema • Context pack • Engine selection • Outputs mapping • Triggers • Publish.",
                "Open wizard",
            ),
            DetailTab::Runs => self.render_runs_tab(panel, buf),
            DetailTab::Outputs => self.render_placeholder(
                panel,
                buf,
                "Artifacts",
                "Notebook page • Evidence set • Insight candidates • Model updates • Dashboard refresh.",
                "Open outputs",
            ),
            DetailTab::Permissions => self.render_placeholder(
                panel,
                buf,
                "Permissions (v1-lite)",
                "Viewer (run) • Editor (edit config) • Admin (schedules/triggers).",
                "Manage",
            ),
        }
    }
}
