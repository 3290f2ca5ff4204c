//! Workflows: triggers and last run per workflow

use portal_app::NavKey;
use portal_core::Catalog;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use super::{entry_lines, entry_title, header, split_header, CardScreen};
use crate::theme::{icons::IconSet, styles};
use crate::widgets::common::{buttons, card_height, render_card, ScreenHeader, DOT};

pub struct WorkflowsScreen<'a> {
    catalog: &'a Catalog,
    icons: IconSet,
    focused: bool,
}

impl<'a> WorkflowsScreen<'a> {
    pub fn new(catalog: &'a Catalog, icons: IconSet, focused: bool) -> Self {
        Self {
            catalog,
            icons,
            focused,
        }
    }

    fn workflow_lines(&self, width: u16) -> Vec<Line<'static>> {
        self.catalog
            .workflows
            .iter()
            .flat_map(|workflow| {
                let mut right = match &workflow.last_run {
                    Some(run) => vec![
                        styles::run_status_badge(run.status),
                        Span::styled(format!(" {}", run.at), styles::text_muted()),
                    ],
                    None => vec![Span::styled("No runs", styles::text_muted())],
                };
                right.push(Span::raw("  "));
                right.extend(buttons(&["Builder", "Run"]));

                let meta = format!("Triggers: {}", workflow.triggers.join(DOT));
                entry_lines(
                    vec![entry_title(&workflow.name, (width as usize).saturating_sub(56))],
                    Some(meta),
                    right,
                    width,
                )
            })
            .collect()
    }
}

impl Widget for WorkflowsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (head, body) = split_header(area);
        header(NavKey::Workflows)
            .action(&format!("{} New workflow", self.icons.plus()))
            .render(head, buf);

        let lines = self.workflow_lines(body.width.saturating_sub(2));
        render_card(body, buf, "Workflow list", self.focused, lines);
    }
}

impl CardScreen for WorkflowsScreen<'_> {
    fn content_height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2);
        ScreenHeader::HEIGHT.saturating_add(card_height(&self.workflow_lines(inner), inner))
    }
}
