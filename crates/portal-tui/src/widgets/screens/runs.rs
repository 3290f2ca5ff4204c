//! Runs: audit log of every run

use portal_app::NavKey;
use portal_core::Catalog;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use super::{entry_lines, entry_title, header, split_header, CardScreen};
use crate::theme::styles;
use crate::widgets::common::{buttons, card_height, render_card, ScreenHeader, DOT};

pub struct RunsScreen<'a> {
    catalog: &'a Catalog,
    focused: bool,
}

impl<'a> RunsScreen<'a> {
    pub fn new(catalog: &'a Catalog, focused: bool) -> Self {
        Self { catalog, focused }
    }

    fn run_lines(&self, width: u16) -> Vec<Line<'static>> {
        self.catalog
            .runs
            .iter()
            .flat_map(|run| {
                let meta = [
                    run.kind.as_str(),
                    run.started_at.as_str(),
                    run.duration.as_str(),
                    run.cost.as_str(),
                ]
                .join(DOT);
                let mut right = vec![styles::run_status_badge(run.status)];
                right.push(Span::raw("  "));
                right.extend(buttons(&["Open"]));
                entry_lines(
                    vec![entry_title(&run.name, (width as usize).saturating_sub(30))],
                    Some(meta),
                    right,
                    width,
                )
            })
            .collect()
    }
}

impl Widget for RunsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (head, body) = split_header(area);
        header(NavKey::Runs).render(head, buf);

        let lines = self.run_lines(body.width.saturating_sub(2));
        render_card(body, buf, "Recent runs", self.focused, lines);
    }
}

impl CardScreen for RunsScreen<'_> {
    fn content_height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2);
        ScreenHeader::HEIGHT.saturating_add(card_height(&self.run_lines(inner), inner))
    }
}
