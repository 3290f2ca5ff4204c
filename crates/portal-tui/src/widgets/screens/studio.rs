//! Studio: a mock canvas of pinned blocks and a static inspector

use portal_app::NavKey;
use portal_core::{CanvasBlock, Catalog};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::{header, split_header, CardScreen};
use crate::layout::{card_columns, is_stacked};
use crate::theme::styles;
use crate::widgets::common::{buttons, card_frame, card_height, render_card, truncate, ScreenHeader};

/// Rows per canvas block including its border
const BLOCK_HEIGHT: u16 = 6;

/// Canvas share of the wide layout
const CANVAS_SPLIT: u16 = 66;

pub struct StudioScreen<'a> {
    catalog: &'a Catalog,
    focused: bool,
}

impl<'a> StudioScreen<'a> {
    pub fn new(catalog: &'a Catalog, focused: bool) -> Self {
        Self { catalog, focused }
    }

    /// Rows of the canvas card: borders, note, gap and the block grid
    fn canvas_height(&self) -> u16 {
        let grid_rows = u16::try_from(self.catalog.canvas_blocks.len().div_ceil(2))
            .unwrap_or(u16::MAX);
        grid_rows.saturating_mul(BLOCK_HEIGHT).saturating_add(4)
    }

    fn inspector_height(&self, width: u16) -> u16 {
        let column = if is_stacked(width) {
            width
        } else {
            width.saturating_mul(100 - CANVAS_SPLIT) / 100
        };
        let inner = column.saturating_sub(2);
        card_height(&Self::inspector_lines(), inner)
    }

    fn render_block(block: &CanvasBlock, area: Rect, buf: &mut Buffer) {
        let frame = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::border_inactive());
        let inner = frame.inner(area);
        frame.render(area, buf);

        let width = inner.width as usize;
        let lines = vec![
            Line::from(Span::styled(truncate(&block.block_type, width), styles::text_muted())),
            Line::from(Span::styled(truncate(&block.title, width), styles::text_bright_bold())),
            Line::from(Span::styled(truncate(&block.meta, width), styles::text_muted())),
            Line::from(buttons(&["Inspect", "Link"])),
        ];
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_canvas(&self, area: Rect, buf: &mut Buffer) {
        let inner = card_frame(area, buf, "Canvas", self.focused);
        if inner.height == 0 {
            return;
        }
        Paragraph::new(Span::styled(
            "Mock canvas — blocks are positioned arbitrarily.",
            styles::text_muted(),
        ))
        .render(Rect { height: 1, ..inner }, buf);

        let grid = Rect {
            y: inner.y + 2,
            height: inner.height.saturating_sub(2),
            ..inner
        };
        let columns =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(grid);

        for (i, block) in self.catalog.canvas_blocks.iter().enumerate() {
            let column = columns[i % 2];
            let top = u16::try_from(i / 2)
                .unwrap_or(u16::MAX)
                .saturating_mul(BLOCK_HEIGHT);
            if top.saturating_add(BLOCK_HEIGHT) > column.height {
                break;
            }
            let cell = Rect {
                y: column.y + top,
                height: BLOCK_HEIGHT,
                ..column
            };
            Self::render_block(block, cell, buf);
        }
    }

    fn inspector_lines() -> Vec<Line<'static>> {
        let label = |text: &'static str| Line::from(Span::styled(text, styles::text_muted()));
        vec![
            label("Selected"),
            Line::from(Span::styled("Lease Review Output", styles::text_bright_bold())),
            label("Linked to run_101"),
            Line::default(),
            label("Provenance"),
            Line::from(Span::styled(
                "Bundle v2 → ingest run → extraction → evidence → insight → model update",
                styles::text_secondary(),
            )),
            Line::default(),
            label("Actions"),
            Line::from(buttons(&["Open run"])),
            Line::from(buttons(&["Pin diff"])),
            Line::from(buttons(&["Create insight"])),
        ]
    }
}

impl Widget for StudioScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (head, body) = split_header(area);
        header(NavKey::Studio).render(head, buf);

        let (canvas, inspector) = card_columns(body, CANVAS_SPLIT, self.canvas_height());
        self.render_canvas(canvas, buf);
        render_card(inspector, buf, "Inspector", false, Self::inspector_lines());
    }
}

impl CardScreen for StudioScreen<'_> {
    fn content_height(&self, width: u16) -> u16 {
        let canvas = self.canvas_height();
        let inspector = self.inspector_height(width);
        let body = if is_stacked(width) {
            canvas.saturating_add(inspector)
        } else {
            canvas.max(inspector)
        };
        ScreenHeader::HEIGHT.saturating_add(body)
    }
}
