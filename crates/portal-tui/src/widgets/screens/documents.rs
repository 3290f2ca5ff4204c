//! Documents: bundles with their version history

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

pub struct DocumentsScreen<'a> {
    catalog: &'a Catalog,
    icons: IconSet,
    focused: bool,
}

impl<'a> DocumentsScreen<'a> {
    pub fn new(catalog: &'a Catalog, icons: IconSet, focused: bool) -> Self {
        Self {
            catalog,
            icons,
            focused,
        }
    }

    fn bundle_lines(&self, width: u16) -> Vec<Line<'static>> {
        self.catalog
            .bundles
            .iter()
            .flat_map(|bundle| {
                let mut lines = entry_lines(
                    vec![entry_title(&bundle.name, (width as usize).saturating_sub(24))],
                    Some(bundle.bundle_type.clone()),
                    buttons(&["Open", "Compare"]),
                    width,
                );
                let versions: Vec<Span> = bundle
                    .versions
                    .iter()
                    .flat_map(|v| {
                        [
                            styles::badge(
                                &format!("v{}{}{}", v.v, DOT, v.status.as_str()),
                                styles::version_status_style(v.status),
                            ),
                            Span::raw(" "),
                        ]
                    })
                    .collect();
                // Versions go between the meta row and the separator
                lines.insert(lines.len() - 1, Line::from(versions));
                lines
            })
            .collect()
    }
}

impl Widget for DocumentsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (head, body) = split_header(area);
        header(NavKey::Documents)
            .action(&format!("{} Upload bundle", self.icons.plus()))
            .render(head, buf);

        let lines = self.bundle_lines(body.width.saturating_sub(2));
        render_card(body, buf, "Bundles", self.focused, lines);
    }
}

impl CardScreen for DocumentsScreen<'_> {
    fn content_height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2);
        ScreenHeader::HEIGHT.saturating_add(card_height(&self.bundle_lines(inner), inner))
    }
}
