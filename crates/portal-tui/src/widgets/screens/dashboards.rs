//! Dashboards: tile count and refresh time per dashboard

use portal_app::NavKey;
use portal_core::Catalog;
use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

use super::{entry_lines, entry_title, header, split_header, CardScreen};
use crate::theme::icons::IconSet;
use crate::widgets::common::{buttons, card_height, render_card, ScreenHeader, DOT};

pub struct DashboardsScreen<'a> {
    catalog: &'a Catalog,
    icons: IconSet,
    focused: bool,
}

impl<'a> DashboardsScreen<'a> {
    pub fn new(catalog: &'a Catalog, icons: IconSet, focused: bool) -> Self {
        Self {
            catalog,
            icons,
            focused,
        }
    }

    fn dashboard_lines(&self, width: u16) -> Vec<Line<'static>> {
        self.catalog
            .dashboards
            .iter()
            .flat_map(|dashboard| {
                let meta = format!(
                    "{} tiles{}refreshed {}",
                    dashboard.tiles, DOT, dashboard.last_refresh
                );
                entry_lines(
                    vec![entry_title(&dashboard.name, (width as usize).saturating_sub(24))],
                    Some(meta),
                    buttons(&["Open", "Refresh"]),
                    width,
                )
            })
            .collect()
    }
}

impl Widget for DashboardsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (head, body) = split_header(area);
        header(NavKey::Dashboards)
            .action(&format!("{} New dashboard", self.icons.plus()))
            .render(head, buf);

        let lines = self.dashboard_lines(body.width.saturating_sub(2));
        render_card(body, buf, "Dashboards", self.focused, lines);
    }
}

impl CardScreen for DashboardsScreen<'_> {
    fn content_height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2);
        ScreenHeader::HEIGHT.saturating_add(card_height(&self.dashboard_lines(inner), inner))
    }
}
