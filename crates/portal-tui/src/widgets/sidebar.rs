//! Sidebar navigation widget
//!
//! Brand block, an inert search box and the ten sections with their digit
//! shortcuts.

use portal_app::NavKey;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::common::{split_row, truncate};
use crate::theme::{icons::IconSet, palette, styles};

pub struct Sidebar {
    active: NavKey,
    focused: bool,
    icons: IconSet,
}

impl Sidebar {
    pub fn new(active: NavKey, icons: IconSet) -> Self {
        Self {
            active,
            focused: false,
            icons,
        }
    }

    /// Mark the sidebar as holding keyboard focus
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn digit(key: NavKey) -> char {
        match key.index() {
            9 => '0',
            i => char::from(b'1' + i as u8),
        }
    }

    fn brand_lines(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(vec![
                Span::raw(" "),
                Span::styled(self.icons.brand(), styles::accent()),
                Span::raw(" "),
                Span::styled("NYQST", styles::text_bright_bold()),
            ]),
            Line::from(vec![
                Span::raw("   "),
                Span::styled("Production mock", styles::text_muted()),
            ]),
            Line::default(),
        ]
    }

    fn search_line(&self, width: u16) -> Line<'static> {
        let text = format!(" {} Search…", self.icons.search());
        let pad = (width as usize).saturating_sub(text.chars().count() + 2);
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!("{}{}", text, " ".repeat(pad)),
                Style::default()
                    .fg(palette::TEXT_MUTED)
                    .bg(palette::INPUT_BG),
            ),
        ])
    }

    fn item_line(&self, key: NavKey, width: u16) -> Line<'static> {
        let is_active = key == self.active;
        let marker = if is_active { "▌" } else { " " };
        let label = truncate(key.label(), (width as usize).saturating_sub(8));

        let style = match (is_active, self.focused) {
            (true, true) => styles::focused_selected(),
            (true, false) => styles::unfocused_selected(),
            (false, _) => styles::text_secondary(),
        };

        let left = vec![
            Span::styled(marker, styles::accent()),
            Span::styled(format!("{} {}", self.icons.nav(key), label), style),
        ];
        let right = vec![
            Span::styled(Self::digit(key).to_string(), styles::text_muted()),
            Span::raw(" "),
        ];
        split_row(left, right, width)
    }
}

impl Widget for Sidebar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(if self.focused {
                styles::border_active()
            } else {
                styles::border_inactive()
            })
            .style(Style::default().bg(palette::SIDEBAR_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let mut lines = self.brand_lines();
        lines.push(self.search_line(inner.width));
        lines.push(Line::default());
        lines.extend(NavKey::ALL.iter().map(|k| self.item_line(*k, inner.width)));

        Paragraph::new(lines).render(inner, buf);
    }
}
