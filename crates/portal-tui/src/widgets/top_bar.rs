//! Top bar widget
//!
//! Shows the project badge, the project selector and the project's
//! description, with the inert "New" and "Run App" buttons on the right.

use portal_core::Project;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Paragraph, Widget},
};

use super::common::{spans_width, split_row, truncate};
use crate::theme::{icons::IconSet, palette, styles};

/// Shortest description worth showing once truncated
const MIN_DESCRIPTION_WIDTH: usize = 12;

pub struct TopBar<'a> {
    project: Option<&'a Project>,
    show_description: bool,
    picker_open: bool,
    icons: IconSet,
}

impl<'a> TopBar<'a> {
    pub fn new(project: Option<&'a Project>, icons: IconSet) -> Self {
        Self {
            project,
            show_description: true,
            picker_open: false,
            icons,
        }
    }

    pub fn show_description(mut self, show: bool) -> Self {
        self.show_description = show;
        self
    }

    /// Highlight the selector while the project picker is open
    pub fn picker_open(mut self, open: bool) -> Self {
        self.picker_open = open;
        self
    }
}

impl Widget for TopBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let name = self.project.map_or("No project", |p| p.name.as_str());
        let selector_style = if self.picker_open {
            styles::focused_selected()
        } else {
            styles::input(false, false)
        };

        let mut left = vec![
            Span::raw(" "),
            styles::badge("Project", styles::text_secondary()),
            Span::raw(" "),
            Span::styled(
                format!(" {} {} ", name, self.icons.chevron_down()),
                selector_style,
            ),
        ];

        let mut right = vec![
            styles::button(&format!("{} New", self.icons.plus())),
            Span::raw("  "),
            Span::styled("‹ Run App ›", styles::accent_bold()),
            Span::raw(" "),
        ];

        if self.show_description {
            if let Some(project) = self.project {
                let room = (inner.width as usize)
                    .saturating_sub(spans_width(&left) + spans_width(&right) + 4);
                if room >= MIN_DESCRIPTION_WIDTH {
                    left.push(Span::raw("  "));
                    left.push(Span::styled(
                        truncate(&project.description, room),
                        styles::text_muted(),
                    ));
                }
            }
        }

        if spans_width(&left) + spans_width(&right) >= inner.width as usize {
            right.clear();
        }

        Paragraph::new(split_row(left, right, inner.width)).render(inner, buf);
    }
}
