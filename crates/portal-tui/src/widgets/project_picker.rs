//! Project picker popup
//!
//! Lists every project in catalog order with the highlighted row following
//! the picker index. The current project is marked with a check.

use portal_core::Project;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::common::truncate;
use super::modal_overlay::{centered_rect, clear_area};
use crate::theme::styles;

const POPUP_WIDTH: u16 = 56;

pub struct ProjectPicker<'a> {
    projects: &'a [Project],
    current_id: &'a str,
    index: usize,
}

impl<'a> ProjectPicker<'a> {
    pub fn new(projects: &'a [Project], current_id: &'a str, index: usize) -> Self {
        Self {
            projects,
            current_id,
            index,
        }
    }

    /// Popup area within `area`, sized to the project count
    pub fn popup_area(&self, area: Rect) -> Rect {
        // border + list + blank + hint + border
        let height = self.projects.len() as u16 + 4;
        centered_rect(POPUP_WIDTH, height.max(5), area)
    }
}

impl Widget for ProjectPicker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = self.popup_area(area);
        clear_area(buf, popup);

        let block = styles::modal_block("Select project");
        let inner = block.inner(popup);
        block.render(popup, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let width = inner.width as usize;
        let mut lines: Vec<Line> = if self.projects.is_empty() {
            vec![Line::from(Span::styled(" No projects", styles::text_muted()))]
        } else {
            self.projects
                .iter()
                .enumerate()
                .map(|(i, project)| {
                    let check = if project.id == self.current_id { "✓" } else { " " };
                    let text = truncate(
                        &format!(" {} {}", check, project.name),
                        width.saturating_sub(1),
                    );
                    if i == self.index {
                        let padded = format!("{:<w$}", text, w = width);
                        Line::from(Span::styled(padded, styles::focused_selected()))
                    } else {
                        Line::from(Span::styled(text, styles::text_primary()))
                    }
                })
                .collect()
        };

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(" ↑↓", styles::keybinding()),
            Span::styled(" move  ", styles::text_muted()),
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" select  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" cancel", styles::text_muted()),
        ]));

        Paragraph::new(lines).render(inner, buf);
    }
}
