//! Small building blocks shared by the screens: cards, aligned rows and
//! width-aware truncation.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::styles;

/// Separator used between inline metadata fields
pub const DOT: &str = " • ";

/// Truncate text to a display width, adding an ellipsis if needed
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".repeat(max_width);
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Keep the end of `text` within a display width, with a leading ellipsis
///
/// Used for inputs being edited so the cursor stays in view.
pub fn truncate_start(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".repeat(max_width);
    }

    let mut tail = Vec::new();
    let mut used = 0;
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        tail.push(c);
        used += w;
    }
    std::iter::once('…').chain(tail.into_iter().rev()).collect()
}

/// Display width of a run of spans
pub fn spans_width(spans: &[Span<'_>]) -> usize {
    spans.iter().map(|s| s.content.width()).sum()
}

/// A line with `left` flush left and `right` flush right within `width`
///
/// When both do not fit, the right side is dropped.
pub fn split_row<'a>(left: Vec<Span<'a>>, right: Vec<Span<'a>>, width: u16) -> Line<'a> {
    let left_width = spans_width(&left);
    let right_width = spans_width(&right);
    let width = width as usize;

    let mut spans = left;
    if !right.is_empty() && left_width + right_width < width {
        spans.push(Span::raw(" ".repeat(width - left_width - right_width)));
        spans.extend(right);
    }
    Line::from(spans)
}

/// Inert buttons separated by two spaces
pub fn buttons(labels: &[&str]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(labels.len() * 2);
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(styles::button(label));
    }
    spans
}

/// Rows a bordered card needs to show `lines` wrapped at `inner_width`
pub fn card_height(lines: &[Line<'_>], inner_width: u16) -> u16 {
    let width = usize::from(inner_width.max(1));
    let rows: usize = lines.iter().map(|l| l.width().div_ceil(width).max(1)).sum();
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2)
}

/// Render a titled card and return its inner area
pub fn card_frame(area: Rect, buf: &mut Buffer, title: &str, focused: bool) -> Rect {
    let block = styles::card(title, focused);
    let inner = block.inner(area);
    block.render(area, buf);
    inner
}

/// Render a titled card holding wrapped lines
pub fn render_card(area: Rect, buf: &mut Buffer, title: &str, focused: bool, lines: Vec<Line>) {
    if area.width < 2 || area.height < 2 {
        return;
    }
    let inner = card_frame(area, buf, title, focused);
    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .render(inner, buf);
}

/// Heading, subtitle and right-aligned actions at the top of a screen
pub struct ScreenHeader<'a> {
    heading: &'a str,
    subtitle: &'a str,
    actions: Vec<Span<'static>>,
}

impl<'a> ScreenHeader<'a> {
    /// Rows the header occupies including the gap below it
    pub const HEIGHT: u16 = 3;

    pub fn new(heading: &'a str, subtitle: &'a str) -> Self {
        Self {
            heading,
            subtitle,
            actions: Vec::new(),
        }
    }

    pub fn action(mut self, label: &str) -> Self {
        if !self.actions.is_empty() {
            self.actions.push(Span::raw("  "));
        }
        self.actions.push(styles::button(label));
        self
    }
}

impl Widget for ScreenHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let heading = vec![
            Span::raw(" "),
            Span::styled(self.heading.to_string(), styles::text_bright_bold()),
        ];
        let mut actions = self.actions;
        if !actions.is_empty() {
            actions.push(Span::raw(" "));
        }
        let subtitle = Line::from(vec![
            Span::raw(" "),
            Span::styled(
                truncate(self.subtitle, area.width.saturating_sub(2) as usize),
                styles::text_muted(),
            ),
        ]);

        Paragraph::new(vec![split_row(heading, actions, area.width), subtitle]).render(area, buf);
    }
}
