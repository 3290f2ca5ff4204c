//! Screen layout definitions

use ratatui::layout::{Constraint, Layout, Rect};

/// Narrowest content column the sidebar may leave behind
pub const MIN_CONTENT_WIDTH: u16 = 40;

/// Content width below which two-column screens stack their cards
pub const MIN_TWO_COLUMN_WIDTH: u16 = 72;

/// Screen areas for the main layout
pub struct ScreenAreas {
    pub sidebar: Rect,
    pub top_bar: Rect,
    pub content: Rect,
    pub footer: Rect,
}

/// Create the main screen layout
///
/// The sidebar keeps its configured width unless that would squeeze the
/// content below [`MIN_CONTENT_WIDTH`].
pub fn create(area: Rect, sidebar_width: u16) -> ScreenAreas {
    let sidebar_width = sidebar_width.min(area.width.saturating_sub(MIN_CONTENT_WIDTH));

    let columns =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).split(area);

    let rows = Layout::vertical([
        Constraint::Length(3), // Top bar
        Constraint::Min(3),    // Content
        Constraint::Length(1), // Key hints
    ])
    .split(columns[1]);

    ScreenAreas {
        sidebar: columns[0],
        top_bar: rows[0],
        content: rows[1],
        footer: rows[2],
    }
}

/// Split a content area into two columns, or stack them when narrow
pub fn two_columns(area: Rect, left_percent: u16) -> (Rect, Rect) {
    if is_stacked(area.width) {
        let rows = Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        return (rows[0], rows[1]);
    }
    let cols = Layout::horizontal([
        Constraint::Percentage(left_percent),
        Constraint::Percentage(100 - left_percent),
    ])
    .split(area);
    (cols[0], cols[1])
}

/// Whether two-column screens stack their cards at this width
pub fn is_stacked(width: u16) -> bool {
    width < MIN_TWO_COLUMN_WIDTH
}

/// Like [`two_columns`], but when stacked the first card gets `first_rows`
/// and the second takes the rest
pub fn card_columns(area: Rect, left_percent: u16, first_rows: u16) -> (Rect, Rect) {
    if is_stacked(area.width) {
        let rows =
            Layout::vertical([Constraint::Length(first_rows), Constraint::Min(0)]).split(area);
        return (rows[0], rows[1]);
    }
    two_columns(area, left_percent)
}
