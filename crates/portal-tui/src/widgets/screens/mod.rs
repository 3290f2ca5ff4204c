//! Content-area screens, one per sidebar section
//!
//! [`ScreenView`] picks the renderer for the active section. Every screen
//! starts with a [`ScreenHeader`] built from [`heading`] and [`subtitle`].

mod app_detail;
mod apps;
mod crm;
mod dashboards;
mod documents;
mod models;
mod projects;
mod runs;
mod settings;
mod studio;
mod workflows;

pub use app_detail::AppDetail;

use portal_app::state::Focus;
use portal_app::{AppState, NavKey};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget},
};

use super::common::{split_row, truncate, ScreenHeader};
use crate::theme::{icons::IconSet, styles};

pub fn heading(key: NavKey) -> &'static str {
    match key {
        NavKey::Projects => "Project home",
        NavKey::Apps => "Apps",
        NavKey::Studio => "Studio",
        NavKey::Documents => "Documents",
        NavKey::Crm => "CRM",
        NavKey::Models => "Models",
        NavKey::Dashboards => "Dashboards",
        NavKey::Workflows => "Workflows",
        NavKey::Runs => "Runs",
        NavKey::Settings => "Settings",
    }
}

pub fn subtitle(key: NavKey) -> &'static str {
    match key {
        NavKey::Projects => "Pinned apps, recent work, and attention needed.",
        NavKey::Apps => "Configured units of work (Dify-style).",
        NavKey::Studio => {
            "Notebook + infinite canvas. Pin outputs, diffs, evidence, and model fields."
        }
        NavKey::Documents => "Bundles, versions, ingest, and diffs.",
        NavKey::Crm => "Entities, relationships, timeline, linked evidence and insights.",
        NavKey::Models => "Domain models, rules, validation runs, and impact diffs.",
        NavKey::Dashboards => "Provenance-first KPIs and exception drilldowns.",
        NavKey::Workflows => "Automation builder (n8n-like) with triggers and run logs.",
        NavKey::Runs => "Audit logs for apps, workflows, ingest pipelines, and validations.",
        NavKey::Settings => "Project settings, permissions, integrations, and environment.",
    }
}

/// Header for `key` with no actions; screens add their own
pub(crate) fn header(key: NavKey) -> ScreenHeader<'static> {
    ScreenHeader::new(heading(key), subtitle(key))
}

/// Split a screen area into header and body rows
pub(crate) fn split_header(area: Rect) -> (Rect, Rect) {
    let rows = Layout::vertical([
        Constraint::Length(ScreenHeader::HEIGHT),
        Constraint::Min(0),
    ])
    .split(area);
    (rows[0], rows[1])
}

/// One list entry: a title row with right-aligned buttons or badges, a muted
/// meta row, then a blank separator
pub(crate) fn entry_lines<'a>(
    title: Vec<Span<'a>>,
    meta: Option<String>,
    right: Vec<Span<'a>>,
    width: u16,
) -> Vec<Line<'a>> {
    let mut lines = vec![split_row(title, right, width)];
    if let Some(meta) = meta {
        lines.push(Line::from(Span::styled(
            truncate(&meta, width as usize),
            styles::text_muted(),
        )));
    }
    lines.push(Line::default());
    lines
}

/// Bold entry title truncated to `width`
pub(crate) fn entry_title(text: &str, width: usize) -> Span<'static> {
    Span::styled(truncate(text, width), styles::text_bright_bold())
}

/// A screen laid out as cards that may be taller than the content area
pub(crate) trait CardScreen: Widget {
    /// Rows needed to show every card in full at `width`
    fn content_height(&self, width: u16) -> u16;
}

/// Render `screen` scrolled down by `offset` rows
///
/// Content that fits is rendered in place. Taller content is laid out on an
/// offscreen buffer at its full height and the visible window copied over,
/// with a scrollbar on the right edge.
fn render_scrolled<S: CardScreen>(screen: S, offset: u16, area: Rect, buf: &mut Buffer) {
    let total = screen.content_height(area.width);
    if total <= area.height {
        screen.render(area, buf);
        return;
    }

    let canvas_area = Rect::new(area.x, 0, area.width, total);
    let mut canvas = Buffer::empty(canvas_area);
    screen.render(canvas_area, &mut canvas);

    let max = total - area.height;
    let offset = offset.min(max);
    for row in 0..area.height {
        for x in area.left()..area.right() {
            let src = canvas.cell((x, offset + row));
            let dst = buf.cell_mut((x, area.y + row));
            if let (Some(src), Some(dst)) = (src, dst) {
                *dst = src.clone();
            }
        }
    }

    let mut scrollbar_state = ScrollbarState::new(usize::from(max))
        .position(usize::from(offset))
        .viewport_content_length(usize::from(area.height));
    Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .track_symbol(Some("│"))
        .thumb_symbol("█")
        .render(area, buf, &mut scrollbar_state);
}

/// Rows the active screen needs at `width`; the Apps screen scrolls its own
/// list and reports none
pub fn content_height(state: &AppState, width: u16) -> u16 {
    let icons = IconSet::default();
    let catalog = &state.catalog;
    match state.active {
        NavKey::Apps => 0,
        NavKey::Projects => projects::ProjectsScreen::new(state, icons, false).content_height(width),
        NavKey::Studio => studio::StudioScreen::new(catalog, false).content_height(width),
        NavKey::Documents => {
            documents::DocumentsScreen::new(catalog, icons, false).content_height(width)
        }
        NavKey::Crm => crm::CrmScreen::new(catalog, icons, false).content_height(width),
        NavKey::Models => models::ModelsScreen::new(catalog, icons, false).content_height(width),
        NavKey::Dashboards => {
            dashboards::DashboardsScreen::new(catalog, icons, false).content_height(width)
        }
        NavKey::Workflows => {
            workflows::WorkflowsScreen::new(catalog, icons, false).content_height(width)
        }
        NavKey::Runs => runs::RunsScreen::new(catalog, false).content_height(width),
        NavKey::Settings => settings::SettingsScreen::new(state, false).content_height(width),
    }
}

/// The active section's screen
pub struct ScreenView<'a> {
    state: &'a AppState,
    icons: IconSet,
}

impl<'a> ScreenView<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self { state, icons }
    }
}

impl Widget for ScreenView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let icons = self.icons;
        let catalog = &state.catalog;
        let focused = state.focus == Focus::Content;
        let offset = state.scroll.offset;
        match state.active {
            NavKey::Apps => apps::AppsScreen::new(state, icons).render(area, buf),
            NavKey::Projects => render_scrolled(
                projects::ProjectsScreen::new(state, icons, focused),
                offset,
                area,
                buf,
            ),
            NavKey::Studio => {
                render_scrolled(studio::StudioScreen::new(catalog, focused), offset, area, buf)
            }
            NavKey::Documents => render_scrolled(
                documents::DocumentsScreen::new(catalog, icons, focused),
                offset,
                area,
                buf,
            ),
            NavKey::Crm => {
                render_scrolled(crm::CrmScreen::new(catalog, icons, focused), offset, area, buf)
            }
            NavKey::Models => render_scrolled(
                models::ModelsScreen::new(catalog, icons, focused),
                offset,
                area,
                buf,
            ),
            NavKey::Dashboards => render_scrolled(
                dashboards::DashboardsScreen::new(catalog, icons, focused),
                offset,
                area,
                buf,
            ),
            NavKey::Workflows => render_scrolled(
                workflows::WorkflowsScreen::new(catalog, icons, focused),
                offset,
                area,
                buf,
            ),
            NavKey::Runs => {
                render_scrolled(runs::RunsScreen::new(catalog, focused), offset, area, buf)
            }
            NavKey::Settings => {
                render_scrolled(settings::SettingsScreen::new(state, focused), offset, area, buf)
            }
        }
    }
}
