//! Main render/view function (View in TEA pattern)


use portal_app::state::{Focus, UiMode};
use portal_app::AppState;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};
use crate::widgets::{modal_overlay, screens};

/// Record the active screen's height against the content viewport of a
/// terminal of size `area`
///
/// Runs before each draw so scrolling stops at the end of the content.
pub fn sync_scroll(state: &mut AppState, area: Rect) {
    let content = layout::create(area, state.settings.ui.sidebar_width).content;
    let total = screens::content_height(state, content.width);
    state.scroll.update_content_size(total, content.height);
}

/// Render the complete UI (View function in TEA)
///
/// Pure: reads the state and draws the sidebar, top bar, active screen and
/// key hints, plus the project picker when it is open.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let icons = IconSet::new(state.settings.ui.icons);
    let areas = layout::create(area, state.settings.ui.sidebar_width);

    let sidebar = widgets::Sidebar::new(state.active, icons)
        .focused(state.focus == Focus::Sidebar && state.ui_mode == UiMode::Normal);
    frame.render_widget(sidebar, areas.sidebar);

    let picker_open = state.ui_mode == UiMode::ProjectPicker;
    let top_bar = widgets::TopBar::new(state.active_project(), icons)
        .show_description(state.settings.ui.show_project_description)
        .picker_open(picker_open);
    frame.render_widget(top_bar, areas.top_bar);

    frame.render_widget(widgets::ScreenView::new(state, icons), areas.content);
    frame.render_widget(widgets::KeyHints::new(state), areas.footer);

    if picker_open {
        modal_overlay::dim_background(frame.buffer_mut(), areas.content);
        let picker = widgets::ProjectPicker::new(
            &state.catalog.projects,
            &state.project_id,
            state.project_picker.index,
        );
        frame.render_widget(picker, area);
    }
}
