//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::nav::NavKey;
use crate::state::{AppPhase, AppState, AppsPane, Focus, UiMode};
use portal_core::prelude::*;

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation shell
        // ─────────────────────────────────────────────────────────
        Message::SelectNav(key) => {
            state.select_nav(key);
            UpdateResult::none()
        }

        Message::NextNav => UpdateResult::message(Message::SelectNav(state.active.next())),
        Message::PrevNav => UpdateResult::message(Message::SelectNav(state.active.prev())),
        Message::FirstNav => UpdateResult::message(Message::SelectNav(NavKey::Projects)),
        Message::LastNav => UpdateResult::message(Message::SelectNav(NavKey::Settings)),

        Message::FocusContent => {
            state.focus = Focus::Content;
            UpdateResult::none()
        }

        Message::FocusSidebar => {
            state.focus = Focus::Sidebar;
            state.apps_view.pane = AppsPane::List;
            UpdateResult::none()
        }

        Message::ScrollUp => {
            state.scroll.scroll_up(1);
            UpdateResult::none()
        }
        Message::ScrollDown => {
            state.scroll.scroll_down(1);
            UpdateResult::none()
        }
        Message::PageUp => {
            state.scroll.page_up();
            UpdateResult::none()
        }
        Message::PageDown => {
            state.scroll.page_down();
            UpdateResult::none()
        }
        Message::ScrollToTop => {
            state.scroll.scroll_to_top();
            UpdateResult::none()
        }
        Message::ScrollToBottom => {
            state.scroll.scroll_to_bottom();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Project selector
        // ─────────────────────────────────────────────────────────
        Message::OpenProjectPicker => {
            let current = state
                .active_project()
                .and_then(|p| state.catalog.projects.iter().position(|q| q.id == p.id))
                .unwrap_or(0);
            state.project_picker.index = current;
            state.ui_mode = UiMode::ProjectPicker;
            UpdateResult::none()
        }

        Message::ProjectPickerUp => {
            state.project_picker.index = state.project_picker.index.saturating_sub(1);
            UpdateResult::none()
        }

        Message::ProjectPickerDown => {
            let last = state.catalog.projects.len().saturating_sub(1);
            state.project_picker.index = (state.project_picker.index + 1).min(last);
            UpdateResult::none()
        }

        Message::ConfirmProjectPicker => {
            state.ui_mode = UiMode::Normal;
            match state.catalog.projects.get(state.project_picker.index) {
                Some(project) => UpdateResult::message(Message::SelectProject {
                    id: project.id.clone(),
                }),
                None => UpdateResult::none(),
            }
        }

        Message::CancelProjectPicker => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }

        Message::SelectProject { id } => {
            state.select_project(&id);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Apps screen
        // ─────────────────────────────────────────────────────────
        Message::SetAppFilter(filter) => {
            debug!("App filter: {}", filter.label());
            state.set_filter(filter);
            UpdateResult::none()
        }

        Message::CycleAppFilter { forward } => {
            let current = state.apps_view.filter;
            let next = if forward { current.next() } else { current.prev() };
            UpdateResult::message(Message::SetAppFilter(next))
        }

        Message::SelectApp { id } => {
            state.select_app(&id);
            UpdateResult::none()
        }

        Message::SelectNextApp => {
            state.move_app_selection(1);
            UpdateResult::none()
        }

        Message::SelectPrevApp => {
            state.move_app_selection(-1);
            UpdateResult::none()
        }

        Message::FocusAppList => {
            state.apps_view.pane = AppsPane::List;
            UpdateResult::none()
        }

        Message::FocusAppDetail => {
            if state.detail().is_some() {
                state.apps_view.pane = AppsPane::Detail;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // App detail
        // ─────────────────────────────────────────────────────────
        Message::SelectDetailTab(tab) => {
            if let Some(detail) = state.apps_view.detail.as_mut() {
                detail.tab = tab;
            }
            UpdateResult::none()
        }

        Message::NextDetailTab => match state.detail() {
            Some(detail) => UpdateResult::message(Message::SelectDetailTab(detail.tab.next())),
            None => UpdateResult::none(),
        },

        Message::PrevDetailTab => match state.detail() {
            Some(detail) => UpdateResult::message(Message::SelectDetailTab(detail.tab.prev())),
            None => UpdateResult::none(),
        },

        Message::NextRunField => {
            if let Some(detail) = state.apps_view.detail.as_mut() {
                detail.field = detail.field.next();
            }
            UpdateResult::none()
        }

        Message::PrevRunField => {
            if let Some(detail) = state.apps_view.detail.as_mut() {
                detail.field = detail.field.prev();
            }
            UpdateResult::none()
        }

        Message::ActivateRunField => match state.detail().map(|d| d.field) {
            Some(field) if field.is_text() => UpdateResult::message(Message::StartEditRunField),
            Some(_) => UpdateResult::message(Message::CycleBundle { forward: true }),
            None => UpdateResult::none(),
        },

        Message::StartEditRunField => {
            if state.detail().is_some_and(|d| d.field.is_text()) {
                state.ui_mode = UiMode::TextInput;
            }
            UpdateResult::none()
        }

        Message::RunFieldInput { text } => {
            edit_focused_text(state, |value| value.push_str(&text));
            UpdateResult::none()
        }

        Message::RunFieldBackspace => {
            edit_focused_text(state, |value| {
                value.pop();
            });
            UpdateResult::none()
        }

        Message::RunFieldClear => {
            edit_focused_text(state, String::clear);
            UpdateResult::none()
        }

        Message::FinishEditRunField => {
            if state.ui_mode == UiMode::TextInput {
                state.ui_mode = UiMode::Normal;
            }
            UpdateResult::none()
        }

        Message::CycleBundle { forward } => {
            state.cycle_bundle(forward);
            UpdateResult::none()
        }
    }
}

/// Apply an edit to the focused text input, if one is focused
fn edit_focused_text(state: &mut AppState, edit: impl FnOnce(&mut String)) {
    if let Some(detail) = state.apps_view.detail.as_mut() {
        let field = detail.field;
        if let Some(value) = detail.form.text_mut(field) {
            edit(value);
        }
    }
}
