//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::nav::NavKey;
use crate::state::{AppState, AppsPane, DetailTab, Focus, RunField, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::ProjectPicker => handle_key_project_picker(key),
        UiMode::TextInput => handle_key_text_input(key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// Handle key events while the project picker is open
fn handle_key_project_picker(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::ProjectPickerUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ProjectPickerDown),
        InputKey::Enter => Some(Message::ConfirmProjectPicker),
        InputKey::Esc | InputKey::Char('p') => Some(Message::CancelProjectPicker),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events while a Run-tab text input is being edited
fn handle_key_text_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc => Some(Message::FinishEditRunField),
        InputKey::Backspace => Some(Message::RunFieldBackspace),
        InputKey::CharCtrl('u') => Some(Message::RunFieldClear),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char(c) => Some(Message::RunFieldInput {
            text: c.to_string(),
        }),
        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    // Keys that work regardless of focus
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Char('p') => return Some(Message::OpenProjectPicker),
        InputKey::Char(c @ '0'..='9') => return NavKey::from_digit(c).map(Message::SelectNav),
        _ => {}
    }

    match state.focus {
        Focus::Sidebar => handle_key_sidebar(key),
        Focus::Content => match state.active {
            NavKey::Apps => handle_key_apps(state, key),
            _ => handle_key_static_screen(key),
        },
    }
}

fn handle_key_sidebar(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::PrevNav),
        InputKey::Down | InputKey::Char('j') => Some(Message::NextNav),
        InputKey::Home => Some(Message::FirstNav),
        InputKey::End => Some(Message::LastNav),
        InputKey::Enter | InputKey::Right | InputKey::Tab | InputKey::Char('l') => {
            Some(Message::FocusContent)
        }
        _ => None,
    }
}

/// Card screens scroll their content and hand focus back
fn handle_key_static_screen(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home => Some(Message::ScrollToTop),
        InputKey::End => Some(Message::ScrollToBottom),
        InputKey::Esc | InputKey::Left | InputKey::BackTab | InputKey::Char('h') => {
            Some(Message::FocusSidebar)
        }
        _ => None,
    }
}

fn handle_key_apps(state: &AppState, key: InputKey) -> Option<Message> {
    match state.apps_view.pane {
        AppsPane::List => handle_key_apps_list(key),
        AppsPane::Detail => handle_key_app_detail(state, key),
    }
}

fn handle_key_apps_list(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevApp),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNextApp),
        InputKey::Char('f') => Some(Message::CycleAppFilter { forward: true }),
        InputKey::Char('F') => Some(Message::CycleAppFilter { forward: false }),
        InputKey::Enter | InputKey::Right | InputKey::Char('l') => Some(Message::FocusAppDetail),
        InputKey::Esc | InputKey::Left | InputKey::Char('h') => Some(Message::FocusSidebar),
        _ => None,
    }
}

fn handle_key_app_detail(state: &AppState, key: InputKey) -> Option<Message> {
    let detail = state.detail()?;

    match key {
        InputKey::Tab | InputKey::Char(']') => return Some(Message::NextDetailTab),
        InputKey::BackTab | InputKey::Char('[') => return Some(Message::PrevDetailTab),
        InputKey::Esc => return Some(Message::FocusAppList),
        _ => {}
    }

    if detail.tab != DetailTab::Run {
        return match key {
            InputKey::Left | InputKey::Char('h') => Some(Message::FocusAppList),
            _ => None,
        };
    }

    let on_bundle = detail.field == RunField::Bundle;
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::PrevRunField),
        InputKey::Down | InputKey::Char('j') => Some(Message::NextRunField),
        InputKey::Enter => Some(Message::ActivateRunField),
        InputKey::Left if on_bundle => Some(Message::CycleBundle { forward: false }),
        InputKey::Right if on_bundle => Some(Message::CycleBundle { forward: true }),
        InputKey::Left | InputKey::Char('h') => Some(Message::FocusAppList),
        _ => None,
    }
}
