//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::nav::NavKey;
use crate::state::{AppFilter, DetailTab};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Poll timeout with no terminal event
    Tick,

    /// Leave the portal
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation shell
    // ─────────────────────────────────────────────────────────
    SelectNav(NavKey),
    NextNav,
    PrevNav,
    FirstNav,
    LastNav,
    FocusContent,
    FocusSidebar,

    // Content scrolling on card screens
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // Project selector
    // ─────────────────────────────────────────────────────────
    OpenProjectPicker,
    ProjectPickerUp,
    ProjectPickerDown,
    ConfirmProjectPicker,
    CancelProjectPicker,
    SelectProject { id: String },

    // ─────────────────────────────────────────────────────────
    // Apps screen
    // ─────────────────────────────────────────────────────────
    SetAppFilter(AppFilter),
    CycleAppFilter { forward: bool },
    SelectApp { id: String },
    SelectNextApp,
    SelectPrevApp,
    FocusAppList,
    FocusAppDetail,

    // ─────────────────────────────────────────────────────────
    // App detail
    // ─────────────────────────────────────────────────────────
    SelectDetailTab(DetailTab),
    NextDetailTab,
    PrevDetailTab,
    NextRunField,
    PrevRunField,
    /// Enter on the focused Run-tab input
    ActivateRunField,
    StartEditRunField,
    RunFieldInput { text: String },
    RunFieldBackspace,
    RunFieldClear,
    FinishEditRunField,
    CycleBundle { forward: bool },
}
