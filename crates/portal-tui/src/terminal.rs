//! Terminal setup and restoration

use portal_core::prelude::*;
use ratatui::DefaultTerminal;

/// Install a panic hook that restores the terminal and records the panic
/// in the log file before the default report is printed
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        error!("Portal panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}

/// Enter raw mode and the alternate screen
pub fn enter() -> DefaultTerminal {
    install_panic_hook();
    let terminal = ratatui::init();
    debug!("Terminal initialized");
    terminal
}

/// Leave the alternate screen and restore the cooked terminal
pub fn leave() {
    ratatui::restore();
    debug!("Terminal restored");
}
