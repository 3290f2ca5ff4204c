//! Main TUI runner - entry point and event loop

use portal_app::message::Message;
use portal_app::process;
use portal_app::signals;
use portal_app::AppState;
use portal_core::prelude::*;
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the TUI until the user quits or a termination signal arrives
pub async fn run(mut state: AppState) -> Result<()> {
    let mut term = terminal::enter();

    // External messages (signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    let signal_task = signals::spawn_signal_handler(msg_tx);

    info!("Portal started on section '{}'", state.active);
    let result = run_loop(&mut term, &mut state, msg_rx);

    signal_task.abort();
    terminal::leave();
    info!("Portal stopped");
    result
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Process external messages (from signal handler, etc.)
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg);
        }

        let size = terminal.size()?;
        render::sync_scroll(state, Rect::new(0, 0, size.width, size.height));
        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process::process_message(state, message);
        }
    }

    Ok(())
}
