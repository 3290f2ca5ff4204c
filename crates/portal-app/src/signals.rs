//! OS signal listener
//!
//! Turns SIGINT/SIGTERM (Ctrl+C on Windows) into [`Message::Quit`] on the
//! runner's message channel.

use std::fmt;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use portal_core::prelude::*;

/// Termination signal that ended the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => f.write_str("interrupt"),
            ShutdownSignal::Terminate => f.write_str("terminate"),
        }
    }
}

/// Spawn the listener; abort the returned handle to stop it
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(signal) => {
                info!("Received {} signal, quitting", signal);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Runner gone before {} signal was delivered", signal);
                }
            }
            Err(e) => error!("Signal listener failed: {}", e),
        }
    })
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("Cannot listen for {}: {}", name, e)))
    };
    let mut sigint = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut sigterm = listen(SignalKind::terminate(), "SIGTERM")?;

    Ok(tokio::select! {
        _ = sigint.recv() => ShutdownSignal::Interrupt,
        _ = sigterm.recv() => ShutdownSignal::Terminate,
    })
}

#[cfg(windows)]
async fn wait_for_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Cannot listen for Ctrl+C: {}", e)))?;
    Ok(ShutdownSignal::Interrupt)
}
