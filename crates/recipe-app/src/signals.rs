//! Quit on SIGINT/SIGTERM (Ctrl+C on Windows)

use std::future::Future;

use tokio::sync::mpsc;

use crate::message::Message;
use recipe_core::prelude::*;

/// Spawn a task that turns the first termination signal into [`Message::Quit`]
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    forward_shutdown(shutdown_signal(), tx);
}

fn forward_shutdown<F>(signal: F, tx: mpsc::Sender<Message>) -> tokio::task::JoinHandle<()>
where
    F: Future<Output = Result<&'static str>> + Send + 'static,
{
    tokio::spawn(async move {
        match signal.await {
            Ok(name) => {
                info!(signal = name, "Shutdown signal received");
                // Receiver gone means the loop already exited
                let _ = tx.send(Message::Quit).await;
            }
            Err(e) => error!("Signal handler error: {}", e),
        }
    })
}

/// Resolve with the name of the signal that arrived
async fn shutdown_signal() -> Result<&'static str> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let listen = |kind: SignalKind, name: &str| {
            signal(kind).map_err(|e| Error::terminal(format!("Cannot listen for {}: {}", name, e)))
        };
        let mut sigint = listen(SignalKind::interrupt(), "SIGINT")?;
        let mut sigterm = listen(SignalKind::terminate(), "SIGTERM")?;

        tokio::select! {
            _ = sigint.recv() => Ok("SIGINT"),
            _ = sigterm.recv() => Ok("SIGTERM"),
        }
    }

    #[cfg(windows)]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Cannot listen for Ctrl+C: {}", e)))?;
        Ok("Ctrl+C")
    }
}
