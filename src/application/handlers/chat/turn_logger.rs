//! ConversationLogger - background persistence of chat exchanges.
//!
//! The request path enqueues an `Exchange` and returns immediately; a
//! worker task drains the queue into the `ConversationLog`.
//!
//! ## Graceful Shutdown
//!
//! `ConversationLoggerWorker::shutdown` closes the queue and waits until
//! every exchange already enqueued has been written. Dropping the worker
//! without calling it leaves the task running until every
//! `ConversationLogger` handle is gone.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::domain::conversation::Exchange;
use crate::ports::ConversationLog;

/// Cheap, cloneable handle used by request handlers.
#[derive(Clone)]
pub struct ConversationLogger {
    tx: mpsc::Sender<Exchange>,
}

/// Owner of the background worker task.
pub struct ConversationLoggerWorker {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl ConversationLogger {
    /// Starts the worker and returns the handle plus its owner.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn spawn(
        log: Arc<dyn ConversationLog>,
        queue_capacity: usize,
    ) -> (Self, ConversationLoggerWorker) {
        let (tx, rx) = mpsc::channel(queue_capacity.max(1));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(run_worker(log, rx, shutdown_rx));

        (
            Self { tx },
            ConversationLoggerWorker {
                shutdown: shutdown_tx,
                handle,
            },
        )
    }

    /// Queues an exchange for persistence without waiting.
    ///
    /// Returns false if the exchange was dropped (queue full or closed).
    pub fn record(&self, exchange: Exchange) -> bool {
        match self.tx.try_send(exchange) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(exchange)) => {
                tracing::error!(
                    user_turn = %exchange.user().id,
                    "conversation logger queue full, exchange not persisted"
                );
                false
            }
            Err(mpsc::error::TrySendError::Closed(exchange)) => {
                tracing::error!(
                    user_turn = %exchange.user().id,
                    "conversation logger stopped, exchange not persisted"
                );
                false
            }
        }
    }
}

impl ConversationLoggerWorker {
    /// Stops accepting exchanges and waits for the queue to drain.
    pub async fn shutdown(self) {
        // A send error means the worker already exited.
        let _ = self.shutdown.send(true);
        if let Err(e) = self.handle.await {
            tracing::error!(error = %e, "conversation logger worker panicked");
        }
    }
}

async fn run_worker(
    log: Arc<dyn ConversationLog>,
    mut rx: mpsc::Receiver<Exchange>,
    mut shutdown: watch::Receiver<bool>,
) {
    loop {
        tokio::select! {
            received = rx.recv() => match received {
                Some(exchange) => persist(log.as_ref(), &exchange).await,
                None => break,
            },
            // Err means the owner was dropped without a shutdown request.
            Ok(()) = shutdown.changed() => {
                rx.close();
                let mut drained = 0usize;
                while let Some(exchange) = rx.recv().await {
                    persist(log.as_ref(), &exchange).await;
                    drained += 1;
                }
                tracing::debug!(drained, "conversation logger drained");
                break;
            }
        }
    }
}

async fn persist(log: &dyn ConversationLog, exchange: &Exchange) {
    if let Err(err) = log.append_exchange(exchange).await {
        tracing::error!(
            error = %err,
            code = %err.code(),
            user_turn = %exchange.user().id,
            is_error = exchange.bot().is_error,
            "failed to persist conversation exchange"
        );
    }
}
