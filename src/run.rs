//! Application execution logic.
//!
//! This module contains the main async execution loop that watches a
//! user's payment records and logs every status transition.

use thiserror::Error;
use tokio::signal;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::UnboundedReceiverStream;

use shop_console::api::{ApiError, PaymentRecord, PaymentsApi, ReqwestClient};
use shop_console::config::{ValidatedConfig, defaults};
use shop_console::detector::{ChangeKind, PaymentWatcher, StartError};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The watcher rejected its start parameters.
    #[error("Failed to start payment watcher: {0}")]
    Start(#[from] StartError),

    /// The configured bearer token is not a valid header value.
    #[error("Failed to configure payment client: {0}")]
    Client(#[source] ApiError),
}

/// One transition forwarded from the watcher callback to the log loop.
struct ChangeEvent {
    record: PaymentRecord,
    kind: ChangeKind,
}

/// Executes the main application loop.
///
/// This function:
/// 1. Creates the payment service client
/// 2. Starts the payment watcher for the configured user
/// 3. Logs every reported transition until shutdown signal (Ctrl+C or SIGTERM)
///
/// # Errors
///
/// Returns an error if the bearer token is invalid or the watcher
/// rejects the configured user.
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let client = ReqwestClient::with_timeout(defaults::http_timeout());
    let mut payments = PaymentsApi::new(client, config.payment_url.clone());
    if let Some(bearer) = &config.bearer {
        payments = payments.with_bearer(bearer).map_err(RunError::Client)?;
    }

    // The callback runs on the watcher's task; it only forwards the
    // transition so a slow terminal never delays a polling cycle.
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = PaymentWatcher::new(payments)
        .with_interval(config.interval)
        .start(&config.user, move |record, kind| {
            // A send error only happens during shutdown, when the
            // receiver is already gone.
            let _ = tx.send(ChangeEvent {
                record: record.clone(),
                kind,
            });
        })?;

    tracing::info!(
        user = %config.user,
        interval = ?config.interval,
        "watching payment records"
    );

    let mut events = UnboundedReceiverStream::new(rx);
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;

            () = &mut shutdown => {
                tracing::info!("Shutdown signal received, stopping...");
                break;
            }

            Some(event) = events.next() => {
                tracing::info!("{}", describe_change(&event.record, event.kind));
            }
        }
    }

    handle.shutdown().await;
    Ok(())
}

/// Returns a future that completes when a shutdown signal is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}

/// Renders one transition as the log line shown to the operator.
fn describe_change(record: &PaymentRecord, kind: ChangeKind) -> String {
    match kind {
        ChangeKind::NewPayment => {
            format!("new payment {} ({})", record.id, record.status)
        }
        ChangeKind::PendingToSuccess => {
            format!("payment {} completed ({})", record.id, record.status)
        }
        ChangeKind::StatusChanged => {
            format!("payment {} changed status to {}", record.id, record.status)
        }
    }
}
