//! Graceful shutdown signal handling

use std::io;

use thiserror::Error;
use tokio::signal;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

/// Resolves once Ctrl+C or SIGTERM is received.
pub(crate) async fn listen() -> Result<(), ShutdownSignalError> {
    let ctrl_c = async { signal::ctrl_c().await.map_err(ShutdownSignalError::CtrlC) };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .map_err(ShutdownSignalError::SigTerm)?
            .recv()
            .await;
        Ok::<(), ShutdownSignalError>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<(), ShutdownSignalError>>();

    tokio::select! {
        result = ctrl_c => {
            result?;
            tracing::info!("ctrl_c signal received");
        }
        result = terminate => {
            result?;
            tracing::info!("terminate signal received");
        }
    };

    Ok(())
}

/// Shutdown future handed to `axum::serve`.
///
/// A handler that cannot be installed is logged and never fires.
pub(crate) async fn signal() {
    if let Err(source) = listen().await {
        tracing::error!("{source}");
        std::future::pending::<()>().await;
    }
}
