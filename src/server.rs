//! Server lifecycle: bind, serve, shut down

use crate::{
    cart::{AppState, SharedState},
    config::ServerConfig,
    error::ServerError,
    router::create_app_router,
    shutdown,
};
use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

/// Binds the listening socket.
pub async fn bind(addr: &str) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.to_owned(),
            source,
        })
}

/// Serves the cart service on `listener` until `shutdown` resolves.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve<F>(listener: TcpListener, state: SharedState, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_app_router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}

/// Runs the server described by `config` until Ctrl+C or SIGTERM.
pub async fn run(config: &ServerConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr();
    let listener = bind(&addr).await?;

    match listener.local_addr() {
        Ok(local) => info!("server listening at {local}"),
        Err(_) => info!("server listening at {addr}"),
    }

    serve(listener, AppState::shared(), shutdown::signal()).await?;

    info!("server stopped");
    Ok(())
}
