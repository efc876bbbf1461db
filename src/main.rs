use cart_service::{config::ServerConfig, observability, server};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| e.exit());

    // Logging is not up yet, so failures here go to stderr
    if let Err(e) = observability::init(&config.logging) {
        eprintln!("{e}");
        process::exit(1);
    }

    if let Err(e) = server::run(&config).await {
        error!("{e}");
        process::exit(1);
    }
}
