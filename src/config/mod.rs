//! Command-line and environment configuration

use clap::Parser;
use std::time::Duration;

pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerRuntimeConfig;

pub mod logging;
pub mod server;

/// Default port shared by the server and the client
pub const DEFAULT_PORT: u16 = 50051;

/// Cart service server configuration
#[derive(Debug, Parser)]
#[command(name = "cart_service", about = "In-memory cart service", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

/// Demo client configuration
#[derive(Debug, Parser)]
#[command(name = "cart_client", about = "Cart service demo client", long_about = None)]
pub struct ClientConfig {
    /// Address of the cart server (host:port or URL)
    #[arg(long, env = "CART_SERVER_ADDR", default_value = "localhost:50051")]
    pub addr: String,

    /// Per-request timeout in milliseconds
    #[arg(long, env = "CART_CLIENT_TIMEOUT_MS", default_value_t = 1_000_u64)]
    pub timeout_ms: u64,

    /// Cart to operate on
    #[arg(long, default_value = "1")]
    pub cart_id: String,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
