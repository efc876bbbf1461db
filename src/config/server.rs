//! Server Config

use clap::Args;

/// Server runtime network settings.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Server host address
    #[arg(short = 'H', long, env = "CART_SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "CART_SERVER_PORT", default_value_t = super::DEFAULT_PORT)]
    pub port: u16,
}

impl ServerRuntimeConfig {
    /// Get the socket address for binding.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
