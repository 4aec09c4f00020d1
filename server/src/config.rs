//! Command-line and environment configuration.

use clap::Parser;

/// In-memory todo API server.
#[derive(Parser, Debug, Clone)]
#[command(name = "dotask-server")]
#[command(version, about)]
pub struct Config {
    /// Address to bind.
    #[arg(long, env = "DOTASK_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, env = "DOTASK_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Enable debug logging for the server crate.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Log filter directive used when `RUST_LOG` is not set.
    pub fn default_filter(&self) -> &'static str {
        if self.verbose {
            "dotask_server=debug,tower_http=debug,info"
        } else {
            "info"
        }
    }
}
