use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dotask_server::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter()));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{addr}");
    dotask_server::run(listener).await?;
    tracing::info!("server stopped");
    Ok(())
}
