//! Process entry point for the depot indexer daemon.
//!
//! Usage: `depot-server [listen-addr]`, defaulting to `127.0.0.1:8080`.
//! Log verbosity follows `RUST_LOG` (`info` if unset).

use anyhow::Context;
use depot_index::PackageIndex;
use depot_network::{Server, ServerConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(addr) => ServerConfig {
            bind_addr: addr
                .parse::<SocketAddr>()
                .with_context(|| format!("invalid listen address '{addr}'"))?,
        },
        None => ServerConfig::default(),
    };

    let index = Arc::new(PackageIndex::new());
    let server = Server::bind(config, index)
        .await
        .context("failed to start the indexer")?;

    info!("depot indexer {} ready", depot_core::VERSION);
    server.run().await?;
    Ok(())
}
