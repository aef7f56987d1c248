//! TCP server loop for the depot package indexer.
//!
//! The server owns the listening socket and the shared
//! [`PackageIndex`](depot_index::PackageIndex) handle. Each accepted
//! connection gets its own task and its own [`Connection`] handler; the
//! store outlives them all. There is no per-connection bookkeeping beyond
//! the task itself: a client that disconnects simply ends its task.

use crate::connection::Connection;
use depot_core::constants::{DEFAULT_HOST, DEFAULT_PORT};
use depot_index::PackageIndex;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Configuration for the indexer server.
///
/// # Example
///
/// ```
/// use depot_network::ServerConfig;
///
/// let config = ServerConfig {
///     bind_addr: "127.0.0.1:0".parse().unwrap(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the listener to.
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: format!("{DEFAULT_HOST}:{DEFAULT_PORT}").parse().unwrap(),
        }
    }
}

/// Errors that can occur while running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to the configured address.
    #[error("failed to bind to {0}")]
    BindFailed(SocketAddr),

    /// Low-level I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Accepting end of the indexer.
pub struct Server {
    listener: TcpListener,
    index: Arc<PackageIndex>,
}

impl Server {
    /// Bind the listener and take a handle to the shared store.
    ///
    /// # Errors
    /// Returns [`ServerError::BindFailed`] when the address is already in
    /// use or not bindable.
    pub async fn bind(config: ServerConfig, index: Arc<PackageIndex>) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(config.bind_addr)
            .await
            .map_err(|_| ServerError::BindFailed(config.bind_addr))?;

        info!("listening on {}", config.bind_addr);

        Ok(Self { listener, index })
    }

    /// The address the listener actually bound to.
    ///
    /// Useful for tests that bind to port 0 and need the assigned port.
    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        self.listener.local_addr().map_err(Into::into)
    }

    /// Accept connections forever, one task per client.
    ///
    /// A failed accept is logged and does not stop the loop; connection
    /// handlers report their own outcomes. This future only resolves if
    /// the listener itself is torn down by the runtime.
    pub async fn run(self) -> Result<(), ServerError> {
        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(error) => {
                    warn!(%error, "failed to accept connection");
                    continue;
                }
            };

            // Responses are single short lines; don't let Nagle hold them.
            if let Err(error) = stream.set_nodelay(true) {
                warn!(%peer, %error, "failed to set TCP_NODELAY");
            }

            let index = Arc::clone(&self.index);
            tokio::spawn(async move {
                info!(%peer, "client connected");
                let (read_half, write_half) = stream.into_split();
                match Connection::new(read_half, write_half, index).run().await {
                    Ok(()) => info!(%peer, "client disconnected"),
                    Err(error) => warn!(%peer, %error, "connection closed on transport error"),
                }
            });
        }
    }
}
