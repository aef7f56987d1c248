//! Network layer for the depot package indexer.
//!
//! This crate binds the protocol pieces to TCP: [`Server`] accepts
//! connections and spawns one task per client, and [`Connection`] drives a
//! single client's request/response loop against the shared
//! [`PackageIndex`](depot_index::PackageIndex).
//!
//! # Example
//!
//! ```no_run
//! use depot_index::PackageIndex;
//! use depot_network::{Server, ServerConfig};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let index = Arc::new(PackageIndex::new());
//! let server = Server::bind(ServerConfig::default(), index).await?;
//! server.run().await?;
//! # Ok(())
//! # }
//! ```

mod connection;
mod server;

pub use connection::Connection;
pub use server::{Server, ServerConfig, ServerError};
