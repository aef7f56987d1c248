//! Shared helpers for the server integration tests.

#![allow(dead_code)]

use depot_index::PackageIndex;
use depot_network::{Server, ServerConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};

/// Bind a fresh server on an ephemeral port and run it in the background.
pub async fn spawn_server() -> SocketAddr {
    spawn_server_with(Arc::new(PackageIndex::new())).await
}

/// Like [`spawn_server`], but over a caller-provided store.
pub async fn spawn_server_with(index: Arc<PackageIndex>) -> SocketAddr {
    let config = ServerConfig {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
    };
    let server = Server::bind(config, index).await.unwrap();
    let addr = server.local_addr().unwrap();
    tokio::spawn(server.run());
    addr
}

/// A line-oriented test client.
pub struct TestClient {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

impl TestClient {
    pub async fn connect(addr: SocketAddr) -> Self {
        let stream = TcpStream::connect(addr).await.unwrap();
        let (read_half, write_half) = stream.into_split();
        Self {
            reader: BufReader::new(read_half),
            writer: write_half,
        }
    }

    /// Write raw bytes without waiting for anything.
    pub async fn send(&mut self, bytes: &[u8]) {
        self.writer.write_all(bytes).await.unwrap();
        self.writer.flush().await.unwrap();
    }

    /// Read one response line, terminator included.
    pub async fn recv(&mut self) -> String {
        let mut line = String::new();
        self.reader.read_line(&mut line).await.unwrap();
        line
    }

    /// Send one request line and await its response.
    pub async fn request(&mut self, line: &str) -> String {
        self.send(line.as_bytes()).await;
        self.recv().await
    }

    /// Half-close the outgoing direction, as a peer vanishing mid-message.
    pub async fn shutdown_write(&mut self) {
        self.writer.shutdown().await.unwrap();
    }

    /// Read until the server closes; returns the number of leftover bytes.
    pub async fn read_to_eof(&mut self) -> usize {
        let mut rest = Vec::new();
        tokio::io::AsyncReadExt::read_to_end(&mut self.reader, &mut rest)
            .await
            .unwrap()
    }
}
