//! Per-connection request/response loop.
//!
//! One [`Connection`] is created per accepted client and runs until the
//! peer closes or the transport fails. The loop is strictly sequential
//! within a connection: read one frame, answer it, read the next. The
//! handler is generic over the stream halves so the whole loop can be
//! exercised against in-memory pipes in tests.

use bytes::Bytes;
use depot_core::constants::FRAME_TERMINATOR;
use depot_index::PackageIndex;
use depot_protocol::{Command, FrameEvent, FrameReader, Response, parse_request};
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

/// Handler for a single client connection.
pub struct Connection<R, W> {
    reader: FrameReader<R>,
    writer: W,
    index: Arc<PackageIndex>,
}

impl<R, W> Connection<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Wrap the two halves of an accepted stream.
    pub fn new(read_half: R, write_half: W, index: Arc<PackageIndex>) -> Self {
        Self {
            reader: FrameReader::new(read_half),
            writer: write_half,
            index,
        }
    }

    /// Drive the connection until the peer closes.
    ///
    /// Application-level problems (`ERROR`, `FAIL`) never end the loop;
    /// only a clean close or a transport fault does.
    ///
    /// # Errors
    /// Returns the underlying I/O error when a read or write against the
    /// stream fails; the caller releases the connection.
    pub async fn run(mut self) -> io::Result<()> {
        loop {
            match self.reader.next_frame().await? {
                FrameEvent::Closed => return Ok(()),
                FrameEvent::Truncated(partial) => {
                    warn!(partial = ?partial, "stream ended mid-message");
                    self.respond(Response::Error).await?;
                }
                FrameEvent::Frame(payload) => {
                    let response = self.handle(&payload);
                    debug!(request = ?payload, response = %response, "request handled");
                    self.respond(response).await?;
                }
            }
        }
    }

    /// Map one frame payload to its response.
    fn handle(&self, payload: &Bytes) -> Response {
        if payload.is_empty() {
            return Response::Error;
        }
        // The frame reader only strips the final terminator; a terminator
        // still embedded in the payload means several logical requests were
        // glued into one frame, and none of them is processed.
        if payload.contains(&FRAME_TERMINATOR) {
            return Response::Error;
        }

        let trimmed = payload.slice_ref(payload.trim_ascii());
        match parse_request(&trimmed) {
            Ok(request) => {
                let accepted = match request.command {
                    Command::Index => self.index.index(request.name, request.deps),
                    Command::Remove => self.index.remove(&request.name),
                    Command::Query => self.index.query(&request.name),
                };
                Response::from_verdict(accepted)
            }
            Err(error) => {
                debug!(%error, "rejected request");
                Response::Error
            }
        }
    }

    /// Emit one response line as a single write.
    async fn respond(&mut self, response: Response) -> io::Result<()> {
        self.writer.write_all(response.as_line()).await?;
        self.writer.flush().await
    }
}
