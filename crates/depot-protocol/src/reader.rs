//! Async frame reader over a byte stream.
//!
//! [`FrameReader`] owns the read half of a connection and yields one
//! [`FrameEvent`] per call: a complete payload, the end of the stream, or a
//! message truncated by the peer closing mid-frame. It reads in fixed-size
//! chunks and delegates reassembly to [`FrameBuffer`](crate::FrameBuffer).
//!
//! The reader is generic over [`AsyncRead`] so the connection handler can be
//! exercised against in-memory streams in tests and against
//! `tokio::net::TcpStream` halves in production.

use crate::frame::FrameBuffer;
use bytes::Bytes;
use depot_core::constants::READ_CHUNK_BYTES;
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Outcome of waiting for the next frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameEvent {
    /// A newline-terminated message arrived; the payload has its trailing
    /// terminator stripped (interior terminators, if any, are preserved and
    /// left for the handler's validity check).
    Frame(Bytes),

    /// The peer closed the stream with a partial message buffered. The
    /// handler answers `ERROR`; the next call reports `Closed`.
    Truncated(Bytes),

    /// The peer closed the stream cleanly between messages.
    Closed,
}

/// Reads newline-terminated frames from an async byte stream.
#[derive(Debug)]
pub struct FrameReader<R> {
    stream: R,

    /// Reassembles messages that span multiple reads.
    buffer: FrameBuffer,

    /// Scratch space for a single read; one read is one framing chunk.
    chunk: Box<[u8]>,
}

impl<R: AsyncRead + Unpin> FrameReader<R> {
    /// Wrap the read half of a connection.
    pub fn new(stream: R) -> Self {
        Self {
            stream,
            buffer: FrameBuffer::new(),
            chunk: vec![0u8; READ_CHUNK_BYTES].into_boxed_slice(),
        }
    }

    /// Wait for the next frame event.
    ///
    /// Loops over socket reads until a chunk completes a frame or the
    /// stream ends. A zero-byte read with an empty accumulator is a clean
    /// close; with buffered bytes it is a truncated message.
    ///
    /// # Errors
    /// Propagates transport errors from the underlying stream; the caller
    /// treats those as fatal for the connection.
    pub async fn next_frame(&mut self) -> io::Result<FrameEvent> {
        loop {
            let n = self.stream.read(&mut self.chunk).await?;
            if n == 0 {
                return Ok(if self.buffer.is_empty() {
                    FrameEvent::Closed
                } else {
                    FrameEvent::Truncated(self.buffer.take_remainder())
                });
            }
            if let Some(payload) = self.buffer.feed(&self.chunk[..n]) {
                return Ok(FrameEvent::Frame(payload));
            }
        }
    }
}
