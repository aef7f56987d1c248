//! Chunk accumulator for line-terminated frames.
//!
//! TCP is a stream protocol without message boundaries: a request may arrive
//! split across arbitrarily many segments, and a single read may carry the
//! tail of one message glued to the head of another. [`FrameBuffer`] is the
//! stateful piece that reassembles frames, fed one read-chunk at a time.
//!
//! # Framing rule
//!
//! A frame completes when a fed chunk's **last byte** is the terminator
//! (`\n`); everything accumulated so far, minus that trailing terminator, is
//! the frame payload. A terminator in the *interior* of a chunk is not a
//! boundary, so `A\nB\n` delivered in one chunk yields the single payload
//! `A\nB`; the connection handler then rejects the embedded newline rather
//! than process two requests from one frame. Pipelining is deliberately
//! unsupported: clients must await each response before sending the next
//! request.
//!
//! # Usage
//!
//! ```
//! use depot_protocol::FrameBuffer;
//!
//! let mut buffer = FrameBuffer::new();
//!
//! // A request arriving in three segments:
//! assert!(buffer.feed(b"QUERY").is_none());
//! assert!(buffer.feed(b"|pckg").is_none());
//! let payload = buffer.feed(b"|\n").unwrap();
//! assert_eq!(&payload[..], b"QUERY|pckg|");
//! ```

use bytes::{Bytes, BytesMut};
use depot_core::constants::{FRAME_TERMINATOR, READ_CHUNK_BYTES};

/// Accumulates read-chunks into newline-terminated frames.
#[derive(Debug)]
pub struct FrameBuffer {
    /// Bytes of the in-flight message, across however many chunks it spans.
    buf: BytesMut,
}

impl FrameBuffer {
    /// Create an empty accumulator sized for one read-chunk.
    pub fn new() -> Self {
        Self {
            buf: BytesMut::with_capacity(READ_CHUNK_BYTES),
        }
    }

    /// Feed one read-chunk.
    ///
    /// Returns the completed frame payload (trailing terminator stripped)
    /// when the chunk's last byte is the terminator, or `None` when the
    /// message is still in flight. An empty chunk never completes a frame;
    /// zero-length reads are the reader's end-of-stream signal and are not
    /// fed here.
    pub fn feed(&mut self, chunk: &[u8]) -> Option<Bytes> {
        self.buf.extend_from_slice(chunk);
        if chunk.last() == Some(&FRAME_TERMINATOR) {
            let mut payload = self.buf.split().freeze();
            payload.truncate(payload.len() - 1);
            Some(payload)
        } else {
            None
        }
    }

    /// Whether any bytes of a partial message are buffered.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Drain whatever is buffered of an unterminated message.
    ///
    /// Used when the stream ends mid-message; the result never went through
    /// terminator stripping.
    pub fn take_remainder(&mut self) -> Bytes {
        self.buf.split().freeze()
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
