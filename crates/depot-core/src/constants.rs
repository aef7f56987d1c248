//! Core constants for the depot wire protocol.
//!
//! This module defines the protocol-level constants used throughout the
//! indexer. The wire format is line-delimited ASCII-compatible bytes:
//!
//! ```text
//! COMMAND|package|dep1,dep2,...\n
//! ```
//!
//! Where:
//! - `COMMAND` - one of `INDEX`, `REMOVE`, `QUERY` (case-sensitive)
//! - `|` - token separator (exactly two per request)
//! - `,` - dependency-list separator
//! - `\n` - frame terminator
//!
//! Package names are opaque non-empty byte strings. The separators above
//! are structural, not a character-class rule: a name token is read after
//! the payload splits on `|`, so `,` is an ordinary byte inside a package
//! name and only delimits the dependency list.

// ============================================================================
// Wire Format Separators
// ============================================================================

/// Token separator between command, package name, and dependency list.
///
/// Every request carries exactly two of these, yielding three tokens.
///
/// # Examples
///
/// ```
/// use depot_core::constants::TOKEN_SEPARATOR;
///
/// let request = b"INDEX|grep|pcre,gzip";
/// let tokens: Vec<&[u8]> = request.split(|&b| b == TOKEN_SEPARATOR).collect();
/// assert_eq!(tokens.len(), 3);
/// ```
pub const TOKEN_SEPARATOR: u8 = b'|';

/// Separator between names inside the dependency-list token.
///
/// An empty dependency token means "no dependencies"; empty segments
/// between separators (`a,,b` or `a,`) are malformed.
pub const DEPS_SEPARATOR: u8 = b',';

/// Frame terminator. One request per newline-terminated frame, no `\r`.
pub const FRAME_TERMINATOR: u8 = b'\n';

// ============================================================================
// Transport
// ============================================================================

/// Size of a single socket read, in bytes.
///
/// A power of two; one read of up to this many bytes is one "chunk" for
/// framing purposes (a frame completes when a chunk's last byte is the
/// terminator).
pub const READ_CHUNK_BYTES: usize = 4096;

/// Default host the server binds to.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port the server listens on.
pub const DEFAULT_PORT: u16 = 8080;
