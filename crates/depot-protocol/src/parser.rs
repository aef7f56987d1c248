//! Request parser for the depot wire protocol.
//!
//! A request payload is the frame content with its trailing newline already
//! stripped and outer ASCII whitespace already trimmed by the connection
//! handler:
//!
//! ```text
//! COMMAND|package|dep1,dep2,...
//! ```
//!
//! Parsing is a pure function of the payload bytes. Validation rules are
//! applied in a fixed order:
//!
//! 1. Exactly two `|` separators (three tokens).
//! 2. The dependency token splits on `,`; an empty token means no
//!    dependencies.
//! 3. The package name must be non-empty.
//! 4. Every dependency name must be non-empty, so a leading, trailing, or
//!    doubled comma is malformed.
//! 5. The command must be exactly `INDEX`, `REMOVE`, or `QUERY`.
//! 6. `REMOVE` and `QUERY` take no dependency list.
//!
//! A parse error is not a semantic failure: the former yields `ERROR` on
//! the wire, while a well-formed request the store rejects yields `FAIL`.
//!
//! # Examples
//!
//! ```
//! use bytes::Bytes;
//! use depot_protocol::{Command, parse_request};
//!
//! let payload = Bytes::from_static(b"INDEX|grep|pcre,gzip");
//! let request = parse_request(&payload).unwrap();
//!
//! assert_eq!(request.command, Command::Index);
//! assert_eq!(request.name.as_bytes(), b"grep");
//! assert_eq!(request.deps.len(), 2);
//!
//! // Duplicate dependencies coalesce.
//! let payload = Bytes::from_static(b"INDEX|grep|pcre,pcre");
//! assert_eq!(parse_request(&payload).unwrap().deps.len(), 1);
//!
//! // A trailing comma leaves an empty dependency name behind.
//! let payload = Bytes::from_static(b"INDEX|grep|pcre,");
//! assert!(parse_request(&payload).is_err());
//! ```

use crate::request::{Command, Request};
use bytes::Bytes;
use depot_core::{
    Error, PackageName, Result,
    constants::{DEPS_SEPARATOR, TOKEN_SEPARATOR},
};
use std::collections::HashSet;

/// Number of `|`-separated tokens in every request.
const TOKEN_COUNT: usize = 3;

/// Parse one request payload into a structured [`Request`].
///
/// The payload is borrowed as [`Bytes`] so that the extracted names are
/// zero-copy slices of the frame rather than fresh allocations.
///
/// # Errors
/// Returns `Error::MalformedRequest` or `Error::InvalidPackageName` when
/// any of the ordered rules above fails; the connection handler maps either
/// to an `ERROR` response.
pub fn parse_request(payload: &Bytes) -> Result<Request> {
    let tokens: Vec<&[u8]> = payload.split(|&b| b == TOKEN_SEPARATOR).collect();
    if tokens.len() != TOKEN_COUNT {
        return Err(Error::MalformedRequest {
            message: format!("expected {TOKEN_COUNT} tokens, got {}", tokens.len()),
        });
    }
    let (cmd_token, name_token, deps_token) = (tokens[0], tokens[1], tokens[2]);

    // Tokenize dependencies up front; each segment is validated as a name
    // only after the package name itself, preserving the rule order.
    let dep_segments: Vec<&[u8]> = if deps_token.is_empty() {
        Vec::new()
    } else {
        deps_token.split(|&b| b == DEPS_SEPARATOR).collect()
    };

    let name = PackageName::new(payload.slice_ref(name_token))?;

    let mut deps = HashSet::with_capacity(dep_segments.len());
    for segment in dep_segments {
        deps.insert(PackageName::new(payload.slice_ref(segment))?);
    }

    let command = Command::parse(cmd_token)?;

    if !command.takes_deps() && !deps.is_empty() {
        return Err(Error::MalformedRequest {
            message: format!("{command} takes no dependency list"),
        });
    }

    Ok(Request {
        command,
        name,
        deps,
    })
}
