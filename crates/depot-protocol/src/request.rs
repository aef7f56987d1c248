use depot_core::{Error, PackageName, Result};
use std::collections::HashSet;
use std::fmt;

/// Request command verb.
///
/// Matching is byte-exact and case-sensitive: `index` is not a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Index a package with a (possibly empty) dependency set.
    Index,
    /// Remove a package from the index.
    Remove,
    /// Ask whether a package is currently indexed.
    Query,
}

impl Command {
    /// Parse a command token from the wire.
    ///
    /// # Errors
    /// Returns `Error::MalformedRequest` for anything other than the three
    /// literal verbs.
    ///
    /// # Example
    /// ```
    /// use depot_protocol::Command;
    ///
    /// assert_eq!(Command::parse(b"INDEX").unwrap(), Command::Index);
    /// assert!(Command::parse(b"index").is_err());
    /// assert!(Command::parse(b"INDEXX").is_err());
    /// ```
    pub fn parse(token: &[u8]) -> Result<Self> {
        match token {
            b"INDEX" => Ok(Command::Index),
            b"REMOVE" => Ok(Command::Remove),
            b"QUERY" => Ok(Command::Query),
            other => Err(Error::MalformedRequest {
                message: format!("unknown command '{}'", String::from_utf8_lossy(other)),
            }),
        }
    }

    /// Wire spelling of the command.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Command::Index => "INDEX",
            Command::Remove => "REMOVE",
            Command::Query => "QUERY",
        }
    }

    /// Whether this command accepts a dependency list.
    ///
    /// Only `INDEX` does; a populated third token on `REMOVE` or `QUERY`
    /// is a protocol error.
    #[must_use]
    pub const fn takes_deps(self) -> bool {
        matches!(self, Command::Index)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed, well-formed request.
///
/// Well-formed does not mean satisfiable: the graph store may still reject
/// the request (`FAIL`) if its preconditions do not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub command: Command,
    pub name: PackageName,
    /// Declared dependencies; duplicates on the wire coalesce here.
    /// Always empty for `REMOVE` and `QUERY`.
    pub deps: HashSet<PackageName>,
}
