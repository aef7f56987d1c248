use crate::{Result, error::Error};
use bytes::Bytes;
use std::fmt;

/// A package name: an opaque, non-empty byte string.
///
/// Validity is exactly non-emptiness; no character class is imposed.
/// The wire separators are a framing concern, not a name concern: a `|` or
/// frame terminator can never reach a parsed name because the request is
/// split before names are read, and `,` only delimits dependency lists, so
/// a *package* name may legitimately contain one. Whitespace is
/// significant, so `" gzip"` and `"gzip"` are distinct packages.
///
/// The wrapper is backed by [`Bytes`], so names parsed out of a request
/// payload are cheap slices rather than copies.
///
/// # Example
/// ```
/// use depot_core::PackageName;
///
/// let name = PackageName::new("openssl").unwrap();
/// assert_eq!(name.as_bytes(), b"openssl");
///
/// // A comma is just another name byte.
/// assert!(PackageName::new("a,b").is_ok());
///
/// // Only the empty name is invalid.
/// assert!(PackageName::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(Bytes);

impl PackageName {
    /// Create a package name with validation.
    ///
    /// # Errors
    /// Returns `Error::InvalidPackageName` if the name is empty.
    pub fn new(name: impl Into<Bytes>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidPackageName {
                message: "name must not be empty".to_string(),
            });
        }
        Ok(PackageName(name))
    }

    /// Get the raw name bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Names are not required to be UTF-8; render lossily for logs.
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl std::str::FromStr for PackageName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PackageName::new(Bytes::copy_from_slice(s.as_bytes()))
    }
}
