//! In-memory dependency-graph store for the depot indexer.
//!
//! This crate owns the only shared mutable state in the system: the set of
//! indexed packages together with their declared dependencies, and the
//! reverse edges that make the "is anything depending on this?" check O(1).
//!
//! # Concurrency
//!
//! [`PackageIndex`] encapsulates both maps behind a single store-wide mutex
//! and is shared between connection handlers by [`std::sync::Arc`]. Every
//! operation holds the lock for its full duration and performs no I/O, so
//! any interleaving of requests from concurrent connections is equivalent
//! to some serial order.
//!
//! # Example
//!
//! ```
//! use depot_index::PackageIndex;
//! use std::collections::HashSet;
//!
//! let index = PackageIndex::new();
//! let gzip = "gzip".parse().unwrap();
//!
//! assert!(index.index(gzip, HashSet::new()));
//! assert!(index.index(
//!     "grep".parse().unwrap(),
//!     HashSet::from(["gzip".parse().unwrap()]),
//! ));
//!
//! // gzip now has a dependent and cannot be removed.
//! assert!(!index.remove(&"gzip".parse().unwrap()));
//! ```

mod graph;

pub use graph::PackageIndex;
