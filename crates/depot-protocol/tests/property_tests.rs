//! Property-based tests for request parsing and frame reassembly.
//!
//! These use proptest to cover the input space the unit tests only sample:
//! arbitrary valid names, duplicated dependency lists, and arbitrary chunk
//! splits of a framed request.

use bytes::Bytes;
use depot_protocol::{Command, FrameBuffer, parse_request};
use proptest::prelude::*;

/// Strategy for package-name tokens.
///
/// Name validity is only non-emptiness, so the alphabet includes `,`: in
/// the name position it is an ordinary byte, not a separator. The readable
/// subset keeps failure output debuggable; non-UTF-8 names are covered by
/// unit tests.
fn wire_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9A-Za-z.,_+-]{1,16}")
        .expect("failed to create name regex strategy")
}

/// Strategy for dependency names.
///
/// A `,` cannot be *expressed* inside a dependency, because the list token
/// splits on it; dependency names draw from the comma-free subset.
fn dep_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9A-Za-z._+-]{1,16}")
        .expect("failed to create dependency regex strategy")
}

/// Strategy for a dependency list with possible duplicates.
fn dep_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(dep_name(), 0..6)
}

/// Strategy for a frame payload plus arbitrary chunk-split positions.
///
/// The payload is printable ASCII (which cannot contain the terminator),
/// so the framed wire form holds exactly one terminator, at the end.
fn payload_and_splits() -> impl Strategy<Value = (Vec<u8>, Vec<usize>)> {
    prop::string::string_regex("[ -~]{0,40}")
        .expect("failed to create payload regex strategy")
        .prop_map(String::into_bytes)
        .prop_flat_map(|payload| {
            let wire_len = payload.len() + 1;
            (Just(payload), prop::collection::vec(0..wire_len, 0..6))
        })
}

proptest! {
    /// A well-formed INDEX request round-trips, with duplicates coalesced.
    #[test]
    fn prop_index_roundtrip(name in wire_name(), deps in dep_list()) {
        let payload = Bytes::from(format!("INDEX|{}|{}", name, deps.join(",")));
        let request = parse_request(&payload).unwrap();

        prop_assert_eq!(request.command, Command::Index);
        prop_assert_eq!(request.name.as_bytes(), name.as_bytes());

        let distinct: std::collections::HashSet<&String> = deps.iter().collect();
        prop_assert_eq!(request.deps.len(), distinct.len());
        for dep in &request.deps {
            prop_assert!(deps.iter().any(|d| d.as_bytes() == dep.as_bytes()));
        }
    }

    /// Duplicating a dependency never changes the parsed set.
    #[test]
    fn prop_duplicate_deps_are_inert(name in wire_name(), dep in dep_name()) {
        let once = Bytes::from(format!("INDEX|{name}|{dep}"));
        let thrice = Bytes::from(format!("INDEX|{name}|{dep},{dep},{dep}"));

        prop_assert_eq!(
            parse_request(&once).unwrap(),
            parse_request(&thrice).unwrap()
        );
    }

    /// REMOVE and QUERY parse with empty deps and reject populated ones.
    #[test]
    fn prop_bare_commands(name in wire_name(), dep in dep_name()) {
        for verb in ["REMOVE", "QUERY"] {
            let bare = Bytes::from(format!("{verb}|{name}|"));
            let request = parse_request(&bare).unwrap();
            prop_assert!(request.deps.is_empty());

            let with_dep = Bytes::from(format!("{verb}|{name}|{dep}"));
            prop_assert!(parse_request(&with_dep).is_err());
        }
    }

    /// Any verb other than the three literals is rejected.
    #[test]
    fn prop_unknown_verbs_rejected(verb in "[A-Za-z]{1,8}", name in wire_name()) {
        prop_assume!(verb != "INDEX" && verb != "REMOVE" && verb != "QUERY");
        let payload = Bytes::from(format!("{verb}|{name}|"));
        prop_assert!(parse_request(&payload).is_err());
    }

    /// Framing is invariant under chunk splits: however a framed request is
    /// carved into read-chunks, exactly one frame comes out, bit-identical
    /// to single-chunk delivery.
    #[test]
    fn prop_framing_split_invariance((payload, splits) in payload_and_splits()) {
        let mut wire = payload.clone();
        wire.push(b'\n');

        let mut bounds = splits;
        bounds.push(0);
        bounds.push(wire.len());
        bounds.sort_unstable();
        bounds.dedup();

        let mut buffer = FrameBuffer::new();
        let mut frames = Vec::new();
        for window in bounds.windows(2) {
            if let Some(frame) = buffer.feed(&wire[window[0]..window[1]]) {
                frames.push(frame);
            }
        }

        prop_assert_eq!(frames.len(), 1);
        prop_assert_eq!(&frames[0][..], &payload[..]);
        prop_assert!(buffer.is_empty());
    }
}

#[cfg(test)]
mod strategy_tests {
    use super::*;

    /// The strategies must respect the wire structure they feed into:
    /// neither token can carry `|` or the terminator, dependencies cannot
    /// carry the list separator, and package names are free to.
    #[test]
    fn test_strategies_respect_wire_structure() {
        proptest!(|(name in wire_name(), dep in dep_name())| {
            prop_assert!(!name.contains('|') && !name.contains('\n'));
            prop_assert!(!name.is_empty());

            prop_assert!(!dep.contains('|') && !dep.contains('\n'));
            prop_assert!(!dep.contains(','));
            prop_assert!(!dep.is_empty());
        });
    }
}
