use depot_core::PackageName;
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// The two reciprocal edge maps.
///
/// Invariants, after every completed operation:
/// - `b ∈ forward[a]` if and only if `a ∈ reverse[b]`;
/// - every member of a forward set is itself a forward key;
/// - no package appears in its own forward set;
/// - reverse entries are dropped once their dependent set empties, so a
///   present entry is always non-empty.
#[derive(Debug, Default)]
struct GraphState {
    /// Package name to its declared dependencies.
    forward: HashMap<PackageName, HashSet<PackageName>>,

    /// Package name to the packages currently depending on it. A key here
    /// need not itself be indexed.
    reverse: HashMap<PackageName, HashSet<PackageName>>,
}

/// The shared package store.
///
/// All three operations lock the whole store for their duration; the
/// preconditions are checked before any mutation begins, so a rejected
/// request leaves no trace and an accepted one restores every invariant
/// before the lock is released.
#[derive(Debug, Default)]
pub struct PackageIndex {
    state: Mutex<GraphState>,
}

impl PackageIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `name` with the given dependency set.
    ///
    /// Returns `false` without mutating anything when `name` depends on
    /// itself or when any dependency is not currently indexed. On success
    /// the new dependency set replaces any previous one wholesale; it is
    /// not merged. Re-indexing a package with its current dependencies is
    /// a no-op that still succeeds.
    pub fn index(&self, name: PackageName, deps: HashSet<PackageName>) -> bool {
        let mut guard = self.locked();
        let GraphState { forward, reverse } = &mut *guard;

        if deps.contains(&name) {
            return false;
        }
        if !deps.iter().all(|dep| forward.contains_key(dep)) {
            return false;
        }

        // A replacement dependency set unlinks this package from the
        // reverse entries of dependencies it no longer declares.
        if let Some(previous) = forward.get(&name) {
            let stale: Vec<PackageName> = previous.difference(&deps).cloned().collect();
            for dep in &stale {
                unlink_dependent(reverse, dep, &name);
            }
        }

        for dep in &deps {
            reverse.entry(dep.clone()).or_default().insert(name.clone());
        }
        forward.insert(name, deps);
        true
    }

    /// Remove `name` from the index.
    ///
    /// Removing a package that is not indexed succeeds trivially. Returns
    /// `false` when other packages still depend on `name`; their forward
    /// sets would otherwise dangle.
    pub fn remove(&self, name: &PackageName) -> bool {
        let mut guard = self.locked();
        let GraphState { forward, reverse } = &mut *guard;

        let Some(deps) = forward.get(name) else {
            return true;
        };
        if reverse.get(name).is_some_and(|dependents| !dependents.is_empty()) {
            return false;
        }

        for dep in deps {
            unlink_dependent(reverse, dep, name);
        }
        forward.remove(name);
        true
    }

    /// Whether `name` is currently indexed. Never mutates.
    pub fn query(&self, name: &PackageName) -> bool {
        self.locked().forward.contains_key(name)
    }

    /// Number of indexed packages.
    pub fn len(&self) -> usize {
        self.locked().forward.len()
    }

    /// Whether no package is indexed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn locked(&self) -> MutexGuard<'_, GraphState> {
        // A poisoned lock only means another handler panicked; the state
        // itself is consistent at every return point of the three
        // operations, so recover the guard rather than propagate.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Drop `dependent` from `name`'s reverse entry, discarding the entry once
/// no dependents remain.
fn unlink_dependent(
    reverse: &mut HashMap<PackageName, HashSet<PackageName>>,
    name: &PackageName,
    dependent: &PackageName,
) {
    if let Some(dependents) = reverse.get_mut(name) {
        dependents.remove(dependent);
        if dependents.is_empty() {
            reverse.remove(name);
        }
    }
}
