//! Canonical sets of NFA states.
//!
//! A composite DFA state is a set of NFA states. Two such sets must compare
//! equal whenever they hold the same members, no matter the order in which
//! the members were discovered, so the set is stored as a sorted sequence
//! without duplicates and equality, ordering and hashing all follow that
//! canonical sequence.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Sorted, duplicate-free set of NFA states.
///
/// # Example
///
/// ```rust
/// use powerset::core::StateSet;
///
/// let a: StateSet<u32> = [2, 0, 1, 2].into_iter().collect();
/// let b: StateSet<u32> = [1, 2, 0].into_iter().collect();
///
/// assert_eq!(a, b);
/// assert_eq!(a.as_slice(), &[0, 1, 2]);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(bound = "S: State", from = "Vec<S>", into = "Vec<S>")]
pub struct StateSet<S: State> {
    states: Vec<S>,
}

impl<S: State> StateSet<S> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Create a set holding exactly one state.
    pub fn singleton(state: S) -> Self {
        Self {
            states: vec![state],
        }
    }

    /// Number of states in the set.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Check membership in `O(log n)`.
    pub fn contains(&self, state: &S) -> bool {
        self.states.binary_search(state).is_ok()
    }

    /// Check whether any member is also in `other`.
    pub fn intersects(&self, other: &BTreeSet<S>) -> bool {
        self.states.iter().any(|s| other.contains(s))
    }

    /// Check whether every member of `self` is also in `other`.
    pub fn is_subset(&self, other: &StateSet<S>) -> bool {
        self.states.iter().all(|s| other.contains(s))
    }

    /// Iterate members in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.states.iter()
    }

    /// The canonical sorted sequence.
    pub fn as_slice(&self) -> &[S] {
        &self.states
    }
}

impl<S: State> Default for StateSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> From<Vec<S>> for StateSet<S> {
    fn from(mut states: Vec<S>) -> Self {
        states.sort_unstable();
        states.dedup();
        Self { states }
    }
}

impl<S: State> From<BTreeSet<S>> for StateSet<S> {
    fn from(states: BTreeSet<S>) -> Self {
        // Already sorted and unique.
        Self {
            states: states.into_iter().collect(),
        }
    }
}

impl<S: State> From<StateSet<S>> for Vec<S> {
    fn from(set: StateSet<S>) -> Self {
        set.states
    }
}

impl<S: State> FromIterator<S> for StateSet<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, S: State> IntoIterator for &'a StateSet<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

impl<S: State> fmt::Display for StateSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, state) in self.states.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", state)?;
        }
        write!(f, "}}")
    }
}
