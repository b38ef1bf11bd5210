//! Identifier traits for automaton states and input symbols.
//!
//! Both traits are blanket-implemented, so any ordered, hashable,
//! serializable value (integers, chars, strings, plain enums) can be used
//! as an NFA state or an alphabet symbol without extra code.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Identifier of a composite DFA state.
///
/// Ids are dense: a DFA with `n` states uses exactly `0..n`.
pub type DfaStateId = usize;

/// Trait for NFA state identifiers.
///
/// # Required Traits
///
/// - `Ord`: state sets are kept in sorted canonical form
/// - `Hash`: canonical sets are used as lookup keys
/// - `Clone` + `Debug`: states are copied into results and logged
/// - `Serialize` + `Deserialize`: automata can be exchanged as JSON
///
/// # Example
///
/// ```rust
/// use powerset::core::State;
///
/// fn assert_state<S: State>() {}
///
/// assert_state::<u32>();
/// assert_state::<String>();
/// ```
pub trait State: Clone + Ord + Hash + Debug + Serialize + DeserializeOwned {}

impl<T> State for T where T: Clone + Ord + Hash + Debug + Serialize + DeserializeOwned {}

/// Trait for input symbols, including the epsilon marker.
///
/// Symbols are compared by value; the epsilon marker is an ordinary value
/// that the caller reserves for "no input consumed".
pub trait Symbol: Clone + Ord + Hash + Debug + Serialize + DeserializeOwned {}

impl<T> Symbol for T where T: Clone + Ord + Hash + Debug + Serialize + DeserializeOwned {}
