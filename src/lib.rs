//! Powerset: epsilon-NFA to DFA conversion
//!
//! Powerset turns a nondeterministic finite automaton, possibly with
//! epsilon transitions, into an equivalent deterministic one using the
//! subset construction. Every composite DFA state is a canonical set of NFA
//! states, numbered in breadth-first discovery order.
//!
//! # Core Concepts
//!
//! - **Nfa**: read-only input with epsilon-closure and move
//! - **StateSet**: order-independent set of NFA states, the deduplication key
//! - **Dfa**: immutable result with accept states, partial transition
//!   function and the state set behind every id
//! - **ConstructionConfig**: epsilon marker and conversion options
//!
//! # Example
//!
//! ```rust
//! use powerset::construction::ConstructionConfig;
//! use powerset::nfa;
//!
//! let nfa = nfa! {
//!     start: 0u32,
//!     accept: [3],
//!     alphabet: ['a', 'b'],
//!     transitions: {
//!         0 => 'ε' => [1, 2],
//!         1 => 'a' => [1, 2],
//!         2 => 'b' => [3],
//!     }
//! };
//!
//! let dfa = nfa.to_dfa(&ConstructionConfig::default()).unwrap();
//!
//! assert_eq!(dfa.start(), 0);
//! assert_eq!(dfa.num_states(), 3);
//! assert!(dfa.accepts(&['a', 'a', 'b']));
//! assert!(!dfa.accepts(&['a']));
//! ```

pub mod builder;
pub mod construction;
pub mod core;

// Re-export commonly used types
pub use self::builder::{BuildError, NfaBuilder};
pub use self::construction::{
    subset_construction, ConstructionConfig, ConstructionError, DeadStatePolicy,
};
pub use self::core::{Dfa, DfaStateId, Nfa, State, StateSet, Symbol};
