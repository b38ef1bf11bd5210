//! Core automaton types and the pure building blocks of the construction.
//!
//! This module contains:
//! - Identifier traits for states and symbols
//! - Canonical state sets used as composite DFA states
//! - The NFA input model with epsilon-closure and move
//! - The immutable DFA result
//!
//! Nothing in this module performs I/O or holds shared state.

mod dfa;
mod nfa;
mod state;
mod state_set;

pub use dfa::Dfa;
pub use nfa::Nfa;
pub use state::{DfaStateId, State, Symbol};
pub use state_set::StateSet;
