//! NFA to DFA conversion.
//!
//! The driver in this module explores composite states with a FIFO
//! worklist, combining [`Nfa::move_on`] and [`Nfa::epsilon_closure`] for
//! every alphabet symbol until no new state set appears.
//!
//! # Key Concepts
//!
//! - **Config**: the epsilon marker is passed explicitly on every call,
//!   together with the dead-state policy and an optional state limit
//! - **Canonical keys**: composite states are deduplicated by set equality
//! - **Errors**: a misconfigured alphabet is rejected before any work starts

mod config;
mod error;
mod subset;

pub use config::{ConstructionConfig, DeadStatePolicy, DEFAULT_EPSILON};
pub use error::ConstructionError;
pub use subset::subset_construction;

use crate::core::{Dfa, Nfa, State, Symbol};

impl<S: State, A: Symbol> Nfa<S, A> {
    /// Convert this NFA into an equivalent DFA.
    ///
    /// Shorthand for [`subset_construction`].
    pub fn to_dfa(&self, config: &ConstructionConfig<A>) -> Result<Dfa<S, A>, ConstructionError> {
        subset_construction(self, config)
    }
}
