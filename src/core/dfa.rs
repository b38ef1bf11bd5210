//! Deterministic finite automata produced by the subset construction.

use super::state::{DfaStateId, State, Symbol};
use super::state_set::StateSet;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A deterministic finite automaton over composite states.
///
/// States are the dense ids `0..num_states()`. Each id stands for the set of
/// NFA states returned by [`state_set`](Dfa::state_set). A missing
/// transition is an implicit, non-accepting dead end unless the DFA was
/// built with an explicit dead state.
///
/// A `Dfa` is immutable once the construction returns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "S: State, A: Symbol")]
pub struct Dfa<S: State, A: Symbol> {
    start: DfaStateId,
    accept: BTreeSet<DfaStateId>,
    transitions: BTreeMap<DfaStateId, BTreeMap<A, DfaStateId>>,
    state_sets: Vec<StateSet<S>>,
    dead_state: Option<DfaStateId>,
}

impl<S: State, A: Symbol> Dfa<S, A> {
    pub(crate) fn from_parts(
        start: DfaStateId,
        accept: BTreeSet<DfaStateId>,
        transitions: BTreeMap<DfaStateId, BTreeMap<A, DfaStateId>>,
        state_sets: Vec<StateSet<S>>,
        dead_state: Option<DfaStateId>,
    ) -> Self {
        Self {
            start,
            accept,
            transitions,
            state_sets,
            dead_state,
        }
    }

    /// Id of the state derived from the closure of the NFA start state.
    pub fn start(&self) -> DfaStateId {
        self.start
    }

    pub fn num_states(&self) -> usize {
        self.state_sets.len()
    }

    pub fn accept_states(&self) -> &BTreeSet<DfaStateId> {
        &self.accept
    }

    pub fn is_accepting(&self, state: DfaStateId) -> bool {
        self.accept.contains(&state)
    }

    /// The materialized sink state, if the DFA was built with one.
    pub fn dead_state(&self) -> Option<DfaStateId> {
        self.dead_state
    }

    /// Target of `state` on `symbol`, or `None` for a dead transition.
    pub fn transition(&self, state: DfaStateId, symbol: &A) -> Option<DfaStateId> {
        self.transitions.get(&state)?.get(symbol).copied()
    }

    /// Outgoing transitions of `state`, keyed by symbol.
    pub fn transitions_from(&self, state: DfaStateId) -> Option<&BTreeMap<A, DfaStateId>> {
        self.transitions.get(&state)
    }

    /// All `(from, symbol, to)` triples ordered by source id, then symbol.
    pub fn transitions(&self) -> impl Iterator<Item = (DfaStateId, &A, DfaStateId)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(&from, by_symbol)| by_symbol.iter().map(move |(symbol, &to)| (from, symbol, to)))
    }

    /// Number of recorded transitions.
    pub fn num_transitions(&self) -> usize {
        self.transitions.values().map(BTreeMap::len).sum()
    }

    /// NFA states represented by `state`.
    pub fn state_set(&self, state: DfaStateId) -> Option<&StateSet<S>> {
        self.state_sets.get(state)
    }

    /// NFA state sets indexed by DFA state id.
    pub fn state_sets(&self) -> &[StateSet<S>] {
        &self.state_sets
    }

    /// Run the DFA over `input` and return the state it ends in.
    ///
    /// Returns `None` as soon as a dead transition is taken.
    pub fn run(&self, input: &[A]) -> Option<DfaStateId> {
        input
            .iter()
            .try_fold(self.start, |state, symbol| self.transition(state, symbol))
    }

    /// Check whether the DFA accepts `input`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use powerset::construction::ConstructionConfig;
    /// use powerset::nfa;
    ///
    /// let nfa = nfa! {
    ///     start: 0u32,
    ///     accept: [1],
    ///     alphabet: ['a'],
    ///     transitions: {
    ///         0 => 'a' => [1],
    ///     }
    /// };
    ///
    /// let dfa = nfa.to_dfa(&ConstructionConfig::default()).unwrap();
    /// assert!(dfa.accepts(&['a']));
    /// assert!(!dfa.accepts(&['a', 'a']));
    /// ```
    pub fn accepts(&self, input: &[A]) -> bool {
        self.run(input)
            .map(|state| self.is_accepting(state))
            .unwrap_or(false)
    }
}
