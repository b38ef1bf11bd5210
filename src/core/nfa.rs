//! Nondeterministic finite automata with epsilon transitions.
//!
//! The NFA is a read-only input to the subset construction. Besides the data
//! model it provides the two pure building blocks of the construction:
//! epsilon-closure and the symbol move.

use super::state::{State, Symbol};
use super::state_set::StateSet;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A nondeterministic finite automaton.
///
/// Transitions map a `(state, symbol)` pair to a set of destinations. The
/// epsilon marker is an ordinary symbol value chosen by the caller at
/// conversion time; transitions stored under it are treated as
/// empty-input moves. A missing entry means "no transition", never an error.
///
/// Use [`NfaBuilder`](crate::builder::NfaBuilder) or the
/// [`nfa!`](crate::nfa) macro to construct one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "S: State, A: Symbol")]
pub struct Nfa<S: State, A: Symbol> {
    states: BTreeSet<S>,
    transitions: BTreeMap<S, BTreeMap<A, BTreeSet<S>>>,
    start: S,
    accept: BTreeSet<S>,
    alphabet: Vec<A>,
}

impl<S: State, A: Symbol> Nfa<S, A> {
    /// Create an NFA with a single start state and nothing else.
    pub fn new(start: S) -> Self {
        let mut states = BTreeSet::new();
        states.insert(start.clone());
        Self {
            states,
            transitions: BTreeMap::new(),
            start,
            accept: BTreeSet::new(),
            alphabet: Vec::new(),
        }
    }

    pub(crate) fn insert_state(&mut self, state: S) {
        self.states.insert(state);
    }

    pub(crate) fn insert_accept(&mut self, state: S) {
        self.states.insert(state.clone());
        self.accept.insert(state);
    }

    /// Append a symbol unless it is already part of the alphabet.
    pub(crate) fn push_symbol(&mut self, symbol: A) {
        if !self.alphabet.contains(&symbol) {
            self.alphabet.push(symbol);
        }
    }

    pub(crate) fn insert_transition(&mut self, from: S, symbol: A, to: S) {
        self.states.insert(from.clone());
        self.states.insert(to.clone());
        self.transitions
            .entry(from)
            .or_default()
            .entry(symbol)
            .or_default()
            .insert(to);
    }

    pub fn states(&self) -> &BTreeSet<S> {
        &self.states
    }

    pub fn start(&self) -> &S {
        &self.start
    }

    pub fn accept_states(&self) -> &BTreeSet<S> {
        &self.accept
    }

    /// Input symbols in exploration order. Never contains the epsilon marker
    /// of a successful conversion.
    pub fn alphabet(&self) -> &[A] {
        &self.alphabet
    }

    /// Destinations of `state` on `symbol`, if any.
    pub fn destinations(&self, state: &S, symbol: &A) -> Option<&BTreeSet<S>> {
        self.transitions.get(state)?.get(symbol)
    }

    /// All `(from, symbol, to)` triples in sorted order.
    pub fn transitions(&self) -> impl Iterator<Item = (&S, &A, &S)> + '_ {
        self.transitions.iter().flat_map(|(from, by_symbol)| {
            by_symbol
                .iter()
                .flat_map(move |(symbol, targets)| targets.iter().map(move |to| (from, symbol, to)))
        })
    }

    /// States reachable from `states` through zero or more epsilon moves.
    ///
    /// The result always contains `states` itself. Each state is pushed on
    /// the work stack at most once, so this runs in time linear in the
    /// number of epsilon edges visited.
    ///
    /// # Example
    ///
    /// ```rust
    /// use powerset::core::StateSet;
    /// use powerset::nfa;
    ///
    /// let nfa = nfa! {
    ///     start: 0u32,
    ///     accept: [2],
    ///     alphabet: ['a'],
    ///     transitions: {
    ///         0 => 'ε' => [1],
    ///         1 => 'ε' => [2],
    ///     }
    /// };
    ///
    /// let closure = nfa.epsilon_closure(&StateSet::singleton(0), &'ε');
    /// assert_eq!(closure.as_slice(), &[0, 1, 2]);
    /// ```
    pub fn epsilon_closure(&self, states: &StateSet<S>, epsilon: &A) -> StateSet<S> {
        let mut closure: BTreeSet<S> = states.iter().cloned().collect();
        let mut stack: Vec<S> = states.iter().cloned().collect();

        while let Some(state) = stack.pop() {
            let Some(targets) = self.destinations(&state, epsilon) else {
                continue;
            };
            for target in targets {
                if closure.insert(target.clone()) {
                    stack.push(target.clone());
                }
            }
        }

        StateSet::from(closure)
    }

    /// States reachable from `states` by consuming exactly `symbol`.
    ///
    /// Epsilon transitions are never followed, and asking to move on the
    /// epsilon marker itself yields the empty set. An empty result is the
    /// normal signal that no transition exists.
    pub fn move_on(&self, states: &StateSet<S>, symbol: &A, epsilon: &A) -> StateSet<S> {
        if symbol == epsilon {
            return StateSet::new();
        }

        states
            .iter()
            .filter_map(|state| self.destinations(state, symbol))
            .flatten()
            .cloned()
            .collect()
    }

    /// Simulate the NFA directly on `input`.
    ///
    /// Tracks the set of active states with repeated move + closure and
    /// accepts if the final set contains an accept state.
    pub fn accepts(&self, input: &[A], epsilon: &A) -> bool {
        let mut current = self.epsilon_closure(&StateSet::singleton(self.start.clone()), epsilon);

        for symbol in input {
            let moved = self.move_on(&current, symbol, epsilon);
            if moved.is_empty() {
                return false;
            }
            current = self.epsilon_closure(&moved, epsilon);
        }

        current.intersects(&self.accept)
    }
}
