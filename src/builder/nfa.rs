//! Builder for constructing NFAs.

use crate::builder::error::BuildError;
use crate::core::{Nfa, State, Symbol};

/// Builder for constructing NFAs with a fluent API.
///
/// Any state named as start, accept state or transition endpoint is added to
/// the state set automatically. The builder does not check that the input is
/// otherwise well-formed.
///
/// # Example
///
/// ```rust
/// use powerset::builder::NfaBuilder;
///
/// let nfa = NfaBuilder::new()
///     .start(0u32)
///     .alphabet(['a', 'b'])
///     .transitions(0, 'ε', [1, 2])
///     .transitions(1, 'a', [1, 2])
///     .transition(2, 'b', 3)
///     .accept(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(nfa.states().len(), 4);
/// ```
pub struct NfaBuilder<S: State, A: Symbol> {
    start: Option<S>,
    states: Vec<S>,
    accept: Vec<S>,
    alphabet: Vec<A>,
    transitions: Vec<(S, A, S)>,
}

impl<S: State, A: Symbol> NfaBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            start: None,
            states: Vec::new(),
            accept: Vec::new(),
            alphabet: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Set the start state (required).
    pub fn start(mut self, state: S) -> Self {
        self.start = Some(state);
        self
    }

    /// Declare a state that may have no transitions.
    pub fn state(mut self, state: S) -> Self {
        self.states.push(state);
        self
    }

    /// Declare several states at once.
    pub fn states<I: IntoIterator<Item = S>>(mut self, states: I) -> Self {
        self.states.extend(states);
        self
    }

    /// Mark a state as accepting.
    pub fn accept(mut self, state: S) -> Self {
        self.accept.push(state);
        self
    }

    /// Mark several states as accepting.
    pub fn accepts<I: IntoIterator<Item = S>>(mut self, states: I) -> Self {
        self.accept.extend(states);
        self
    }

    /// Append a symbol to the alphabet. Repeats are ignored.
    pub fn symbol(mut self, symbol: A) -> Self {
        self.alphabet.push(symbol);
        self
    }

    /// Append symbols to the alphabet, in exploration order.
    pub fn alphabet<I: IntoIterator<Item = A>>(mut self, symbols: I) -> Self {
        self.alphabet.extend(symbols);
        self
    }

    /// Add a single transition. Use the epsilon marker as `symbol` for an
    /// empty-input move.
    pub fn transition(mut self, from: S, symbol: A, to: S) -> Self {
        self.transitions.push((from, symbol, to));
        self
    }

    /// Add transitions from `from` on `symbol` to every state in `targets`.
    pub fn transitions<I: IntoIterator<Item = S>>(mut self, from: S, symbol: A, targets: I) -> Self {
        for to in targets {
            self.transitions.push((from.clone(), symbol.clone(), to));
        }
        self
    }

    /// Build the NFA.
    /// Returns an error if the start state is missing.
    pub fn build(self) -> Result<Nfa<S, A>, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStartState)?;

        let mut nfa = Nfa::new(start);
        for state in self.states {
            nfa.insert_state(state);
        }
        for state in self.accept {
            nfa.insert_accept(state);
        }
        for symbol in self.alphabet {
            nfa.push_symbol(symbol);
        }
        for (from, symbol, to) in self.transitions {
            nfa.insert_transition(from, symbol, to);
        }

        Ok(nfa)
    }
}

impl<S: State, A: Symbol> Default for NfaBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn builder_validates_required_fields() {
        let result = NfaBuilder::<u32, char>::new().accept(1).build();

        assert_eq!(result, Err(BuildError::MissingStartState));
    }

    #[test]
    fn fluent_api_builds_nfa() {
        let nfa = NfaBuilder::new()
            .start(0u32)
            .alphabet(['a', 'b'])
            .transitions(0, 'ε', [1, 2])
            .transitions(1, 'a', [1, 2])
            .transition(2, 'b', 3)
            .accept(3)
            .build()
            .unwrap();

        assert_eq!(nfa.start(), &0);
        assert_eq!(nfa.alphabet(), &['a', 'b']);
        assert_eq!(nfa.accept_states(), &BTreeSet::from([3]));
        assert_eq!(nfa.states(), &BTreeSet::from([0, 1, 2, 3]));
        assert_eq!(nfa.destinations(&0, &'ε'), Some(&BTreeSet::from([1, 2])));
        assert_eq!(nfa.destinations(&3, &'a'), None);
    }

    #[test]
    fn declared_states_are_kept_without_transitions() {
        let nfa = NfaBuilder::<u32, char>::new()
            .start(0)
            .states([5, 6])
            .state(7)
            .build()
            .unwrap();

        assert_eq!(nfa.states(), &BTreeSet::from([0, 5, 6, 7]));
        assert_eq!(nfa.transitions().count(), 0);
    }

    #[test]
    fn repeated_symbols_are_ignored() {
        let nfa = NfaBuilder::<u32, char>::new()
            .start(0)
            .symbol('b')
            .alphabet(['a', 'b', 'a'])
            .build()
            .unwrap();

        assert_eq!(nfa.alphabet(), &['b', 'a']);
    }

    #[test]
    fn dangling_targets_are_tolerated() {
        let nfa = NfaBuilder::<u32, char>::new()
            .start(0)
            .accepts([0, 9])
            .transition(0, 'x', 42)
            .build()
            .unwrap();

        assert!(nfa.states().contains(&42));
        assert!(nfa.states().contains(&9));
    }
}
