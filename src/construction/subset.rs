//! The subset construction driver.

use super::config::{ConstructionConfig, DeadStatePolicy};
use super::error::ConstructionError;
use crate::core::{Dfa, DfaStateId, Nfa, State, StateSet, Symbol};
use indexmap::IndexSet;
use log::{debug, trace};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

type TransitionTable<A> = BTreeMap<DfaStateId, BTreeMap<A, DfaStateId>>;

/// Convert `nfa` into an equivalent DFA.
///
/// Composite states are discovered breadth-first from the epsilon-closure of
/// the NFA start state, exploring symbols in alphabet order, and numbered in
/// discovery order. For a fixed NFA and config the result is therefore
/// identical on every call.
///
/// Fails before doing any work if the epsilon marker is part of the
/// alphabet.
///
/// # Example
///
/// ```rust
/// use powerset::construction::{subset_construction, ConstructionConfig};
/// use powerset::nfa;
///
/// let nfa = nfa! {
///     start: 0u32,
///     accept: [3],
///     alphabet: ['a', 'b'],
///     transitions: {
///         0 => 'ε' => [1, 2],
///         1 => 'a' => [1, 2],
///         2 => 'b' => [3],
///     }
/// };
///
/// let dfa = subset_construction(&nfa, &ConstructionConfig::default()).unwrap();
///
/// assert_eq!(dfa.num_states(), 3);
/// assert_eq!(dfa.transition(0, &'b'), Some(2));
/// assert!(dfa.is_accepting(2));
/// ```
pub fn subset_construction<S: State, A: Symbol>(
    nfa: &Nfa<S, A>,
    config: &ConstructionConfig<A>,
) -> Result<Dfa<S, A>, ConstructionError> {
    let epsilon = &config.epsilon_symbol;
    validate_alphabet(nfa, epsilon)?;

    debug!(
        "Subset construction: {} NFA states, {} symbols",
        nfa.states().len(),
        nfa.alphabet().len()
    );

    // Canonical state set -> id is the set's insertion index.
    let mut registry: IndexSet<StateSet<S>> = IndexSet::new();
    let mut worklist: VecDeque<DfaStateId> = VecDeque::new();
    let mut accept = BTreeSet::new();
    let mut transitions: TransitionTable<A> = BTreeMap::new();

    let seed = nfa.epsilon_closure(&StateSet::singleton(nfa.start().clone()), epsilon);
    trace!("DFA state 0: {}", seed);
    let (start, _) = registry.insert_full(seed);
    check_limit(registry.len(), config)?;
    worklist.push_back(start);

    while let Some(cur_id) = worklist.pop_front() {
        let current = registry[cur_id].clone();

        if current.intersects(nfa.accept_states()) {
            accept.insert(cur_id);
        }

        for symbol in nfa.alphabet() {
            let moved = nfa.move_on(&current, symbol, epsilon);
            if moved.is_empty() {
                continue;
            }

            let target = nfa.epsilon_closure(&moved, epsilon);
            let (target_id, is_new) = registry.insert_full(target);
            if is_new {
                trace!("DFA state {}: {}", target_id, registry[target_id]);
                check_limit(registry.len(), config)?;
                worklist.push_back(target_id);
            }

            trace!("Transition {} --{:?}--> {}", cur_id, symbol, target_id);
            transitions
                .entry(cur_id)
                .or_default()
                .insert(symbol.clone(), target_id);
        }
    }

    let mut state_sets: Vec<StateSet<S>> = registry.into_iter().collect();
    let dead_state = match config.dead_state {
        DeadStatePolicy::Implicit => None,
        DeadStatePolicy::Explicit => {
            add_dead_state(nfa.alphabet(), &mut state_sets, &mut transitions, config)?
        }
    };

    debug!(
        "Subset construction finished: {} DFA states, {} accepting",
        state_sets.len(),
        accept.len()
    );

    Ok(Dfa::from_parts(start, accept, transitions, state_sets, dead_state))
}

fn validate_alphabet<S: State, A: Symbol>(
    nfa: &Nfa<S, A>,
    epsilon: &A,
) -> Result<(), ConstructionError> {
    if nfa.alphabet().contains(epsilon) {
        return Err(ConstructionError::InvalidAlphabet {
            symbol: format!("{:?}", epsilon),
        });
    }
    Ok(())
}

fn check_limit<A: Symbol>(
    count: usize,
    config: &ConstructionConfig<A>,
) -> Result<(), ConstructionError> {
    match config.max_states {
        Some(limit) if count > limit => Err(ConstructionError::StateLimitExceeded { limit }),
        _ => Ok(()),
    }
}

/// Route every missing `(state, symbol)` pair to a fresh sink state.
///
/// The sink is only created when at least one transition is missing. Its
/// NFA state set is empty, so it never accepts.
fn add_dead_state<S: State, A: Symbol>(
    alphabet: &[A],
    state_sets: &mut Vec<StateSet<S>>,
    transitions: &mut TransitionTable<A>,
    config: &ConstructionConfig<A>,
) -> Result<Option<DfaStateId>, ConstructionError> {
    let live = state_sets.len();
    let incomplete = (0..live).any(|id| {
        let outgoing = transitions.get(&id).map_or(0, BTreeMap::len);
        outgoing < alphabet.len()
    });
    if !incomplete {
        return Ok(None);
    }

    let dead = live;
    state_sets.push(StateSet::new());
    check_limit(state_sets.len(), config)?;
    trace!("DFA dead state {}", dead);

    for id in 0..=dead {
        let outgoing = transitions.entry(id).or_default();
        for symbol in alphabet {
            outgoing.entry(symbol.clone()).or_insert(dead);
        }
    }

    Ok(Some(dead))
}
