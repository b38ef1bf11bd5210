//! Property-based tests for the subset construction.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated NFAs and input strings.

use powerset::construction::{subset_construction, ConstructionConfig, DeadStatePolicy};
use powerset::core::{Dfa, Nfa, StateSet};
use powerset::NfaBuilder;
use proptest::prelude::*;
use std::collections::{BTreeSet, VecDeque};

const EPS: char = 'ε';
const SYMBOLS: [char; 3] = ['a', 'b', EPS];

prop_compose! {
    fn arbitrary_nfa()(size in 1u32..7)(
        edges in prop::collection::vec((0..size, 0..SYMBOLS.len(), 0..size), 0..20),
        accept in prop::collection::vec(0..size, 0..3),
        size in Just(size),
    ) -> Nfa<u32, char> {
        let mut builder = NfaBuilder::new()
            .start(0)
            .states(0..size)
            .alphabet(['a', 'b'])
            .accepts(accept);
        for (from, symbol, to) in edges {
            builder = builder.transition(from, SYMBOLS[symbol], to);
        }
        builder.build().unwrap()
    }
}

prop_compose! {
    fn arbitrary_input()(
        input in prop::collection::vec(prop::sample::select(vec!['a', 'b']), 0..8)
    ) -> Vec<char> {
        input
    }
}

prop_compose! {
    fn nfa_with_subset()(nfa in arbitrary_nfa())(
        members in prop::sample::subsequence(
            nfa.states().iter().copied().collect::<Vec<_>>(),
            0..=nfa.states().len(),
        ),
        nfa in Just(nfa),
    ) -> (Nfa<u32, char>, StateSet<u32>) {
        (nfa, members.into_iter().collect())
    }
}

fn convert(nfa: &Nfa<u32, char>) -> Dfa<u32, char> {
    subset_construction(nfa, &ConstructionConfig::default()).unwrap()
}

fn reachable_ids(dfa: &Dfa<u32, char>) -> BTreeSet<usize> {
    let mut seen = BTreeSet::from([dfa.start()]);
    let mut queue = VecDeque::from([dfa.start()]);

    while let Some(id) = queue.pop_front() {
        for (_, &target) in dfa.transitions_from(id).into_iter().flatten() {
            if seen.insert(target) {
                queue.push_back(target);
            }
        }
    }

    seen
}

proptest! {
    #[test]
    fn construction_is_deterministic(nfa in arbitrary_nfa()) {
        let first = convert(&nfa);
        let second = convert(&nfa);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn closure_contains_its_input((nfa, set) in nfa_with_subset()) {
        let closure = nfa.epsilon_closure(&set, &EPS);
        prop_assert!(set.is_subset(&closure));
    }

    #[test]
    fn closure_is_idempotent((nfa, set) in nfa_with_subset()) {
        let once = nfa.epsilon_closure(&set, &EPS);
        let twice = nfa.epsilon_closure(&once, &EPS);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn move_ignores_epsilon_edges((nfa, set) in nfa_with_subset()) {
        prop_assert!(nfa.move_on(&set, &EPS, &EPS).is_empty());
    }

    #[test]
    fn every_state_set_is_a_closure(nfa in arbitrary_nfa()) {
        let dfa = convert(&nfa);
        for set in dfa.state_sets() {
            prop_assert!(!set.is_empty());
            prop_assert_eq!(&nfa.epsilon_closure(set, &EPS), set);
        }
    }

    #[test]
    fn state_sets_are_distinct(nfa in arbitrary_nfa()) {
        let dfa = convert(&nfa);
        let unique: BTreeSet<_> = dfa.state_sets().iter().collect();
        prop_assert_eq!(unique.len(), dfa.num_states());
    }

    #[test]
    fn every_state_is_reachable(nfa in arbitrary_nfa()) {
        let dfa = convert(&nfa);
        let reachable = reachable_ids(&dfa);
        prop_assert_eq!(reachable.len(), dfa.num_states());
        prop_assert!(reachable.iter().all(|&id| id < dfa.num_states()));
    }

    #[test]
    fn acceptance_matches_nfa_accept_set(nfa in arbitrary_nfa()) {
        let dfa = convert(&nfa);
        for (id, set) in dfa.state_sets().iter().enumerate() {
            prop_assert_eq!(dfa.is_accepting(id), set.intersects(nfa.accept_states()));
        }
    }

    #[test]
    fn start_state_is_closure_of_nfa_start(nfa in arbitrary_nfa()) {
        let dfa = convert(&nfa);
        let seed = nfa.epsilon_closure(&StateSet::singleton(*nfa.start()), &EPS);
        prop_assert_eq!(dfa.start(), 0);
        prop_assert_eq!(dfa.state_set(0), Some(&seed));
    }

    #[test]
    fn dfa_accepts_same_language(nfa in arbitrary_nfa(), input in arbitrary_input()) {
        let dfa = convert(&nfa);
        prop_assert_eq!(dfa.accepts(&input), nfa.accepts(&input, &EPS));
    }

    #[test]
    fn explicit_dead_state_is_total_and_equivalent(
        nfa in arbitrary_nfa(),
        input in arbitrary_input(),
    ) {
        let config = ConstructionConfig::default().with_dead_state(DeadStatePolicy::Explicit);
        let dfa = subset_construction(&nfa, &config).unwrap();

        for id in 0..dfa.num_states() {
            for symbol in nfa.alphabet() {
                prop_assert!(dfa.transition(id, symbol).is_some());
            }
        }
        if let Some(dead) = dfa.dead_state() {
            prop_assert!(!dfa.is_accepting(dead));
            prop_assert_eq!(dfa.state_set(dead), Some(&StateSet::new()));
        }
        prop_assert!(dfa.run(&input).is_some());
        prop_assert_eq!(dfa.accepts(&input), nfa.accepts(&input, &EPS));
    }

    #[test]
    fn explicit_dead_state_extends_implicit_result(nfa in arbitrary_nfa()) {
        let implicit = convert(&nfa);
        let config = ConstructionConfig::default().with_dead_state(DeadStatePolicy::Explicit);
        let explicit = subset_construction(&nfa, &config).unwrap();

        let live = implicit.num_states();
        prop_assert_eq!(&explicit.state_sets()[..live], implicit.state_sets());
        for (from, symbol, to) in implicit.transitions() {
            prop_assert_eq!(explicit.transition(from, symbol), Some(to));
        }
    }
}
