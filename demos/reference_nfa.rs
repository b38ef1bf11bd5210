//! Reference NFA
//!
//! This example converts a small epsilon-NFA into a DFA and prints which
//! set of NFA states each DFA state stands for.
//!
//! Key concepts:
//! - Declaring an NFA with the `nfa!` macro
//! - Passing the epsilon marker through `ConstructionConfig`
//! - Reading the partial transition function of the result
//!
//! Run with: cargo run --example reference_nfa

use powerset::construction::ConstructionConfig;
use powerset::nfa;

fn main() {
    println!("=== Reference NFA Example ===\n");

    // 0 -ε-> {1, 2}, 1 -a-> {1, 2}, 2 -b-> {3}; 3 accepts
    let nfa = nfa! {
        start: 0u32,
        accept: [3],
        alphabet: ['a', 'b'],
        transitions: {
            0 => 'ε' => [1, 2],
            1 => 'a' => [1, 2],
            2 => 'b' => [3],
        }
    };

    let dfa = match nfa.to_dfa(&ConstructionConfig::default()) {
        Ok(dfa) => dfa,
        Err(e) => {
            eprintln!("Conversion failed: {}", e);
            return;
        }
    };

    println!("DFA states (id => NFA states):");
    for (id, set) in dfa.state_sets().iter().enumerate() {
        println!("  {} => {}", id, set);
    }

    println!("\nStart state: {}", dfa.start());
    println!("Accept states: {:?}", dfa.accept_states());

    println!("\nTransitions:");
    for (from, symbol, to) in dfa.transitions() {
        println!("  {} --{}--> {}", from, symbol, to);
    }

    for input in ["b", "aab", "a", "ba"] {
        let symbols: Vec<char> = input.chars().collect();
        println!("\naccepts({:?}) = {}", input, dfa.accepts(&symbols));
    }

    println!("\n=== Example Complete ===");
}
