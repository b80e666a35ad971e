//! Property-based tests over randomly generated automata.
//!
//! Strategies build small NFAs (up to five states over a three-symbol
//! alphabet) and short words, then check the algebraic properties the
//! transformations promise: conversion preserves acceptance, minimization
//! preserves the language, and minimizing twice changes nothing.

use nfa2dfa::{minimize, subset_construction, Nfa};
use proptest::prelude::*;

const SYMBOLS: &[&str] = &["a", "b", "c"];

/// Raw generated shape of an NFA; turned into a real `Nfa` per case.
#[derive(Debug, Clone)]
struct NfaDescription {
    num_states: usize,
    /// (source, symbol index, destinations), possibly duplicated or empty.
    transitions: Vec<(usize, usize, Vec<usize>)>,
    accepting: Vec<usize>,
    start: usize,
}

fn arb_description() -> impl Strategy<Value = NfaDescription> {
    (1..=5usize).prop_flat_map(|num_states| {
        (
            Just(num_states),
            prop::collection::vec(
                (
                    0..num_states,
                    0..SYMBOLS.len(),
                    prop::collection::vec(0..num_states, 0..=num_states),
                ),
                0..=12,
            ),
            prop::collection::vec(0..num_states, 0..=num_states),
            0..num_states,
        )
            .prop_map(
                |(num_states, transitions, accepting, start)| NfaDescription {
                    num_states,
                    transitions,
                    accepting,
                    start,
                },
            )
    })
}

fn build_nfa(description: &NfaDescription) -> Nfa {
    let mut nfa = Nfa::new();
    for state in 0..description.num_states {
        nfa.add_state(&format!("q{state}"));
    }
    for symbol in SYMBOLS {
        nfa.add_symbol(symbol).unwrap();
    }
    for (from, symbol, destinations) in &description.transitions {
        let names: Vec<String> = destinations.iter().map(|d| format!("q{d}")).collect();
        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        nfa.add_transition(&format!("q{from}"), SYMBOLS[*symbol], &name_refs)
            .unwrap();
    }
    nfa.set_start_state(&format!("q{}", description.start))
        .unwrap();
    for state in &description.accepting {
        nfa.add_accepting_state(&format!("q{state}")).unwrap();
    }
    nfa
}

fn arb_word() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(SYMBOLS.to_vec()), 0..=6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn conversion_preserves_acceptance(
        description in arb_description(),
        word in arb_word(),
    ) {
        let nfa = build_nfa(&description);
        let dfa = subset_construction(&nfa);
        prop_assert_eq!(nfa.accepts(&word), dfa.accepts(&word));
    }

    #[test]
    fn minimization_preserves_language(
        description in arb_description(),
        word in arb_word(),
    ) {
        let dfa = subset_construction(&build_nfa(&description));
        let minimized = minimize(&dfa);
        prop_assert_eq!(dfa.accepts(&word), minimized.accepts(&word));
    }

    #[test]
    fn minimization_is_idempotent(description in arb_description()) {
        let minimized = minimize(&subset_construction(&build_nfa(&description)));
        prop_assert_eq!(minimize(&minimized).num_states(), minimized.num_states());
    }

    #[test]
    fn minimization_never_grows(description in arb_description()) {
        let dfa = subset_construction(&build_nfa(&description));
        prop_assert!(minimize(&dfa).num_states() <= dfa.num_states());
    }
}
