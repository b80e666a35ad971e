//! Deterministic finite automaton with partial transitions.

use crate::state::{StateId, StateSet};
use crate::symbol::{SymbolId, SymbolTable};
use std::collections::HashMap;

/// A deterministic finite automaton.
///
/// Transitions are partial: a `(state, symbol)` pair with no entry means
/// there is no outgoing edge, and simulation rejects there. Subset
/// construction produces exactly such partial DFAs, and minimization keeps
/// them partial.
///
/// Each state carries a display label (`{q0,q1}`-style for subset states,
/// `S0`, `S1`, ... for minimized ones) and, when the DFA came out of subset
/// construction, the set of source-NFA states it denotes.
#[derive(Debug, Clone)]
pub struct Dfa {
    /// Number of states (states are numbered 0..num_states).
    num_states: StateId,
    /// Start state (None if empty).
    start: Option<StateId>,
    /// Accepting states.
    accepting: StateSet,
    /// Transitions: (source, symbol) -> destination.
    transitions: HashMap<(StateId, SymbolId), StateId>,
    /// Alphabet shared with the source NFA.
    symbols: SymbolTable,
    /// Display labels, index = state id.
    labels: Vec<String>,
    /// Which NFA states each DFA state denotes, when known.
    subsets: Option<HashMap<StateId, Vec<StateId>>>,
}

impl Dfa {
    /// Create a new empty DFA over the given alphabet.
    pub fn new(symbols: SymbolTable) -> Self {
        Self {
            num_states: 0,
            start: None,
            accepting: StateSet::with_capacity(16),
            transitions: HashMap::new(),
            symbols,
            labels: Vec::new(),
            subsets: None,
        }
    }

    /// Add a new state with a display label and return its id.
    pub fn add_state(&mut self, label: impl Into<String>) -> StateId {
        let id = self.num_states;
        self.num_states += 1;
        self.labels.push(label.into());
        id
    }

    /// Set the start state.
    pub fn set_start_state(&mut self, state: StateId) {
        self.start = Some(state);
    }

    /// Mark a state as accepting.
    pub fn add_accepting_state(&mut self, state: StateId) {
        self.accepting.insert(state);
    }

    /// Record the transition `(source, symbol) -> destination`.
    pub fn add_transition(&mut self, source: StateId, symbol: SymbolId, destination: StateId) {
        self.transitions.insert((source, symbol), destination);
    }

    /// Get the destination of `(source, symbol)`, if an edge is recorded.
    pub fn transition(&self, source: StateId, symbol: SymbolId) -> Option<StateId> {
        self.transitions.get(&(source, symbol)).copied()
    }

    /// Get the number of states.
    pub fn num_states(&self) -> StateId {
        self.num_states
    }

    /// Get the start state.
    pub fn start_state(&self) -> Option<StateId> {
        self.start
    }

    /// Get the accepting states.
    pub fn accepting_states(&self) -> &StateSet {
        &self.accepting
    }

    /// Get the alphabet interner.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// All symbol ids in the fixed alphabet order.
    pub fn alphabet(&self) -> impl Iterator<Item = SymbolId> {
        self.symbols.ids()
    }

    /// Get the display label of a state.
    pub fn label(&self, state: StateId) -> Option<&str> {
        self.labels.get(state as usize).map(String::as_str)
    }

    /// Record which NFA states each DFA state denotes.
    pub fn set_subsets(&mut self, subsets: HashMap<StateId, Vec<StateId>>) {
        self.subsets = Some(subsets);
    }

    /// Get the NFA states a DFA state denotes, when known.
    pub fn subset(&self, state: StateId) -> Option<&[StateId]> {
        self.subsets
            .as_ref()
            .and_then(|map| map.get(&state))
            .map(Vec::as_slice)
    }

    /// Get the full DFA-state to NFA-states mapping, when known.
    pub fn subsets(&self) -> Option<&HashMap<StateId, Vec<StateId>>> {
        self.subsets.as_ref()
    }

    /// Run the automaton on a word, one token per symbol.
    ///
    /// Rejects the moment the current state has no recorded edge for the
    /// next token; a token outside the alphabet is exactly that case.
    /// Otherwise accepts iff the state after the last token is accepting.
    pub fn accepts(&self, word: &[&str]) -> bool {
        let Some(mut current) = self.start else {
            return false;
        };
        for token in word {
            let Some(symbol) = self.symbols.lookup(token) else {
                return false;
            };
            match self.transition(current, symbol) {
                Some(next) => current = next,
                None => return false,
            }
        }
        self.accepting.contains(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// a then b, two edges, final state accepting.
    fn chain_dfa() -> Dfa {
        let mut symbols = SymbolTable::new();
        let a = symbols.intern("a").unwrap();
        let b = symbols.intern("b").unwrap();

        let mut dfa = Dfa::new(symbols);
        let s0 = dfa.add_state("d0");
        let s1 = dfa.add_state("d1");
        let s2 = dfa.add_state("d2");
        dfa.set_start_state(s0);
        dfa.add_accepting_state(s2);
        dfa.add_transition(s0, a, s1);
        dfa.add_transition(s1, b, s2);
        dfa
    }

    #[test]
    fn test_accepts() {
        let dfa = chain_dfa();
        assert!(dfa.accepts(&["a", "b"]));
        assert!(!dfa.accepts(&["a"]));
        assert!(!dfa.accepts(&[]));
    }

    #[test]
    fn test_missing_transition_rejects_immediately() {
        let dfa = chain_dfa();
        // No edge for `b` at the start state; the rest of the word is
        // irrelevant, including suffixes that would otherwise accept.
        assert!(!dfa.accepts(&["b", "a", "b"]));
        assert!(!dfa.accepts(&["a", "b", "b"]));
    }

    #[test]
    fn test_unknown_token_rejects() {
        let dfa = chain_dfa();
        assert!(!dfa.accepts(&["x"]));
        assert!(!dfa.accepts(&["a", "x"]));
    }

    #[test]
    fn test_empty_word_accepted_iff_start_accepting() {
        let mut dfa = chain_dfa();
        assert!(!dfa.accepts(&[]));
        dfa.add_accepting_state(0);
        assert!(dfa.accepts(&[]));
    }

    #[test]
    fn test_empty_dfa_rejects_everything() {
        let dfa = Dfa::new(SymbolTable::new());
        assert_eq!(dfa.num_states(), 0);
        assert!(!dfa.accepts(&[]));
        assert!(!dfa.accepts(&["a"]));
    }

    #[test]
    fn test_labels() {
        let dfa = chain_dfa();
        assert_eq!(dfa.label(0), Some("d0"));
        assert_eq!(dfa.label(2), Some("d2"));
        assert_eq!(dfa.label(9), None);
    }
}
