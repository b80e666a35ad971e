//! Nondeterministic finite automaton (no epsilon transitions).

use crate::error::AutomatonError;
use crate::state::{StateId, StateSet};
use crate::symbol::{SymbolId, SymbolTable};
use indexmap::IndexSet;
use std::collections::HashMap;

/// A nondeterministic finite automaton over opaque string symbols.
///
/// States and symbols are declared by name and interned to dense ids.
/// Construction is incremental; every name-based operation validates its
/// arguments against the declarations made so far. After construction the
/// automaton is read-only: conversion and simulation take `&Nfa` and never
/// mutate it.
#[derive(Debug, Clone)]
pub struct Nfa {
    /// Declared state names, index = `StateId`.
    state_names: IndexSet<String>,
    /// Declared alphabet.
    symbols: SymbolTable,
    /// Transitions: (source, symbol) -> set of destination states.
    ///
    /// An absent entry and an entry holding an empty set are kept distinct,
    /// as the input contract distinguishes them, but both contribute zero
    /// destinations everywhere they are read.
    transitions: HashMap<(StateId, SymbolId), StateSet>,
    /// Start state (None until declared).
    start: Option<StateId>,
    /// Accepting states.
    accepting: StateSet,
}

impl Nfa {
    /// Create a new empty NFA.
    pub fn new() -> Self {
        Self {
            state_names: IndexSet::new(),
            symbols: SymbolTable::new(),
            transitions: HashMap::new(),
            start: None,
            accepting: StateSet::with_capacity(16),
        }
    }

    /// Declare a state, returning its id. Re-declaring is idempotent.
    pub fn add_state(&mut self, name: &str) -> StateId {
        let (idx, _) = self.state_names.insert_full(name.to_owned());
        idx as StateId
    }

    /// Declare an alphabet symbol, returning its id. Re-declaring is
    /// idempotent; the empty string is rejected.
    pub fn add_symbol(&mut self, token: &str) -> Result<SymbolId, AutomatonError> {
        self.symbols.intern(token)
    }

    /// Record the transition `(from, symbol) -> to`.
    ///
    /// Every named state and the symbol must have been declared. Calling
    /// with an empty `to` slice records an empty destination set, which is
    /// distinct from never recording an entry at all. Repeated calls union
    /// into the existing destination set.
    pub fn add_transition(
        &mut self,
        from: &str,
        symbol: &str,
        to: &[&str],
    ) -> Result<(), AutomatonError> {
        let from = self.require_state(from)?;
        let symbol = self
            .symbols
            .lookup(symbol)
            .ok_or_else(|| AutomatonError::UndeclaredSymbol(symbol.to_owned()))?;
        let mut destinations = Vec::with_capacity(to.len());
        for name in to {
            destinations.push(self.require_state(name)?);
        }

        let capacity = self.state_names.len();
        let entry = self
            .transitions
            .entry((from, symbol))
            .or_insert_with(|| StateSet::with_capacity(capacity));
        for destination in destinations {
            entry.insert(destination);
        }
        Ok(())
    }

    /// Declare the start state.
    pub fn set_start_state(&mut self, name: &str) -> Result<(), AutomatonError> {
        self.start = Some(self.require_state(name)?);
        Ok(())
    }

    /// Declare an accepting state.
    pub fn add_accepting_state(&mut self, name: &str) -> Result<(), AutomatonError> {
        let state = self.require_state(name)?;
        self.accepting.insert(state);
        Ok(())
    }

    fn require_state(&self, name: &str) -> Result<StateId, AutomatonError> {
        self.state_names
            .get_index_of(name)
            .map(|i| i as StateId)
            .ok_or_else(|| AutomatonError::UndeclaredState(name.to_owned()))
    }

    /// Get the number of declared states.
    pub fn num_states(&self) -> usize {
        self.state_names.len()
    }

    /// Get the name of a state.
    pub fn state_name(&self, state: StateId) -> Option<&str> {
        self.state_names.get_index(state as usize).map(String::as_str)
    }

    /// Get the id of a declared state.
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.state_names.get_index_of(name).map(|i| i as StateId)
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

    /// Get the recorded destination set for `(state, symbol)`, if any.
    pub fn destinations(&self, state: StateId, symbol: SymbolId) -> Option<&StateSet> {
        self.transitions.get(&(state, symbol))
    }

    /// Get the states reachable from a set of states on a given symbol.
    ///
    /// Missing entries and recorded-but-empty entries both contribute
    /// nothing.
    pub fn move_on_symbol(&self, states: &StateSet, symbol: SymbolId) -> StateSet {
        let mut reached = StateSet::with_capacity(self.state_names.len());
        for state in states.iter() {
            if let Some(destinations) = self.transitions.get(&(state, symbol)) {
                reached.union_with(destinations);
            }
        }
        reached
    }

    /// Run the automaton on a word, one token per symbol.
    ///
    /// Threads the set of active states through per-symbol unions. The
    /// active set may become empty mid-word; processing continues (further
    /// symbols simply reach nothing). A token outside the alphabet behaves
    /// exactly like a missing transition entry. Accepts iff the final
    /// active set intersects the accepting states.
    pub fn accepts(&self, word: &[&str]) -> bool {
        let Some(start) = self.start else {
            return false;
        };
        let mut active = StateSet::singleton(start, self.state_names.len());
        for token in word {
            active = match self.symbols.lookup(token) {
                Some(symbol) => self.move_on_symbol(&active, symbol),
                None => StateSet::with_capacity(self.state_names.len()),
            };
        }
        active.intersects(&self.accepting)
    }
}

impl Default for Nfa {
    fn default() -> Self {
        Self::new()
    }
}
