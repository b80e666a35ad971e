//! Subset construction: NFA to DFA conversion.

use crate::dfa::Dfa;
use crate::nfa::Nfa;
use crate::state::{StateId, StateSet};
use indexmap::IndexMap;
use log::trace;
use std::collections::{HashMap, VecDeque};

/// Convert an NFA to an equivalent DFA using the subset construction.
///
/// DFA states are the sets of NFA states reachable from the singleton
/// `{start}`, explored breadth-first. A symbol whose destination union is
/// empty leaves no transition behind: the resulting DFA is partial by
/// design, and the simulator's missing-edge rejection supplies the stuck
/// behavior. A subset state is accepting iff it intersects the NFA's
/// accepting set, checked the moment the subset is discovered.
///
/// Termination is bounded by the number of distinct subsets, at most
/// `2^num_states`.
pub fn subset_construction(nfa: &Nfa) -> Dfa {
    let mut dfa = Dfa::new(nfa.symbols().clone());
    let Some(start) = nfa.start_state() else {
        // Nothing reachable, empty DFA.
        return dfa;
    };

    // Canonical subset (sorted state ids) -> DFA state id.
    let mut numbering: IndexMap<Vec<StateId>, StateId> = IndexMap::new();
    let mut worklist: VecDeque<(StateSet, StateId)> = VecDeque::new();

    let seed = StateSet::singleton(start, nfa.num_states());
    let seed_id = dfa.add_state(subset_label(nfa, &seed));
    dfa.set_start_state(seed_id);
    if seed.intersects(nfa.accepting_states()) {
        dfa.add_accepting_state(seed_id);
    }
    trace!("subset state {}: {:?}", seed_id, seed);
    numbering.insert(seed.to_vec(), seed_id);
    worklist.push_back((seed, seed_id));

    while let Some((current, current_id)) = worklist.pop_front() {
        for symbol in nfa.alphabet() {
            let next = nfa.move_on_symbol(&current, symbol);
            if next.is_empty() {
                // No transition recorded for this symbol.
                continue;
            }

            let key = next.to_vec();
            let next_id = match numbering.get(&key) {
                Some(&existing) => existing,
                None => {
                    let id = dfa.add_state(subset_label(nfa, &next));
                    if next.intersects(nfa.accepting_states()) {
                        dfa.add_accepting_state(id);
                    }
                    trace!("subset state {}: {:?}", id, next);
                    numbering.insert(key, id);
                    worklist.push_back((next, id));
                    id
                }
            };

            dfa.add_transition(current_id, symbol, next_id);
        }
    }

    // Keep the provenance of every DFA state for display and diagnostics.
    let subsets: HashMap<StateId, Vec<StateId>> = numbering
        .into_iter()
        .map(|(nfa_states, dfa_state)| (dfa_state, nfa_states))
        .collect();
    dfa.set_subsets(subsets);

    dfa
}

/// `{q0,q1}`-style display label for a subset state.
fn subset_label(nfa: &Nfa, subset: &StateSet) -> String {
    let names: Vec<&str> = subset
        .iter()
        .filter_map(|state| nfa.state_name(state))
        .collect();
    format!("{{{}}}", names.join(","))
}
