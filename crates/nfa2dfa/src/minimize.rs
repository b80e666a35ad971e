//! Moore partition refinement: DFA minimization.

use crate::dfa::Dfa;
use crate::state::{StateId, StateSet};
use crate::symbol::SymbolId;
use indexmap::IndexMap;
use log::trace;
use std::collections::HashMap;

/// A partition of the DFA's states into blocks of indistinguishable states.
type Partition = Vec<StateSet>;

/// Per-state refinement signature: for each symbol the state has an edge on,
/// in the fixed alphabet order, the partition index of the destination's
/// block. Symbols without an edge are omitted rather than encoded, so two
/// states merge only when they define the same symbols and land in the same
/// blocks.
type Signature = Vec<(SymbolId, usize)>;

/// Minimize a DFA with Moore partition refinement. Returns a new DFA; the
/// input is never touched.
///
/// The initial partition is the accepting states and their complement (an
/// empty block is carried as-is and falls away on the first round).
/// Refinement splits every block by signature and repeats until the whole
/// partition reaches a fixed point. The result has one synthetic state
/// (`S0`, `S1`, ...) per block, with transitions taken from each block's
/// lowest-numbered representative for exactly the symbols it defines.
pub fn minimize(dfa: &Dfa) -> Dfa {
    let num_states = dfa.num_states() as usize;

    let mut accepting = StateSet::with_capacity(num_states);
    let mut rest = StateSet::with_capacity(num_states);
    for state in 0..dfa.num_states() {
        if dfa.accepting_states().contains(state) {
            accepting.insert(state);
        } else {
            rest.insert(state);
        }
    }

    let mut partition: Partition = vec![accepting, rest];
    trace_partition("initial", &partition);

    loop {
        let refined = refine(dfa, &partition);
        trace_partition("refined", &refined);
        if refined == partition {
            break;
        }
        partition = refined;
    }

    build_from_partition(dfa, &partition)
}

/// Split every block of the partition by signature, keeping split order
/// deterministic. Blocks with no states contribute nothing.
fn refine(dfa: &Dfa, partition: &Partition) -> Partition {
    let num_states = dfa.num_states() as usize;
    let block_of = block_membership(partition, num_states);

    let mut refined = Partition::new();
    for block in partition {
        let mut groups: IndexMap<Signature, StateSet> = IndexMap::new();
        for state in block.iter() {
            let signature = signature_of(dfa, state, &block_of);
            groups
                .entry(signature)
                .or_insert_with(|| StateSet::with_capacity(num_states))
                .insert(state);
        }
        refined.extend(groups.into_values());
    }
    refined
}

/// state id -> index of its block. Comparison during refinement goes
/// through this index, never through block contents.
fn block_membership(partition: &Partition, num_states: usize) -> Vec<usize> {
    let mut block_of = vec![0; num_states];
    for (index, block) in partition.iter().enumerate() {
        for state in block.iter() {
            block_of[state as usize] = index;
        }
    }
    block_of
}

fn signature_of(dfa: &Dfa, state: StateId, block_of: &[usize]) -> Signature {
    let mut signature = Signature::new();
    for symbol in dfa.alphabet() {
        if let Some(destination) = dfa.transition(state, symbol) {
            signature.push((symbol, block_of[destination as usize]));
        }
    }
    signature
}

/// Build the minimized DFA: one synthetic `S{i}` state per block.
fn build_from_partition(dfa: &Dfa, partition: &Partition) -> Dfa {
    let num_states = dfa.num_states() as usize;
    let block_of = block_membership(partition, num_states);

    let mut minimized = Dfa::new(dfa.symbols().clone());
    for index in 0..partition.len() {
        minimized.add_state(format!("S{index}"));
    }

    if let Some(start) = dfa.start_state() {
        minimized.set_start_state(block_of[start as usize] as StateId);
    }

    for (index, block) in partition.iter().enumerate() {
        if block.intersects(dfa.accepting_states()) {
            minimized.add_accepting_state(index as StateId);
        }

        // Any member works as representative; all of them carry the same
        // signature by construction. Take the lowest-numbered one.
        let Some(representative) = block.first() else {
            continue;
        };
        for symbol in dfa.alphabet() {
            if let Some(destination) = dfa.transition(representative, symbol) {
                minimized.add_transition(
                    index as StateId,
                    symbol,
                    block_of[destination as usize] as StateId,
                );
            }
        }
    }

    // Carry the NFA provenance through, merged per block.
    if let Some(original) = dfa.subsets() {
        let mut merged: HashMap<StateId, Vec<StateId>> = HashMap::new();
        for (index, block) in partition.iter().enumerate() {
            let mut nfa_states = Vec::new();
            for member in block.iter() {
                if let Some(states) = original.get(&member) {
                    nfa_states.extend(states.iter().copied());
                }
            }
            nfa_states.sort_unstable();
            nfa_states.dedup();
            merged.insert(index as StateId, nfa_states);
        }
        minimized.set_subsets(merged);
    }

    trace!("minimized {} states down to {}", dfa.num_states(), minimized.num_states());
    minimized
}

fn trace_partition(context: &str, partition: &Partition) {
    trace!("partition ({context}):");
    for (index, block) in partition.iter().enumerate() {
        trace!("  block {}: {:?}", index, block);
    }
}
