//! Black-box NFA/DFA agreement check over a word sample.

use crate::dfa::Dfa;
use crate::nfa::Nfa;
use log::trace;

/// The fixed word sample for spot checks: short combinations over `{a, b}`,
/// one character per token.
pub const DEFAULT_CORPUS: &[&[&str]] = &[
    &["a"],
    &["b"],
    &["a", "b"],
    &["b", "a"],
    &["a", "a"],
    &["b", "b"],
    &["a", "a", "b"],
    &["b", "b", "a"],
    &["a", "a", "a"],
    &["b", "b", "b"],
];

/// A word the two automata disagree on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disagreement {
    /// The word, one token per symbol.
    pub word: Vec<String>,
    /// Whether the NFA accepted it.
    pub nfa_accepts: bool,
    /// Whether the DFA accepted it.
    pub dfa_accepts: bool,
}

/// Run every corpus word through both automata and report each word they
/// disagree on, in corpus order.
///
/// This is a sampling spot check. An empty result means no disagreement was
/// found within the sample; it is evidence of equivalence, not a proof.
pub fn check_equivalence(nfa: &Nfa, dfa: &Dfa, corpus: &[&[&str]]) -> Vec<Disagreement> {
    let mut disagreements = Vec::new();
    for &word in corpus {
        let nfa_accepts = nfa.accepts(word);
        let dfa_accepts = dfa.accepts(word);
        if nfa_accepts != dfa_accepts {
            trace!(
                "disagreement on {:?}: nfa={}, dfa={}",
                word,
                nfa_accepts,
                dfa_accepts
            );
            disagreements.push(Disagreement {
                word: word.iter().map(|token| (*token).to_owned()).collect(),
                nfa_accepts,
                dfa_accepts,
            });
        }
    }
    disagreements
}
