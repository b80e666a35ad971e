//! Errors surfaced while building automata.

use thiserror::Error;

/// Construction-time validation failure: the description names something it
/// never declared.
///
/// Only the name-based builder operations can fail. Once an automaton is
/// built, conversion, minimization, and simulation are total; in particular
/// an unknown symbol fed to a simulator is rejection, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// A transition endpoint, the start state, or an accepting state refers
    /// to a state that was never declared.
    #[error("state `{0}` is not declared")]
    UndeclaredState(String),
    /// A transition uses a token outside the declared alphabet.
    #[error("symbol `{0}` is not in the alphabet")]
    UndeclaredSymbol(String),
    /// The empty string was offered as an alphabet symbol.
    #[error("the empty string is not a valid alphabet symbol")]
    EmptySymbol,
}
