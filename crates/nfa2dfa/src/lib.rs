//! Finite-automaton transformations over opaque string symbols:
//! - Subset construction (NFA to DFA conversion)
//! - Moore partition-refinement DFA minimization
//! - Word simulation against either automaton kind
//! - NFA/DFA equivalence spot checks over a word sample
//!
//! Automata are built incrementally by name, validated as they are built,
//! and read-only afterwards; every transformation returns a new object.
//!
//! ```
//! use nfa2dfa::{check_equivalence, minimize, subset_construction, Nfa, DEFAULT_CORPUS};
//!
//! let mut nfa = Nfa::new();
//! nfa.add_state("q0");
//! nfa.add_state("q1");
//! nfa.add_symbol("a")?;
//! nfa.add_symbol("b")?;
//! nfa.add_transition("q0", "a", &["q0", "q1"])?;
//! nfa.add_transition("q1", "b", &["q1"])?;
//! nfa.set_start_state("q0")?;
//! nfa.add_accepting_state("q1")?;
//!
//! let dfa = minimize(&subset_construction(&nfa));
//! assert!(dfa.accepts(&["a", "a", "b"]));
//! assert!(!dfa.accepts(&["b", "a"]));
//! assert!(check_equivalence(&nfa, &dfa, DEFAULT_CORPUS).is_empty());
//! # Ok::<(), nfa2dfa::AutomatonError>(())
//! ```

mod dfa;
mod equivalence;
mod error;
mod minimize;
mod nfa;
mod state;
mod subset_construction;
mod symbol;

pub use dfa::Dfa;
pub use equivalence::{check_equivalence, Disagreement, DEFAULT_CORPUS};
pub use error::AutomatonError;
pub use minimize::minimize;
pub use nfa::Nfa;
pub use state::{StateId, StateSet};
pub use subset_construction::subset_construction;
pub use symbol::{SymbolId, SymbolTable};
