//! Symbol identifiers and alphabet interning.

use crate::error::AutomatonError;
use indexmap::IndexSet;

/// A symbol identifier represented as a u32.
pub type SymbolId = u32;

/// An insertion-ordered interner for the opaque tokens of an alphabet.
///
/// Symbols are arbitrary non-empty strings. Interning gives every token a
/// dense id, and the insertion order doubles as the fixed alphabet order
/// that minimization signatures iterate in.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    tokens: IndexSet<String>,
}

impl SymbolTable {
    /// Create a new empty symbol table.
    pub fn new() -> Self {
        Self {
            tokens: IndexSet::new(),
        }
    }

    /// Intern a token, returning its id. Re-interning is idempotent.
    ///
    /// The empty string is rejected: it is not a symbol, and admitting it
    /// would blur the line between "no transition" and a real edge.
    pub fn intern(&mut self, token: &str) -> Result<SymbolId, AutomatonError> {
        if token.is_empty() {
            return Err(AutomatonError::EmptySymbol);
        }
        let (idx, _) = self.tokens.insert_full(token.to_owned());
        Ok(idx as SymbolId)
    }

    /// Look up the id of a token, if it was interned.
    pub fn lookup(&self, token: &str) -> Option<SymbolId> {
        self.tokens.get_index_of(token).map(|i| i as SymbolId)
    }

    /// Get the token for an id.
    pub fn token(&self, id: SymbolId) -> Option<&str> {
        self.tokens.get_index(id as usize).map(String::as_str)
    }

    /// Number of interned symbols.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if no symbols were interned.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All symbol ids in the fixed alphabet order.
    pub fn ids(&self) -> impl Iterator<Item = SymbolId> {
        0..self.tokens.len() as SymbolId
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_is_idempotent() {
        let mut table = SymbolTable::new();
        let a = table.intern("a").unwrap();
        let b = table.intern("b").unwrap();
        assert_ne!(a, b);
        assert_eq!(table.intern("a").unwrap(), a);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_lookup_and_token() {
        let mut table = SymbolTable::new();
        let id = table.intern("zero").unwrap();
        assert_eq!(table.lookup("zero"), Some(id));
        assert_eq!(table.lookup("one"), None);
        assert_eq!(table.token(id), Some("zero"));
        assert_eq!(table.token(99), None);
    }

    #[test]
    fn test_multi_character_tokens() {
        let mut table = SymbolTable::new();
        table.intern("push").unwrap();
        table.intern("pop").unwrap();
        let order: Vec<_> = table.ids().map(|id| table.token(id).unwrap()).collect();
        assert_eq!(order, vec!["push", "pop"]);
    }

    #[test]
    fn test_empty_token_rejected() {
        let mut table = SymbolTable::new();
        assert_eq!(table.intern(""), Err(AutomatonError::EmptySymbol));
        assert!(table.is_empty());
    }
}
