//! Symbol names shared between the front end and diagnostic subjects.

use lasso::ThreadedRodeo;
use serde::{Deserialize, Serialize};

/// A symbol name (module, signal, macro, class member...) held by an [`Interner`].
///
/// The syntax tree stores these instead of strings; diagnostics turn them
/// back into text only when a subject has to be printed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Ident(u32);

impl Ident {
    /// Wraps a raw index. Used by tests and deserialized trees; live code
    /// gets identifiers from [`Interner::get_or_intern`].
    pub const fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// The raw index.
    pub const fn as_raw(self) -> u32 {
        self.0
    }
}

// SAFETY: `into_usize` and `try_from_usize` are inverse on every value that
// fits in `u32`, and `try_from_usize` refuses anything larger.
unsafe impl lasso::Key for Ident {
    fn into_usize(self) -> usize {
        self.0 as usize
    }

    fn try_from_usize(int: usize) -> Option<Self> {
        u32::try_from(int).ok().map(Self)
    }
}

/// The symbol table of one compilation run.
///
/// Backed by [`lasso::ThreadedRodeo`] so a name interned by one worker can be
/// printed in a diagnostic raised by another. Lookups never panic: a
/// diagnostic must still be reportable when its subject is unknown.
pub struct Interner {
    rodeo: ThreadedRodeo<Ident>,
}

impl Interner {
    /// Creates an empty symbol table.
    pub fn new() -> Self {
        Self {
            rodeo: ThreadedRodeo::new(),
        }
    }

    /// Returns the identifier for `name`, interning it on first use.
    pub fn get_or_intern(&self, name: &str) -> Ident {
        self.rodeo.get_or_intern(name)
    }

    /// Returns the identifier for `name` if it was interned already.
    pub fn get(&self, name: &str) -> Option<Ident> {
        self.rodeo.get(name)
    }

    /// Returns the text of `ident`, or `None` if this table did not produce it.
    pub fn try_resolve(&self, ident: Ident) -> Option<&str> {
        self.rodeo.try_resolve(&ident)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.rodeo.len()
    }

    /// Returns `true` if no name was interned.
    pub fn is_empty(&self) -> bool {
        self.rodeo.is_empty()
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interned_names_resolve() {
        let interner = Interner::new();
        let id = interner.get_or_intern("data_q");
        assert_eq!(interner.try_resolve(id), Some("data_q"));
        assert_eq!(interner.get("data_q"), Some(id));
    }

    #[test]
    fn names_are_deduplicated() {
        let interner = Interner::new();
        let a = interner.get_or_intern("clk");
        let b = interner.get_or_intern("clk");
        assert_eq!(a, b);
        assert_ne!(a, interner.get_or_intern("rst_n"));
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn unknown_names_and_foreign_idents() {
        let interner = Interner::new();
        assert!(interner.is_empty());
        assert_eq!(interner.get("never_seen"), None);
        assert_eq!(interner.try_resolve(Ident::from_raw(42)), None);
        assert!(interner.is_empty());
    }

    #[test]
    fn serializes_as_index() {
        let id = Ident::from_raw(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        let back: Ident = serde_json::from_str("42").unwrap();
        assert_eq!(back.as_raw(), 42);
    }
}
