//! Macros exempt from argument-count diagnostics.

use std::collections::HashSet;

use parking_lot::RwLock;

/// Names of macros the preprocessor may call with too many or too few
/// arguments without raising a diagnostic. Case-sensitive.
#[derive(Default)]
pub struct MacroArgAllowlist {
    names: RwLock<HashSet<String>>,
}

impl MacroArgAllowlist {
    /// Creates an empty allowlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a macro name. Returns `false` if it was already present.
    pub fn add(&self, name: impl Into<String>) -> bool {
        let name = name.into();
        tracing::trace!(%name, "macro argument check waived");
        self.names.write().insert(name)
    }

    /// Returns `true` if `name` is exempt.
    pub fn contains(&self, name: &str) -> bool {
        self.names.read().contains(name)
    }

    /// Returns the number of exempt names.
    pub fn len(&self) -> usize {
        self.names.read().len()
    }

    /// Returns `true` if no name has been added.
    pub fn is_empty(&self) -> bool {
        self.names.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_after_add() {
        let list = MacroArgAllowlist::new();
        assert!(!list.contains("UVM_INFO"));
        assert!(list.add("UVM_INFO"));
        assert!(list.contains("UVM_INFO"));
        assert!(!list.contains("UVM_ERROR"));
        assert!(!list.contains("uvm_info"));
    }

    #[test]
    fn add_twice() {
        let list = MacroArgAllowlist::new();
        assert!(list.is_empty());
        assert!(list.add("M"));
        assert!(!list.add("M"));
        assert_eq!(list.len(), 1);
    }
}
