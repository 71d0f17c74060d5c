//! Stable numeric identities for diagnosable conditions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The stable identity of one diagnosable condition.
///
/// Identities are small integers grouped in per-category blocks of one
/// hundred. Once assigned, an identity is never reassigned or reused: logs,
/// waiver files and tooling all depend on it. The builtin kinds are exposed
/// as associated constants (e.g. [`DiagnosticKind::PP_UNKNOWN_MACRO`]).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagnosticKind(u32);

impl DiagnosticKind {
    /// Creates a kind from its raw numeric identity.
    pub const fn from_raw(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw numeric identity.
    pub const fn as_raw(self) -> u32 {
        self.0
    }

    /// Returns the symbolic name of a builtin kind, e.g. `"PP_UNKNOWN_MACRO"`.
    pub fn builtin_name(self) -> Option<&'static str> {
        crate::builtin::BUILTIN
            .iter()
            .find(|spec| spec.kind == self)
            .map(|spec| spec.name)
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_roundtrip() {
        let kind = DiagnosticKind::from_raw(1042);
        assert_eq!(kind.as_raw(), 1042);
        assert_eq!(format!("{kind}"), "1042");
    }

    #[test]
    fn builtin_names() {
        assert_eq!(
            DiagnosticKind::PP_UNKNOWN_MACRO.builtin_name(),
            Some("PP_UNKNOWN_MACRO")
        );
        assert_eq!(DiagnosticKind::from_raw(99_999).builtin_name(), None);
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&DiagnosticKind::from_raw(203)).unwrap();
        assert_eq!(json, "203");
    }
}
