//! Suppression rules matched against diagnostic occurrences.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::kind::DiagnosticKind;
use crate::occurrence::DiagnosticOccurrence;

/// A single suppression rule.
///
/// The kind must always match. Each other field either matches exactly
/// (case-sensitive) or is a wildcard: an empty string for `file`/`object`,
/// zero for `line`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WaiverRule {
    /// The kind this rule waives.
    pub kind: DiagnosticKind,
    /// The file to match, or empty for any file.
    pub file: String,
    /// The line to match, or 0 for any line.
    pub line: u32,
    /// The object to match, or empty for any object.
    pub object: String,
}

impl WaiverRule {
    /// Creates a rule. Pass `""`/`0` for fields that should match anything.
    pub fn new(
        kind: DiagnosticKind,
        file: impl Into<String>,
        line: u32,
        object: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            file: file.into(),
            line,
            object: object.into(),
        }
    }

    /// Creates a rule waiving `kind` everywhere.
    pub fn global(kind: DiagnosticKind) -> Self {
        Self::new(kind, "", 0, "")
    }

    /// Returns `true` if every location field is a wildcard.
    pub fn is_global(&self) -> bool {
        self.file.is_empty() && self.line == 0 && self.object.is_empty()
    }

    /// Returns `true` if this rule suppresses `occ`.
    pub fn matches(&self, occ: &DiagnosticOccurrence) -> bool {
        self.kind == occ.kind
            && (self.file.is_empty() || self.file == occ.file)
            && (self.line == 0 || self.line == occ.line)
            && (self.object.is_empty() || self.object == occ.object)
    }
}

/// The waiver rules of one compilation run.
///
/// Rules are only ever appended. Most are loaded before compilation starts,
/// but inline suppression directives add rules while sibling workers are
/// emitting, so access goes through a readers-writer lock. Duplicate rules
/// are kept; matching only asks whether any rule applies.
#[derive(Default)]
pub struct WaiverTable {
    rules: RwLock<HashMap<DiagnosticKind, Vec<WaiverRule>>>,
}

impl WaiverTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule built from its fields.
    pub fn add_rule(
        &self,
        kind: DiagnosticKind,
        file: impl Into<String>,
        line: u32,
        object: impl Into<String>,
    ) {
        self.add(WaiverRule::new(kind, file, line, object));
    }

    /// Appends a rule.
    pub fn add(&self, rule: WaiverRule) {
        tracing::trace!(
            kind = %rule.kind,
            file = %rule.file,
            line = rule.line,
            object = %rule.object,
            "waiver added"
        );
        self.rules.write().entry(rule.kind).or_default().push(rule);
    }

    /// Returns `true` if at least one rule suppresses `occ`.
    pub fn is_waived(&self, occ: &DiagnosticOccurrence) -> bool {
        self.rules
            .read()
            .get(&occ.kind)
            .is_some_and(|rules| rules.iter().any(|rule| rule.matches(occ)))
    }

    /// Returns a snapshot of the rules registered for `kind`, in insertion order.
    pub fn rules_for(&self, kind: DiagnosticKind) -> Vec<WaiverRule> {
        self.rules.read().get(&kind).cloned().unwrap_or_default()
    }

    /// Returns the total number of rules.
    pub fn len(&self) -> usize {
        self.rules.read().values().map(Vec::len).sum()
    }

    /// Returns `true` if no rule has been added.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
