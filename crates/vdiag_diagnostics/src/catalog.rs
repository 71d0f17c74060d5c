//! The diagnostic catalog: what each diagnostic kind means.
//!
//! A [`Catalog`] maps every registered [`DiagnosticKind`] to its severity,
//! category and message templates. It is populated from declarative
//! [`KindSpec`] tables, validated as a whole before anything is inserted.
//! Severities can be overridden at runtime; all other fields are fixed once
//! registered.
//!
//! Templates use three placeholders, substituted verbatim with no escaping:
//! - `{subject}`: the primary subject of the occurrence (at most once, primary template only)
//! - `{object}`: the cross-reference object (either template)
//! - `{location}`: the `file:line` of the cross-reference (secondary template only)

use std::collections::HashMap;

use parking_lot::RwLock;
use serde::Serialize;
use vdiag_common::{InternalError, VdiagResult};

use crate::builtin::BUILTIN;
use crate::category::Category;
use crate::kind::DiagnosticKind;
use crate::occurrence::CrossReference;
use crate::severity::Severity;
use crate::tag::{self, DiagnosticTag};

/// Placeholder for the primary subject.
pub const SUBJECT: &str = "{subject}";
/// Placeholder for the cross-reference object.
pub const OBJECT: &str = "{object}";
/// Placeholder for the cross-reference `file:line` locator.
pub const LOCATION: &str = "{location}";

/// Errors detected while loading a diagnostic table.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The same kind appears twice in one table.
    #[error("diagnostic kind {kind} is declared more than once")]
    DuplicateKind {
        /// The repeated kind.
        kind: DiagnosticKind,
    },

    /// Two kinds share one symbolic name.
    #[error("diagnostic name '{name}' is used by more than one kind")]
    DuplicateName {
        /// The repeated name.
        name: &'static str,
    },

    /// A kind is already registered with a different definition.
    #[error("diagnostic kind {kind} ('{name}') conflicts with its existing registration")]
    ConflictingKind {
        /// The conflicting kind.
        kind: DiagnosticKind,
        /// The name in the rejected table row.
        name: &'static str,
    },

    /// A template is malformed.
    #[error("invalid template for '{name}': {reason}")]
    InvalidTemplate {
        /// The name of the offending row.
        name: &'static str,
        /// What is wrong with the template.
        reason: &'static str,
    },
}

/// One row of a declarative diagnostic table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct KindSpec {
    /// The stable identity of the kind.
    pub kind: DiagnosticKind,
    /// The symbolic name, e.g. `PP_UNKNOWN_MACRO`.
    pub name: &'static str,
    /// The default severity.
    pub severity: Severity,
    /// The compilation phase the kind belongs to.
    pub category: Category,
    /// The primary message template.
    pub message: &'static str,
    /// The optional secondary template rendered as a related note.
    pub cross_reference: Option<&'static str>,
}

impl KindSpec {
    /// Checks the row's templates against the placeholder rules.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason| CatalogError::InvalidTemplate {
            name: self.name,
            reason,
        };
        if self.name.is_empty() {
            return Err(invalid("empty name"));
        }
        if self.message.is_empty() {
            return Err(invalid("empty primary template"));
        }
        if self.message.matches(SUBJECT).count() > 1 {
            return Err(invalid("more than one subject placeholder"));
        }
        if self.message.contains(LOCATION) {
            return Err(invalid("location placeholder in primary template"));
        }
        if let Some(xref) = self.cross_reference {
            if xref.is_empty() {
                return Err(invalid("empty cross-reference template"));
            }
            if xref.contains(SUBJECT) {
                return Err(invalid("subject placeholder in cross-reference template"));
            }
        }
        Ok(())
    }
}

/// The registered definition of one diagnostic kind.
///
/// Entries are small `Copy` values handed out by [`Catalog::lookup`], so a
/// reader never observes a half-applied severity override.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct CatalogEntry {
    /// The stable identity of the kind.
    pub kind: DiagnosticKind,
    /// The symbolic name.
    pub name: &'static str,
    /// The current severity, including any override.
    pub severity: Severity,
    /// The compilation phase the kind belongs to.
    pub category: Category,
    /// The primary message template.
    pub message: &'static str,
    /// The optional cross-reference template.
    pub cross_reference: Option<&'static str>,
}

impl CatalogEntry {
    fn from_spec(spec: &KindSpec) -> Self {
        Self {
            kind: spec.kind,
            name: spec.name,
            severity: spec.severity,
            category: spec.category,
            message: spec.message,
            cross_reference: spec.cross_reference,
        }
    }

    /// Returns `true` if `spec` describes this entry, ignoring severity.
    fn same_definition(&self, spec: &KindSpec) -> bool {
        self.name == spec.name
            && self.category == spec.category
            && self.message == spec.message
            && self.cross_reference == spec.cross_reference
    }

    /// Returns the identifier tag for this entry at its current severity.
    pub fn tag(&self) -> DiagnosticTag {
        DiagnosticTag::new(self.severity, self.category, self.kind)
    }

    /// Renders the primary message.
    ///
    /// `{subject}` is replaced by `subject`, `{object}` by the cross-reference
    /// object (or nothing when there is none).
    pub fn render_message(&self, subject: &str, object: Option<&str>) -> String {
        substitute(
            self.message,
            &[(SUBJECT, subject), (OBJECT, object.unwrap_or_default())],
        )
    }

    /// Renders the related note for a cross-reference.
    ///
    /// Returns `None` when this kind has no cross-reference template.
    pub fn render_cross_reference(&self, xref: &CrossReference) -> Option<String> {
        self.cross_reference.map(|template| {
            substitute(
                template,
                &[(LOCATION, &xref.locator()), (OBJECT, &xref.object)],
            )
        })
    }
}

/// Fills `template` in one left-to-right pass.
///
/// Substituted values are copied as is and never scanned for placeholders.
fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        rest = &rest[open..];
        let matched = values
            .iter()
            .find(|(placeholder, _)| rest.starts_with(*placeholder));
        match matched {
            Some((placeholder, value)) => {
                out.push_str(value);
                rest = &rest[placeholder.len()..];
            }
            None => {
                out.push('{');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[derive(Default)]
struct CatalogState {
    entries: HashMap<DiagnosticKind, CatalogEntry>,
    names: HashMap<&'static str, DiagnosticKind>,
    initialized: bool,
}

/// Registry of every known diagnostic kind.
///
/// Owned by a compilation run (usually through
/// [`DiagnosticRegistry`](crate::DiagnosticRegistry)) and shared by reference
/// with every worker. Reads and severity overrides go through a
/// readers-writer lock, so overrides applied while workers are emitting are
/// seen whole or not at all.
pub struct Catalog {
    state: RwLock<CatalogState>,
}

impl Catalog {
    /// Creates an empty catalog with nothing registered.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(CatalogState::default()),
        }
    }

    /// Populates the catalog with the builtin table.
    ///
    /// Idempotent: only the first call inserts anything, later calls return
    /// `Ok(false)` and leave entries (including overridden severities)
    /// untouched. Several compiler stages may call this defensively.
    pub fn initialize(&self) -> Result<bool, CatalogError> {
        if self.state.read().initialized {
            return Ok(false);
        }
        let mut state = self.state.write();
        if state.initialized {
            return Ok(false);
        }
        let added = Self::insert_table(&mut state, BUILTIN)?;
        state.initialized = true;
        tracing::debug!(kinds = added, "diagnostic catalog initialized");
        Ok(true)
    }

    /// Returns `true` once [`initialize`](Self::initialize) has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.state.read().initialized
    }

    /// Loads an additional declarative table, returning the number of new kinds.
    ///
    /// The whole table is validated before anything is inserted. Rows that
    /// repeat an existing registration exactly are skipped, so reloading a
    /// table is harmless; a row that redefines a registered kind is rejected.
    pub fn load(&self, table: &[KindSpec]) -> Result<usize, CatalogError> {
        let mut state = self.state.write();
        let added = Self::insert_table(&mut state, table)?;
        tracing::debug!(kinds = added, rows = table.len(), "loaded diagnostic table");
        Ok(added)
    }

    fn insert_table(state: &mut CatalogState, table: &[KindSpec]) -> Result<usize, CatalogError> {
        let mut seen_kinds = HashMap::with_capacity(table.len());
        let mut seen_names = HashMap::with_capacity(table.len());
        for spec in table {
            spec.validate()?;
            if seen_kinds.insert(spec.kind, spec.name).is_some() {
                return Err(CatalogError::DuplicateKind { kind: spec.kind });
            }
            if seen_names.insert(spec.name, spec.kind).is_some() {
                return Err(CatalogError::DuplicateName { name: spec.name });
            }
            if let Some(existing) = state.entries.get(&spec.kind) {
                if !existing.same_definition(spec) {
                    return Err(CatalogError::ConflictingKind {
                        kind: spec.kind,
                        name: spec.name,
                    });
                }
            } else if state.names.contains_key(spec.name) {
                return Err(CatalogError::DuplicateName { name: spec.name });
            }
        }

        let mut added = 0;
        for spec in table {
            if state.entries.contains_key(&spec.kind) {
                continue;
            }
            state.entries.insert(spec.kind, CatalogEntry::from_spec(spec));
            state.names.insert(spec.name, spec.kind);
            added += 1;
        }
        Ok(added)
    }

    /// Looks up the entry for a registered kind.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is not registered. Raising an unregistered kind is a
    /// coding defect in the caller, not a data condition.
    pub fn lookup(&self, kind: DiagnosticKind) -> CatalogEntry {
        match self.get(kind) {
            Some(entry) => entry,
            None => panic!("diagnostic kind {kind} is not registered in the catalog"),
        }
    }

    /// Looks up a kind, reporting an unregistered kind as an [`InternalError`].
    pub fn try_lookup(&self, kind: DiagnosticKind) -> VdiagResult<CatalogEntry> {
        self.get(kind).ok_or_else(|| {
            InternalError::new(format!(
                "diagnostic kind {kind} is not registered in the catalog"
            ))
        })
    }

    /// Looks up a kind, returning `None` if it is not registered.
    pub fn get(&self, kind: DiagnosticKind) -> Option<CatalogEntry> {
        self.state.read().entries.get(&kind).copied()
    }

    /// Returns `true` if `kind` is registered.
    pub fn contains(&self, kind: DiagnosticKind) -> bool {
        self.state.read().entries.contains_key(&kind)
    }

    /// Replaces the severity of a registered kind.
    ///
    /// Overrides usually come from generic run configuration that does not
    /// check kinds up front, so an unregistered kind is ignored rather than
    /// rejected. Returns `true` if an entry was updated.
    pub fn override_severity(&self, kind: DiagnosticKind, severity: Severity) -> bool {
        let mut state = self.state.write();
        match state.entries.get_mut(&kind) {
            Some(entry) => {
                tracing::debug!(
                    kind = entry.name,
                    from = %entry.severity,
                    to = %severity,
                    "diagnostic severity overridden"
                );
                entry.severity = severity;
                true
            }
            None => {
                tracing::debug!(
                    %kind,
                    %severity,
                    "ignoring severity override for unregistered kind"
                );
                false
            }
        }
    }

    /// Returns the tag for a registered kind at its current severity.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is not registered, like [`lookup`](Self::lookup).
    pub fn tag(&self, kind: DiagnosticKind) -> DiagnosticTag {
        self.lookup(kind).tag()
    }

    /// Finds a registered kind by its symbolic name.
    pub fn kind_by_name(&self, name: &str) -> Option<DiagnosticKind> {
        self.state.read().names.get(name).copied()
    }

    /// Recovers a kind from a self-contained diagnostic id string such as
    /// `[WRN:PA_:0305]` or `WRN:PA_:0305`.
    ///
    /// See [`tag::parse_error_id`]; the result is not checked against the
    /// catalog.
    pub fn parse_kind_from_error_id_string(text: &str) -> Option<DiagnosticKind> {
        tag::parse_error_id(text)
    }

    /// Returns the number of registered kinds.
    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    /// Returns `true` if no kind is registered.
    pub fn is_empty(&self) -> bool {
        self.state.read().entries.is_empty()
    }

    /// Returns a snapshot of every entry, sorted by kind.
    pub fn entries(&self) -> Vec<CatalogEntry> {
        let mut entries: Vec<_> = self.state.read().entries.values().copied().collect();
        entries.sort_by_key(|e| e.kind);
        entries
    }

    /// Returns a snapshot of the entries in one category, sorted by kind.
    pub fn by_category(&self, category: Category) -> Vec<CatalogEntry> {
        let mut entries: Vec<_> = self
            .state
            .read()
            .entries
            .values()
            .filter(|e| e.category == category)
            .copied()
            .collect();
        entries.sort_by_key(|e| e.kind);
        entries
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
