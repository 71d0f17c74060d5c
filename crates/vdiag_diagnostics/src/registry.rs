//! The per-run diagnostic context shared by every compilation worker.

use crate::catalog::{Catalog, CatalogError};
use crate::diagnostic::{Diagnostic, RelatedNote};
use crate::macro_args::MacroArgAllowlist;
use crate::occurrence::DiagnosticOccurrence;
use crate::waiver::WaiverTable;

/// Catalog, waiver table and macro allowlist of one compilation run.
///
/// Constructed once by the driver, configured single-threaded, then shared
/// by reference (`&DiagnosticRegistry` or `Arc<DiagnosticRegistry>`) with
/// every stage that raises diagnostics. Each part synchronizes itself, so
/// late additions such as inline waivers are safe during emission.
#[derive(Default)]
pub struct DiagnosticRegistry {
    catalog: Catalog,
    waivers: WaiverTable,
    macro_args: MacroArgAllowlist,
}

impl DiagnosticRegistry {
    /// Creates a registry with an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry whose catalog holds the builtin table.
    pub fn with_builtin_catalog() -> Result<Self, CatalogError> {
        let registry = Self::new();
        registry.catalog.initialize()?;
        Ok(registry)
    }

    /// The diagnostic catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The waiver table.
    pub fn waivers(&self) -> &WaiverTable {
        &self.waivers
    }

    /// The macro argument-count allowlist.
    pub fn macro_args(&self) -> &MacroArgAllowlist {
        &self.macro_args
    }

    /// Returns `true` if `occ` is suppressed by a waiver rule.
    pub fn is_waived(&self, occ: &DiagnosticOccurrence) -> bool {
        self.waivers.is_waived(occ)
    }

    /// Resolves an occurrence against the catalog, ignoring waivers.
    ///
    /// # Panics
    ///
    /// Panics if the occurrence's kind is not registered.
    pub fn resolve(&self, occ: &DiagnosticOccurrence) -> Diagnostic {
        let entry = self.catalog.lookup(occ.kind);
        let object = occ.cross_reference.as_ref().map(|x| x.object.as_str());
        let related = occ.cross_reference.as_ref().and_then(|xref| {
            entry.render_cross_reference(xref).map(|message| RelatedNote {
                file: xref.file.clone(),
                line: xref.line,
                message,
            })
        });
        Diagnostic {
            tag: entry.tag(),
            file: occ.file.clone(),
            line: occ.line,
            message: entry.render_message(&occ.subject, object),
            related,
        }
    }

    /// Waiver check followed by catalog resolution.
    ///
    /// Returns `None` when the occurrence is waived.
    ///
    /// # Panics
    ///
    /// Panics if a non-waived occurrence's kind is not registered.
    pub fn classify(&self, occ: &DiagnosticOccurrence) -> Option<Diagnostic> {
        if self.is_waived(occ) {
            tracing::trace!(
                kind = %occ.kind,
                file = %occ.file,
                line = occ.line,
                "diagnostic waived"
            );
            return None;
        }
        Some(self.resolve(occ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::DiagnosticKind;
    use crate::occurrence::CrossReference;
    use crate::severity::Severity;

    fn registry() -> DiagnosticRegistry {
        DiagnosticRegistry::with_builtin_catalog().unwrap()
    }

    #[test]
    fn classify_renders_message_and_related_note() {
        let reg = registry();
        let occ = DiagnosticOccurrence::named(
            DiagnosticKind::PP_MULTIPLY_DEFINED_MACRO,
            "top.sv",
            20,
            "WIDTH",
        )
        .with_cross_reference(CrossReference::new("WIDTH", "defs.svh", 4));

        let diag = reg.classify(&occ).unwrap();
        assert_eq!(diag.severity(), Severity::Note);
        assert_eq!(diag.message, r#"Multiply defined macro "WIDTH""#);
        let related = diag.related.unwrap();
        assert_eq!(related.message, "defs.svh:4: previous definition");
        assert_eq!((related.file.as_str(), related.line), ("defs.svh", 4));
    }

    #[test]
    fn classify_without_cross_reference() {
        let reg = registry();
        let occ = DiagnosticOccurrence::named(
            DiagnosticKind::PP_MULTIPLY_DEFINED_MACRO,
            "top.sv",
            20,
            "W",
        );
        assert!(reg.classify(&occ).unwrap().related.is_none());
    }

    #[test]
    fn waived_occurrence_is_dropped() {
        let reg = registry();
        reg.waivers()
            .add_rule(DiagnosticKind::PA_NOTIMESCALE_INFO, "legacy.v", 0, "");
        let waived =
            DiagnosticOccurrence::named(DiagnosticKind::PA_NOTIMESCALE_INFO, "legacy.v", 1, "m");
        let kept =
            DiagnosticOccurrence::named(DiagnosticKind::PA_NOTIMESCALE_INFO, "top.v", 1, "m");
        assert!(reg.classify(&waived).is_none());
        assert!(reg.classify(&kept).is_some());
    }

    #[test]
    fn classify_sees_severity_override() {
        let reg = registry();
        let kind = DiagnosticKind::PA_NOTIMESCALE_INFO;
        reg.catalog().override_severity(kind, Severity::Fatal);
        let diag = reg
            .classify(&DiagnosticOccurrence::named(kind, "a.v", 1, "m"))
            .unwrap();
        assert_eq!(diag.severity(), Severity::Fatal);
        assert!(diag.to_string().starts_with("[FAT:PA_:0305]"));
    }

    #[test]
    #[should_panic(expected = "not registered")]
    fn classify_unregistered_panics() {
        let reg = DiagnosticRegistry::new();
        reg.classify(&DiagnosticOccurrence::new(DiagnosticKind::PP_UNKNOWN_MACRO, "a.sv", 1));
    }

    #[test]
    fn waived_unregistered_kind_does_not_panic() {
        let reg = DiagnosticRegistry::new();
        reg.waivers().add_rule(DiagnosticKind::from_raw(9999), "", 0, "");
        let occ = DiagnosticOccurrence::new(DiagnosticKind::from_raw(9999), "a.sv", 1);
        assert!(reg.classify(&occ).is_none());
    }
}
