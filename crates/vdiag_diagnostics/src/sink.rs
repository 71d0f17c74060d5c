//! Thread-safe diagnostic accumulator for parallel compilation stages.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::diagnostic::Diagnostic;
use crate::occurrence::DiagnosticOccurrence;
use crate::registry::DiagnosticRegistry;
use crate::severity::Severity;

/// A thread-safe accumulator for diagnostics emitted during compilation.
///
/// Workers either [`emit`](Self::emit) already classified diagnostics or
/// [`report`](Self::report) raw occurrences, which are run through the
/// registry's waivers and catalog first. Per-severity counts are tracked
/// atomically for fast `has_errors` checks without locking the vector.
pub struct DiagnosticSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
    counts: [AtomicUsize; Severity::ALL.len()],
    waived: AtomicUsize,
}

impl DiagnosticSink {
    /// Creates a new empty diagnostic sink.
    pub fn new() -> Self {
        Self {
            diagnostics: Mutex::new(Vec::new()),
            counts: Default::default(),
            waived: AtomicUsize::new(0),
        }
    }

    /// Classifies an occurrence and stores it unless it is waived.
    ///
    /// Returns `true` if the occurrence was stored.
    ///
    /// # Panics
    ///
    /// Panics if a non-waived occurrence's kind is not registered.
    pub fn report(&self, registry: &DiagnosticRegistry, occ: &DiagnosticOccurrence) -> bool {
        match registry.classify(occ) {
            Some(diag) => {
                self.emit(diag);
                true
            }
            None => {
                self.waived.fetch_add(1, Ordering::Relaxed);
                false
            }
        }
    }

    /// Emits a classified diagnostic into the sink.
    pub fn emit(&self, diag: Diagnostic) {
        self.counts[diag.severity() as usize].fetch_add(1, Ordering::Relaxed);
        self.diagnostics.lock().push(diag);
    }

    /// Returns the number of diagnostics stored at `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.counts[severity as usize].load(Ordering::Relaxed)
    }

    /// Returns the number of occurrences dropped by waivers.
    pub fn waived_count(&self) -> usize {
        self.waived.load(Ordering::Relaxed)
    }

    /// Returns the number of error and fatal diagnostics.
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error) + self.count(Severity::Fatal)
    }

    /// Returns `true` if any error or fatal diagnostic has been stored.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Returns `true` if any fatal diagnostic has been stored.
    pub fn has_fatal(&self) -> bool {
        self.count(Severity::Fatal) > 0
    }

    /// Takes all accumulated diagnostics, leaving the sink empty.
    ///
    /// Counters are not reset.
    pub fn take_all(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.lock())
    }

    /// Returns a snapshot of all accumulated diagnostics without draining.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }
}

impl Default for DiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}
