//! Concrete occurrences of a diagnostic kind raised by a compiler stage.

use serde::{Deserialize, Serialize};

use crate::kind::DiagnosticKind;

/// A related, earlier occurrence referenced from a diagnostic
/// (e.g. the previous definition of a multiply defined macro).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrossReference {
    /// The related object, substituted for `{object}`.
    pub object: String,
    /// The file of the related occurrence.
    pub file: String,
    /// The line of the related occurrence.
    pub line: u32,
}

impl CrossReference {
    /// Creates a cross-reference.
    pub fn new(object: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            object: object.into(),
            file: file.into(),
            line,
        }
    }

    /// Returns the `file:line` locator substituted for `{location}`.
    pub fn locator(&self) -> String {
        format!("{}:{}", self.file, self.line)
    }
}

/// One concrete instance of a diagnostic kind.
///
/// Built by the stage that detects the condition, checked against the
/// waiver table, resolved through the catalog and then dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticOccurrence {
    /// The kind being raised.
    pub kind: DiagnosticKind,
    /// The source file, or empty when there is none (command line, statistics).
    pub file: String,
    /// The 1-based source line, or 0 when there is none.
    pub line: u32,
    /// The design object involved, matched against waiver rules.
    pub object: String,
    /// The printable subject substituted for `{subject}`.
    pub subject: String,
    /// An optional related occurrence.
    pub cross_reference: Option<CrossReference>,
}

impl DiagnosticOccurrence {
    /// Creates an occurrence at a location with no object or subject.
    pub fn new(kind: DiagnosticKind, file: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            file: file.into(),
            line,
            object: String::new(),
            subject: String::new(),
            cross_reference: None,
        }
    }

    /// Creates an occurrence whose object and subject are the same name,
    /// which is the usual case for "undefined X"/"multiply defined X".
    pub fn named(
        kind: DiagnosticKind,
        file: impl Into<String>,
        line: u32,
        name: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            object: name.clone(),
            subject: name,
            ..Self::new(kind, file, line)
        }
    }

    /// Sets the design object matched against waivers.
    pub fn with_object(mut self, object: impl Into<String>) -> Self {
        self.object = object.into();
        self
    }

    /// Sets the printable subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Attaches a related occurrence.
    pub fn with_cross_reference(mut self, xref: CrossReference) -> Self {
        self.cross_reference = Some(xref);
        self
    }
}
