//! Diagnostics resolved against the catalog, ready for reporting.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::category::Category;
use crate::kind::DiagnosticKind;
use crate::severity::Severity;
use crate::tag::DiagnosticTag;

/// A subordinate note pointing at a related occurrence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedNote {
    /// The file of the related occurrence.
    pub file: String,
    /// The line of the related occurrence.
    pub line: u32,
    /// The rendered cross-reference template.
    pub message: String,
}

/// An occurrence that survived waiver matching, classified by the catalog.
///
/// Carries the severity and category in effect when it was classified, so a
/// later severity override does not change diagnostics already produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity, category and kind.
    pub tag: DiagnosticTag,
    /// The source file, or empty.
    pub file: String,
    /// The source line, or 0.
    pub line: u32,
    /// The rendered primary message.
    pub message: String,
    /// The rendered cross-reference, if the occurrence had one and the kind
    /// has a cross-reference template.
    pub related: Option<RelatedNote>,
}

impl Diagnostic {
    /// The kind of this diagnostic.
    pub fn kind(&self) -> DiagnosticKind {
        self.tag.kind
    }

    /// The severity in effect when this diagnostic was classified.
    pub fn severity(&self) -> Severity {
        self.tag.severity
    }

    /// The category of the kind.
    pub fn category(&self) -> Category {
        self.tag.category
    }
}

/// One line: `[TAG] file:line: message`, omitting the locator when there is
/// no file.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.file.is_empty(), self.line) {
            (true, _) => write!(f, "{} {}", self.tag, self.message),
            (false, 0) => write!(f, "{} {}: {}", self.tag, self.file, self.message),
            (false, line) => write!(f, "{} {}:{}: {}", self.tag, self.file, line, self.message),
        }
    }
}
