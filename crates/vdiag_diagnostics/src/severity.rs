//! Diagnostic severity levels ordered from least to most severe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The severity level of a diagnostic message.
///
/// Ordered from least severe (`Info`) to most severe (`Fatal`), matching the
/// derived `PartialOrd`/`Ord` implementation based on declaration order. The
/// abort/continue policy built on top of this ordering belongs to the
/// reporting pipeline; this crate only classifies.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Severity {
    /// Progress and statistics messages.
    Info,
    /// An informational note providing additional context.
    Note,
    /// A potential issue that should be reviewed but doesn't fail the build.
    Warning,
    /// A definite problem; the run fails but processing may continue.
    Error,
    /// A problem after which the pipeline must abort.
    Fatal,
}

/// Accepted textual spellings, canonical names first.
///
/// The truncated and space-padded forms come from fixed-width columns in
/// older logs. `SYNTAX`/`SYNTX` are legacy spellings that read back as notes.
const SPELLINGS: &[(&str, Severity)] = &[
    ("FATAL", Severity::Fatal),
    ("ERROR", Severity::Error),
    ("WARNING", Severity::Warning),
    ("NOTE", Severity::Note),
    ("INFO", Severity::Info),
    ("WARNI", Severity::Warning),
    ("NOTE ", Severity::Note),
    ("INFO ", Severity::Info),
    ("SYNTAX", Severity::Note),
    ("SYNTX", Severity::Note),
];

impl Severity {
    /// Every severity, least severe first.
    pub const ALL: [Severity; 5] = [
        Severity::Info,
        Severity::Note,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Parses a severity from its external text.
    ///
    /// Matching is case-sensitive. Anything unrecognized is treated as
    /// [`Fatal`](Severity::Fatal): over-escalating an unknown severity is the
    /// safe direction.
    pub fn from_text(text: &str) -> Severity {
        Self::parse_text(text).unwrap_or(Severity::Fatal)
    }

    /// Parses a severity from its external text, returning `None` for
    /// anything outside the accepted vocabulary.
    pub fn parse_text(text: &str) -> Option<Severity> {
        SPELLINGS
            .iter()
            .find(|(spelling, _)| *spelling == text)
            .map(|&(_, severity)| severity)
    }

    /// Returns the canonical upper-case name, the inverse of [`from_text`](Self::from_text).
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Fatal => "FATAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Note => "NOTE",
            Severity::Info => "INFO",
        }
    }

    /// Returns the three-letter abbreviation used in diagnostic tags.
    pub fn abbrev(self) -> &'static str {
        match self {
            Severity::Fatal => "FAT",
            Severity::Error => "ERR",
            Severity::Warning => "WRN",
            Severity::Note => "NTE",
            Severity::Info => "INF",
        }
    }

    /// Parses a tag abbreviation produced by [`abbrev`](Self::abbrev).
    pub fn from_abbrev(abbrev: &str) -> Option<Severity> {
        Severity::ALL.into_iter().find(|s| s.abbrev() == abbrev)
    }

    /// Returns `true` for [`Error`](Severity::Error) and [`Fatal`](Severity::Fatal).
    pub fn is_error(self) -> bool {
        self >= Severity::Error
    }

    /// Returns `true` if this severity is [`Fatal`](Severity::Fatal).
    pub fn is_fatal(self) -> bool {
        self == Severity::Fatal
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Note => write!(f, "note"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
            Severity::Fatal => write!(f, "fatal"),
        }
    }
}
