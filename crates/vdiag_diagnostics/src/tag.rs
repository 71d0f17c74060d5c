//! Diagnostic identifier tags embedded in rendered text.
//!
//! Every rendered diagnostic carries a bracketed tag such as `[WRN:PA_:0305]`
//! so that tooling can recover the [`DiagnosticKind`] from saved logs. The
//! layout is:
//!
//! ```text
//! WRN:PA_:0305
//! ^^^ ^^^ ^^^^
//! |   |   decimal kind id, zero padded to at least 4 digits
//! |   category code, padded with '_' to 3 characters
//! severity abbreviation
//! ```
//!
//! The first [`TAG_PREFIX_WIDTH`] characters form a fixed-width prefix that
//! [`decode`] skips without interpreting, so logs written under a different
//! severity override still decode to the same kind.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::category::Category;
use crate::kind::DiagnosticKind;
use crate::severity::Severity;

/// Width of the non-numeric prefix of a tag (`WRN:PA_:`).
pub const TAG_PREFIX_WIDTH: usize = 8;

const PAD: char = '_';

/// The decoded form of a diagnostic tag.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticTag {
    /// The severity the diagnostic was rendered with.
    pub severity: Severity,
    /// The category of the kind.
    pub category: Category,
    /// The kind itself.
    pub kind: DiagnosticKind,
}

impl DiagnosticTag {
    /// Creates a tag.
    pub fn new(severity: Severity, category: Category, kind: DiagnosticKind) -> Self {
        Self {
            severity,
            category,
            kind,
        }
    }

    /// Returns the tag text without brackets, e.g. `WRN:PA_:0305`.
    pub fn encode(&self) -> String {
        format!(
            "{}:{:_<3}:{:04}",
            self.severity.abbrev(),
            self.category.code(),
            self.kind.as_raw()
        )
    }

    /// Parses a complete tag, with or without its brackets.
    ///
    /// Unlike [`decode`], this also recovers severity and category, and it
    /// rejects anything that is not exactly one well-formed tag.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let text = match text.strip_prefix('[') {
            Some(inner) => inner.strip_suffix(']')?,
            None => text,
        };
        let severity = Severity::from_abbrev(text.get(0..3)?)?;
        if text.get(3..4)? != ":" || text.get(7..8)? != ":" {
            return None;
        }
        let code = text.get(4..7)?.trim_end_matches(PAD);
        let category = Category::parse_code(code)?;
        let kind = decode_token(text)?;
        Some(Self::new(severity, category, kind))
    }
}

impl fmt::Display for DiagnosticTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.encode())
    }
}

/// Decodes the id from one tag body (brackets already removed).
fn decode_token(token: &str) -> Option<DiagnosticKind> {
    let digits = token.get(TAG_PREFIX_WIDTH..)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u32>().ok().map(DiagnosticKind::from_raw)
}

/// Finds a diagnostic tag anywhere in `text` and returns its kind.
///
/// Each bracketed token is tried in order and the first one that decodes
/// wins. Returns `None` when there is no bracketed token, when the digits
/// after the prefix are missing or not numeric, or when they overflow `u32`.
/// Never panics, whatever the input.
pub fn decode(text: &str) -> Option<DiagnosticKind> {
    let mut rest = text;
    while let Some(open) = rest.find('[') {
        let after = &rest[open + 1..];
        let close = after.find(']')?;
        if let Some(kind) = decode_token(&after[..close]) {
            return Some(kind);
        }
        rest = after;
    }
    None
}

/// Recovers the kind from a self-contained id string.
///
/// Everything after the last `]` and up to the first `[` is dropped, then
/// the remainder is decoded like a single tag body. Intended for strings
/// known to hold one id (`[ERR:PP_:0202]`, `ERR:PP_:0202`), unlike
/// [`decode`] which searches free text.
pub fn parse_error_id(text: &str) -> Option<DiagnosticKind> {
    let text = match text.rfind(']') {
        Some(end) => &text[..end],
        None => text,
    };
    let text = match text.find('[') {
        Some(start) => &text[start + 1..],
        None => text,
    };
    decode_token(text)
}
