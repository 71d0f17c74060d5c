//! Compilation-phase categories and their short external codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The compilation phase a diagnostic kind belongs to.
///
/// Each category has a 2-3 character code used in rendered diagnostics and
/// logs (e.g. `PP` for the preprocessor, `LIB` for library mapping).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Command-line processing, prefixed with `CM`.
    Command,
    /// Preprocessing (macros, includes), prefixed with `PP`.
    Preprocess,
    /// Parsing, prefixed with `PA`.
    Parse,
    /// Python extension listeners, prefixed with `PY`.
    PythonExt,
    /// Language-level checks, prefixed with `LA`.
    Lang,
    /// Semantic checks, prefixed with `SM`.
    Semantic,
    /// Design compilation, prefixed with `CP`.
    Compile,
    /// Elaboration, prefixed with `EL`.
    Elaborate,
    /// Library mapping, prefixed with `LIB`.
    Library,
    /// Lint checks, prefixed with `LN`.
    Lint,
    /// User-raised messages, prefixed with `US`.
    User,
    /// Model construction and emission, prefixed with `UH`.
    Model,
}

const CODES: [(Category, &str); 12] = [
    (Category::Command, "CM"),
    (Category::Preprocess, "PP"),
    (Category::Parse, "PA"),
    (Category::PythonExt, "PY"),
    (Category::Lang, "LA"),
    (Category::Semantic, "SM"),
    (Category::Compile, "CP"),
    (Category::Elaborate, "EL"),
    (Category::Library, "LIB"),
    (Category::Lint, "LN"),
    (Category::User, "US"),
    (Category::Model, "UH"),
];

impl Category {
    /// Every category, in phase order.
    pub const ALL: [Category; 12] = [
        Category::Command,
        Category::Preprocess,
        Category::Parse,
        Category::PythonExt,
        Category::Lang,
        Category::Semantic,
        Category::Compile,
        Category::Elaborate,
        Category::Library,
        Category::Lint,
        Category::User,
        Category::Model,
    ];

    /// The width every code is padded to inside a diagnostic tag.
    pub const MAX_CODE_LEN: usize = 3;

    /// Returns the short external code for this category.
    pub fn code(self) -> &'static str {
        match self {
            Category::Command => "CM",
            Category::Preprocess => "PP",
            Category::Parse => "PA",
            Category::PythonExt => "PY",
            Category::Lang => "LA",
            Category::Semantic => "SM",
            Category::Compile => "CP",
            Category::Elaborate => "EL",
            Category::Library => "LIB",
            Category::Lint => "LN",
            Category::User => "US",
            Category::Model => "UH",
        }
    }

    /// Parses a short code, returning `None` if it is not a declared code.
    pub fn parse_code(code: &str) -> Option<Category> {
        CODES
            .iter()
            .find(|(_, c)| *c == code)
            .map(|&(category, _)| category)
    }

    /// Parses a short code, falling back to [`User`](Category::User).
    ///
    /// Category only drives grouping and statistics, so an unknown code lands
    /// in the catch-all bucket instead of failing.
    pub fn from_code(code: &str) -> Category {
        Self::parse_code(code).unwrap_or(Category::User)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
