//! Diagnostic classification and suppression for the vdiag compiler stages.
//!
//! Every stage raises [`DiagnosticOccurrence`]s. This crate decides what they
//! mean and whether they are reported:
//!
//! - the [`Catalog`] maps each [`DiagnosticKind`] to its [`Severity`],
//!   [`Category`] and message templates, loaded from the builtin
//!   declarative table, with runtime severity overrides;
//! - the [`WaiverTable`] suppresses occurrences by kind, file, line and object;
//! - the [`MacroArgAllowlist`] exempts macros from argument-count checks;
//! - [`DiagnosticTag`] encodes kinds into rendered text and [`tag::decode`]
//!   recovers them from saved logs.
//!
//! The three stores are bundled per run in a [`DiagnosticRegistry`], and the
//! thread-safe [`DiagnosticSink`] collects what survives.

#![warn(missing_docs)]

pub mod builtin;
pub mod catalog;
pub mod category;
pub mod diagnostic;
pub mod kind;
pub mod macro_args;
pub mod occurrence;
pub mod registry;
pub mod severity;
pub mod sink;
pub mod subject;
pub mod tag;
pub mod waiver;

pub use catalog::{Catalog, CatalogEntry, CatalogError, KindSpec};
pub use category::Category;
pub use diagnostic::{Diagnostic, RelatedNote};
pub use kind::DiagnosticKind;
pub use macro_args::MacroArgAllowlist;
pub use occurrence::{CrossReference, DiagnosticOccurrence};
pub use registry::DiagnosticRegistry;
pub use severity::Severity;
pub use sink::DiagnosticSink;
pub use subject::{ReferenceForm, ReferenceSource, SubjectResolver};
pub use tag::DiagnosticTag;
pub use waiver::{WaiverRule, WaiverTable};
