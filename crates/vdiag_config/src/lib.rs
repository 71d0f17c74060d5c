//! Parsing and application of `vdiag.toml` diagnostic configuration.
//!
//! This crate reads severity overrides, waiver rules and the macro
//! argument-count allowlist into a strongly-typed [`DiagnosticsConfig`], and
//! [`apply_config`] feeds them into a run's
//! [`DiagnosticRegistry`](vdiag_diagnostics::DiagnosticRegistry).

#![warn(missing_docs)]

pub mod apply;
pub mod error;
pub mod loader;
pub mod types;

pub use apply::{apply_config, resolve_kind, AppliedConfig, Resolution};
pub use error::ConfigError;
pub use loader::{load_config, load_config_file, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
