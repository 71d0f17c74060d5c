//! Error types for configuration loading and application.

/// Errors that can occur when loading or applying a `vdiag.toml` configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A required field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A severity value is outside the accepted vocabulary.
    #[error("invalid severity '{value}' for '{id}'")]
    InvalidSeverity {
        /// The diagnostic identifier the severity was given for.
        id: String,
        /// The rejected severity text.
        value: String,
    },

    /// A diagnostic identifier does not name a registered kind.
    #[error("unknown diagnostic '{0}'")]
    UnknownDiagnostic(String),
}
