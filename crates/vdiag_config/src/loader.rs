//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::DiagnosticsConfig;
use std::path::Path;
use vdiag_diagnostics::Severity;

/// The configuration file looked up by [`load_config`].
pub const CONFIG_FILE_NAME: &str = "vdiag.toml";

/// Loads and validates `<project_dir>/vdiag.toml`.
pub fn load_config(project_dir: &Path) -> Result<DiagnosticsConfig, ConfigError> {
    load_config_file(&project_dir.join(CONFIG_FILE_NAME))
}

/// Loads and validates a configuration file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<DiagnosticsConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), "loading diagnostic configuration");
    load_config_from_str(&content)
}

/// Parses and validates a `vdiag.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<DiagnosticsConfig, ConfigError> {
    let config: DiagnosticsConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks field presence and the severity vocabulary.
///
/// Diagnostic identifiers are not checked here: that needs a catalog and
/// happens in [`apply_config`](crate::apply_config).
fn validate_config(config: &DiagnosticsConfig) -> Result<(), ConfigError> {
    for (id, value) in &config.severity {
        if Severity::parse_text(value).is_none() {
            return Err(ConfigError::InvalidSeverity {
                id: id.clone(),
                value: value.clone(),
            });
        }
    }
    for (index, waiver) in config.waivers.iter().enumerate() {
        if waiver.id.trim().is_empty() {
            return Err(ConfigError::MissingField(format!("waiver[{index}].id")));
        }
    }
    if config.macros.allow_arg_count.iter().any(|name| name.is_empty()) {
        return Err(ConfigError::MissingField(
            "macros.allow_arg_count entry".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml = r#"
[severity]
PA_NOTIMESCALE_INFO = "ERROR"
"[WRN:CP_:0410]" = "NOTE"

[[waiver]]
id = "PP_UNKNOWN_MACRO"
file = "top.sv"
line = 12
object = "WIDTH"

[[waiver]]
id = "305"
file = "legacy.v"

[macros]
allow_arg_count = ["UVM_INFO"]
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.severity.len(), 2);
        assert_eq!(config.severity["PA_NOTIMESCALE_INFO"], "ERROR");
        assert_eq!(config.waivers.len(), 2);
        assert_eq!(config.waivers[0].line, 12);
        assert_eq!(config.waivers[1].object, "");
        assert_eq!(config.macros.allow_arg_count, vec!["UVM_INFO"]);
    }

    #[test]
    fn legacy_severity_spelling_accepted() {
        let toml = r#"
[severity]
PA_NOTIMESCALE_INFO = "WARNI"
"#;
        assert!(load_config_from_str(toml).is_ok());
    }

    #[test]
    fn invalid_severity_errors() {
        let toml = r#"
[severity]
PA_NOTIMESCALE_INFO = "warn"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeverity { .. }));
    }

    #[test]
    fn missing_waiver_id_errors() {
        let toml = r#"
[[waiver]]
id = ""
file = "top.sv"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(ref f) if f == "waiver[0].id"));
    }

    #[test]
    fn waiver_without_id_is_parse_error() {
        let toml = r#"
[[waiver]]
file = "top.sv"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_config_from_str("this is not valid toml {{{}}}").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_from_project_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[macros]\nallow_arg_count = \"M\"\n",
        )
        .unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.macros.allow_arg_count, vec!["M"]);
    }

    #[test]
    fn io_error_from_nonexistent_dir() {
        let err = load_config(Path::new("/nonexistent/dir")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
