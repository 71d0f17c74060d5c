//! Shared registry setup for every subcommand.

use std::path::Path;

use vdiag_config::{apply_config, load_config_file, Resolution};
use vdiag_diagnostics::DiagnosticRegistry;

use crate::GlobalArgs;

/// Builds the builtin registry and applies `--config` when given.
pub fn load_registry(
    global: &GlobalArgs,
) -> Result<DiagnosticRegistry, Box<dyn std::error::Error>> {
    let registry = DiagnosticRegistry::with_builtin_catalog()?;
    if let Some(ref path) = global.config {
        let config = load_config_file(Path::new(path))?;
        let mode = if global.strict {
            Resolution::Strict
        } else {
            Resolution::Lenient
        };
        let applied = apply_config(&config, &registry, mode)?;
        if !global.quiet && applied.skipped > 0 {
            eprintln!(
                "warning: skipped {} unknown diagnostic(s) in {path}",
                applied.skipped
            );
        }
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use vdiag_diagnostics::{DiagnosticKind, Severity};

    fn global(config: Option<String>, strict: bool) -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            config,
            strict,
        }
    }

    #[test]
    fn builtin_without_config() {
        let registry = load_registry(&global(None, false)).unwrap();
        assert!(registry.catalog().is_initialized());
        assert!(registry.waivers().is_empty());
    }

    #[test]
    fn applies_config_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("vdiag.toml");
        fs::write(&path, "[severity]\nPA_NOTIMESCALE_INFO = \"INFO\"\n").unwrap();
        let registry =
            load_registry(&global(Some(path.display().to_string()), false)).unwrap();
        assert_eq!(
            registry
                .catalog()
                .lookup(DiagnosticKind::PA_NOTIMESCALE_INFO)
                .severity,
            Severity::Info
        );
    }

    #[test]
    fn strict_rejects_unknown_ids() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("vdiag.toml");
        fs::write(&path, "[[waiver]]\nid = \"NO_SUCH_KIND\"\n").unwrap();
        let config = Some(path.display().to_string());
        assert!(load_registry(&global(config.clone(), true)).is_err());
        assert!(load_registry(&global(config, false)).is_ok());
    }

    #[test]
    fn missing_config_file_errors() {
        let err = load_registry(&global(Some("/nonexistent/vdiag.toml".to_string()), false));
        assert!(err.is_err());
    }
}
