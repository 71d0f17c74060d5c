//! Feeding a loaded configuration into a diagnostic registry.

use vdiag_diagnostics::{Catalog, DiagnosticKind, DiagnosticRegistry, Severity, WaiverRule};

use crate::error::ConfigError;
use crate::types::DiagnosticsConfig;

/// How [`apply_config`] treats identifiers that name no registered kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Resolution {
    /// Fail with [`ConfigError::UnknownDiagnostic`] before touching the registry.
    #[default]
    Strict,
    /// Log a warning and skip the entry.
    Lenient,
}

/// What [`apply_config`] changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AppliedConfig {
    /// Severity overrides applied.
    pub overrides: usize,
    /// Waiver rules added.
    pub waivers: usize,
    /// Macro names added to the argument-count allowlist.
    pub macros: usize,
    /// Entries skipped because their identifier did not resolve.
    pub skipped: usize,
}

/// Resolves a configuration identifier to a registered kind.
///
/// Tried in order: symbolic name (`PP_UNKNOWN_MACRO`), decimal id (`202`),
/// then a rendered tag (`[ERR:PP_:0202]` or `ERR:PP_:0202`). Returns `None`
/// if nothing matches a kind registered in `catalog`.
pub fn resolve_kind(catalog: &Catalog, id: &str) -> Option<DiagnosticKind> {
    let id = id.trim();
    if let Some(kind) = catalog.kind_by_name(id) {
        return Some(kind);
    }
    let kind = match id.parse::<u32>() {
        Ok(raw) => DiagnosticKind::from_raw(raw),
        Err(_) => Catalog::parse_kind_from_error_id_string(id)?,
    };
    catalog.contains(kind).then_some(kind)
}

/// Applies severity overrides, waivers and the macro allowlist to `registry`.
///
/// Every identifier is resolved before anything is applied, so a strict
/// failure leaves the registry untouched.
pub fn apply_config(
    config: &DiagnosticsConfig,
    registry: &DiagnosticRegistry,
    mode: Resolution,
) -> Result<AppliedConfig, ConfigError> {
    let catalog = registry.catalog();
    let mut applied = AppliedConfig::default();

    let mut unresolved = |id: &str, section: &str| -> Result<(), ConfigError> {
        match mode {
            Resolution::Strict => Err(ConfigError::UnknownDiagnostic(id.to_string())),
            Resolution::Lenient => {
                tracing::warn!(%id, section, "skipping unknown diagnostic in configuration");
                applied.skipped += 1;
                Ok(())
            }
        }
    };

    let mut overrides = Vec::with_capacity(config.severity.len());
    for (id, value) in &config.severity {
        let severity = Severity::parse_text(value).ok_or_else(|| ConfigError::InvalidSeverity {
            id: id.clone(),
            value: value.clone(),
        })?;
        match resolve_kind(catalog, id) {
            Some(kind) => overrides.push((kind, severity)),
            None => unresolved(id, "severity")?,
        }
    }

    let mut waivers = Vec::with_capacity(config.waivers.len());
    for entry in &config.waivers {
        match resolve_kind(catalog, &entry.id) {
            Some(kind) => waivers.push(WaiverRule::new(
                kind,
                entry.file.as_str(),
                entry.line,
                entry.object.as_str(),
            )),
            None => unresolved(&entry.id, "waiver")?,
        }
    }

    for (kind, severity) in overrides {
        if catalog.override_severity(kind, severity) {
            applied.overrides += 1;
        }
    }
    for rule in waivers {
        registry.waivers().add(rule);
        applied.waivers += 1;
    }
    for name in &config.macros.allow_arg_count {
        if registry.macro_args().add(name.as_str()) {
            applied.macros += 1;
        }
    }

    tracing::debug!(
        overrides = applied.overrides,
        waivers = applied.waivers,
        macros = applied.macros,
        skipped = applied.skipped,
        "diagnostic configuration applied"
    );
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;
    use vdiag_diagnostics::DiagnosticOccurrence;

    fn registry() -> DiagnosticRegistry {
        DiagnosticRegistry::with_builtin_catalog().unwrap()
    }

    #[test]
    fn resolve_by_name_decimal_and_tag() {
        let reg = registry();
        let catalog = reg.catalog();
        let expected = Some(DiagnosticKind::PP_UNKNOWN_MACRO);
        assert_eq!(resolve_kind(catalog, "PP_UNKNOWN_MACRO"), expected);
        assert_eq!(resolve_kind(catalog, "202"), expected);
        assert_eq!(resolve_kind(catalog, "[ERR:PP_:0202]"), expected);
        assert_eq!(resolve_kind(catalog, "ERR:PP_:0202"), expected);
        assert_eq!(resolve_kind(catalog, " PP_UNKNOWN_MACRO "), expected);
    }

    #[test]
    fn resolve_rejects_unregistered() {
        let reg = registry();
        let catalog = reg.catalog();
        assert_eq!(resolve_kind(catalog, "PP_NOPE"), None);
        assert_eq!(resolve_kind(catalog, "99999"), None);
        assert_eq!(resolve_kind(catalog, "[ERR:PP_:9999]"), None);
        assert_eq!(resolve_kind(catalog, ""), None);
    }

    #[test]
    fn overrides_waivers_and_macros_applied() {
        let config = load_config_from_str(
            r#"
[severity]
PA_NOTIMESCALE_INFO = "ERROR"

[[waiver]]
id = "PP_UNKNOWN_MACRO"
file = "top.sv"
line = 12

[macros]
allow_arg_count = ["UVM_INFO", "UVM_INFO"]
"#,
        )
        .unwrap();
        let reg = registry();
        let applied = apply_config(&config, &reg, Resolution::Strict).unwrap();
        assert_eq!(
            applied,
            AppliedConfig {
                overrides: 1,
                waivers: 1,
                macros: 1,
                skipped: 0,
            }
        );

        assert_eq!(
            reg.catalog().lookup(DiagnosticKind::PA_NOTIMESCALE_INFO).severity,
            Severity::Error
        );
        let waived =
            DiagnosticOccurrence::named(DiagnosticKind::PP_UNKNOWN_MACRO, "top.sv", 12, "W");
        let other_line =
            DiagnosticOccurrence::named(DiagnosticKind::PP_UNKNOWN_MACRO, "top.sv", 13, "W");
        assert!(reg.is_waived(&waived));
        assert!(!reg.is_waived(&other_line));
        assert!(reg.macro_args().contains("UVM_INFO"));
    }

    #[test]
    fn strict_mode_leaves_registry_untouched() {
        let config = load_config_from_str(
            r#"
[severity]
PA_NOTIMESCALE_INFO = "ERROR"

[[waiver]]
id = "NOT_A_KIND"
"#,
        )
        .unwrap();
        let reg = registry();
        let err = apply_config(&config, &reg, Resolution::Strict).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownDiagnostic(ref id) if id == "NOT_A_KIND"));
        assert_eq!(
            reg.catalog().lookup(DiagnosticKind::PA_NOTIMESCALE_INFO).severity,
            Severity::Warning
        );
        assert!(reg.waivers().is_empty());
    }

    #[test]
    fn lenient_mode_skips_unknown() {
        let config = load_config_from_str(
            r#"
[severity]
NOT_A_KIND = "NOTE"
"305" = "INFO"

[[waiver]]
id = "12345"
"#,
        )
        .unwrap();
        let reg = registry();
        let applied = apply_config(&config, &reg, Resolution::Lenient).unwrap();
        assert_eq!(applied.overrides, 1);
        assert_eq!(applied.skipped, 2);
        assert_eq!(applied.waivers, 0);
        assert_eq!(
            reg.catalog().lookup(DiagnosticKind::PA_NOTIMESCALE_INFO).severity,
            Severity::Info
        );
    }

    #[test]
    fn invalid_severity_in_hand_built_config() {
        let mut config = DiagnosticsConfig::default();
        config
            .severity
            .insert("PA_NOTIMESCALE_INFO".to_string(), "loud".to_string());
        let err = apply_config(&config, &registry(), Resolution::Lenient).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeverity { .. }));
    }

    #[test]
    fn tag_waiver_matches_by_kind() {
        let config = load_config_from_str(
            r#"
[[waiver]]
id = "[WRN:PA_:0305]"
"#,
        )
        .unwrap();
        let reg = registry();
        apply_config(&config, &reg, Resolution::Strict).unwrap();
        let occ = DiagnosticOccurrence::named(DiagnosticKind::PA_NOTIMESCALE_INFO, "a.sv", 1, "m");
        assert!(reg.is_waived(&occ));
    }
}
