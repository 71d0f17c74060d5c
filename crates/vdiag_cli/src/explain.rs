//! `vdiag explain`: show one catalog entry.

use vdiag_config::resolve_kind;
use vdiag_diagnostics::CatalogEntry;

use crate::setup::load_registry;
use crate::GlobalArgs;

/// Runs the `vdiag explain` command.
///
/// Returns exit code 1 if `id` names no registered diagnostic.
pub fn run(id: &str, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let registry = load_registry(global)?;
    let catalog = registry.catalog();
    match resolve_kind(catalog, id).and_then(|kind| catalog.get(kind)) {
        Some(entry) => {
            println!("{}", describe(&entry));
            Ok(0)
        }
        None => {
            eprintln!("error: unknown diagnostic '{id}'");
            Ok(1)
        }
    }
}

fn describe(entry: &CatalogEntry) -> String {
    let mut out = format!(
        "{} {}\n  id:       {}\n  severity: {}\n  category: {}\n  message:  {}",
        entry.tag(),
        entry.name,
        entry.kind,
        entry.severity,
        entry.category,
        entry.message,
    );
    if let Some(xref) = entry.cross_reference {
        out.push_str(&format!("\n  related:  {xref}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use vdiag_diagnostics::{DiagnosticKind, DiagnosticRegistry};

    #[test]
    fn describe_entry_with_cross_reference() {
        let registry = DiagnosticRegistry::with_builtin_catalog().unwrap();
        let entry = registry
            .catalog()
            .lookup(DiagnosticKind::PP_MULTIPLY_DEFINED_MACRO);
        let text = describe(&entry);
        assert!(text.starts_with(&format!("{} PP_MULTIPLY_DEFINED_MACRO\n", entry.tag())));
        assert!(text.contains(&format!("  id:       {}\n", entry.kind)));
        assert!(text.contains("  related:  "));
    }

    #[test]
    fn describe_entry_without_cross_reference() {
        let registry = DiagnosticRegistry::with_builtin_catalog().unwrap();
        let entry = registry.catalog().lookup(DiagnosticKind::PA_NOTIMESCALE_INFO);
        let text = describe(&entry);
        assert!(text.starts_with("[WRN:PA_:0305] PA_NOTIMESCALE_INFO"));
        assert!(text.contains("  severity: warning"));
        assert!(!text.contains("related"));
    }

    #[test]
    fn unknown_id_exit_code() {
        let global = GlobalArgs {
            quiet: true,
            config: None,
            strict: false,
        };
        assert_eq!(run("NOT_A_KIND", &global).unwrap(), 1);
        assert_eq!(run("305", &global).unwrap(), 0);
    }
}
