//! `vdiag list`: browse the catalog.

use vdiag_diagnostics::{CatalogEntry, Category};

use crate::setup::load_registry;
use crate::{GlobalArgs, ListArgs, ReportFormat};

/// Runs the `vdiag list` command.
pub fn run(args: &ListArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let registry = load_registry(global)?;
    let catalog = registry.catalog();
    let entries = match args.category {
        Some(ref code) => {
            let category = Category::parse_code(&code.to_ascii_uppercase())
                .ok_or_else(|| format!("unknown category code '{code}'"))?;
            catalog.by_category(category)
        }
        None => catalog.entries(),
    };

    match args.format {
        ReportFormat::Text => {
            for entry in &entries {
                println!("{}", list_line(entry));
            }
            if !global.quiet {
                eprintln!("   {} diagnostic kind(s)", entries.len());
            }
        }
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
    }
    Ok(0)
}

fn list_line(entry: &CatalogEntry) -> String {
    format!("{} {:<40} {}", entry.tag(), entry.name, entry.message)
}
