//! vdiag CLI: inspection tooling for the vdiag diagnostic catalog.
//!
//! Provides `vdiag triage` for re-classifying saved compiler logs under the
//! current catalog and configuration, `vdiag explain` for looking up one
//! diagnostic kind, and `vdiag list` for browsing the catalog.

#![warn(missing_docs)]

mod explain;
mod list;
mod setup;
mod triage;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// vdiag: diagnostic catalog and log triage.
#[derive(Parser, Debug)]
#[command(name = "vdiag", version, about = "vdiag diagnostic tooling")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a `vdiag.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Fail on configuration entries naming unknown diagnostics instead of
    /// skipping them.
    #[arg(long, global = true)]
    pub strict: bool,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Re-classify the tagged lines of a compiler log.
    Triage(TriageArgs),
    /// Show the catalog entry for one diagnostic.
    Explain {
        /// Symbolic name, decimal id or tag (e.g. `PP_UNKNOWN_MACRO`,
        /// `202`, `[ERR:PP_:0202]`).
        id: String,
    },
    /// List catalog entries.
    List(ListArgs),
}

/// Arguments for the `vdiag triage` subcommand.
#[derive(Parser, Debug)]
pub struct TriageArgs {
    /// Log file to triage.
    pub log: String,

    /// Output format for surviving diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Keep lines without a diagnostic tag in the text output.
    #[arg(long)]
    pub keep_untagged: bool,
}

/// Arguments for the `vdiag list` subcommand.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only list kinds of this category code (e.g. `PP`, `LIB`).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Optional path to a configuration file.
    pub config: Option<String>,
    /// Whether unknown identifiers in the configuration are errors.
    pub strict: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    let global = GlobalArgs {
        quiet: cli.quiet,
        config: cli.config,
        strict: cli.strict,
    };

    let result = match cli.command {
        Command::Triage(ref args) => triage::run(args, &global),
        Command::Explain { ref id } => explain::run(id, &global),
        Command::List(ref args) => list::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over the flags.
fn init_tracing(quiet: bool, verbose: bool) {
    let default_level = log_level(quiet, verbose);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn log_level(quiet: bool, verbose: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, true) => "debug",
        (false, false) => "warn",
    }
}
