pub mod commands;
pub mod wizard;

use clap::Parser;

pub use commands::{Commands, ScanArgs};

/// Cocoon — containerized static-analysis front end
///
/// Pick a language, point Cocoon at a codebase, and it runs the matching
/// dockerized scanner and pretty-prints the report.
#[derive(Parser, Debug)]
#[command(
    name = "cocoon",
    version,
    about = "🛡 Cocoon — run containerized security scanners without memorizing their flags",
    long_about = "Cocoon wraps dockerized static-analysis tools (Brakeman, Bandit, Semgrep)\nbehind one front end: pick a language, point it at a codebase, and get\nthe scanner's report pretty-printed.\n\nRun with no arguments for the interactive wizard."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}
