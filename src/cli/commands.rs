use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a codebase with a containerized scanner
    Scan(ScanArgs),

    /// List the supported scanners and their flag vocabularies
    ListScanners,

    /// Show a wrapped tool's own --help output
    ToolHelp {
        /// Scanner name, e.g. "Ruby" (see list-scanners)
        scanner: String,
    },

    /// Initialize a .cocoon.toml config file in the current directory
    Init,
}

#[derive(clap::Args, Debug)]
pub struct ScanArgs {
    /// Path to the code to scan (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Scanner to run: "Ruby", "Python", or "JavaScript"
    #[arg(short, long)]
    pub scanner: String,

    /// Scan the whole codebase instead of specific files
    #[arg(long)]
    pub all: bool,

    /// Comma-separated file paths to restrict the scan to
    #[arg(long, value_delimiter = ',')]
    pub files: Vec<String>,

    /// Extra options passed to the tool verbatim
    #[arg(long, default_value = "")]
    pub options: String,

    /// Output format: "terminal" or "json" (defaults from config)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Write the JSON report to a file
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Skip pulling the scanner image before the run
    #[arg(long)]
    pub no_pull: bool,

    /// Container runtime executable (overrides config)
    #[arg(long)]
    pub runtime: Option<String>,
}
