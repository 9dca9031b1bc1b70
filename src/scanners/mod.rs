use comfy_table::{presets::UTF8_FULL, Table};

use crate::error::ScanError;

/// Placeholder token replaced by the caller-supplied extra options.
pub const OPTS: &str = "{opts}";

/// Placeholder token replaced by the space-joined file list.
pub const FILES: &str = "{files}";

/// A containerized scanner known to Cocoon.
///
/// Command templates are registry data, not logic: token slices carrying
/// `{opts}` and `{files}` placeholders. Supporting another tool means
/// adding one entry to [`REGISTRY`]; the builder and executor stay
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerSpec {
    /// Display name used for lookup (case-sensitive), e.g. "Ruby"
    pub name: &'static str,

    /// The wrapped tool, e.g. "Brakeman"
    pub tool: &'static str,

    /// Container image reference
    pub image: &'static str,

    /// Fixed in-container mount point for the scanned tree
    pub mount_target: &'static str,

    /// Tool arguments for a whole-codebase scan
    pub whole_tree_args: &'static [&'static str],

    /// Tool arguments for a scan restricted to specific files
    pub file_list_args: &'static [&'static str],

    /// Arguments that print the tool's own help text
    pub help_args: &'static [&'static str],
}

impl std::fmt::Display for ScannerSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.tool)
    }
}

/// Every scanner Cocoon can run, keyed by language display name.
pub const REGISTRY: &[ScannerSpec] = &[
    ScannerSpec {
        name: "Ruby",
        tool: "Brakeman",
        image: "presidentbeef/brakeman",
        mount_target: "/code",
        whole_tree_args: &["--quiet", OPTS],
        file_list_args: &["--quiet", OPTS, "--only-files", FILES],
        help_args: &["--help"],
    },
    ScannerSpec {
        name: "Python",
        tool: "Bandit",
        image: "ghcr.io/pycqa/bandit/bandit",
        mount_target: "/code",
        whole_tree_args: &["-r", ".", OPTS],
        file_list_args: &[OPTS, FILES],
        help_args: &["--help"],
    },
    ScannerSpec {
        name: "JavaScript",
        tool: "Semgrep",
        image: "semgrep/semgrep",
        mount_target: "/code",
        whole_tree_args: &["--config", "auto", OPTS],
        file_list_args: &["--config", "auto", "--include", FILES, OPTS],
        help_args: &["--help"],
    },
];

/// Look up a scanner by display name. Case-sensitive exact match.
pub fn lookup(name: &str) -> Result<&'static ScannerSpec, ScanError> {
    REGISTRY
        .iter()
        .find(|spec| spec.name == name)
        .ok_or_else(|| ScanError::UnknownScanner(name.to_string()))
}

/// Print the scanner catalogue as a table.
pub fn list_scanners() {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Name", "Tool", "Image", "Whole-tree flags", "File-list flags"]);

    for spec in REGISTRY {
        table.add_row(vec![
            spec.name.to_string(),
            spec.tool.to_string(),
            spec.image.to_string(),
            spec.whole_tree_args.join(" "),
            spec.file_list_args.join(" "),
        ]);
    }

    println!();
    println!("🛡 Cocoon — Supported Scanners");
    println!("{table}");
    println!();
    println!("  Run `cocoon scan <path> --scanner <name>` to scan a project");
    println!("  Run `cocoon tool-help <name>` to see the underlying tool's options");
    println!();
}
