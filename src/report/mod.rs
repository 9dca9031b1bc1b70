pub mod extract;
pub mod json;
pub mod terminal;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A single warning block cut out of a scanner's report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Warning {
    /// Deterministic ID (hash-based) e.g. "CCN-a1b2c3d4"
    pub id: String,

    /// The block text exactly as it appeared in the report
    pub body: String,
}

impl Warning {
    /// Generate a deterministic ID from the scanner, the block's position,
    /// and its text. Stable across runs over identical output.
    pub fn generate_id(scanner: &str, ordinal: usize, body: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(scanner.as_bytes());
        hasher.update(ordinal.to_string().as_bytes());
        hasher.update(body.as_bytes());
        let hex = format!("{:x}", hasher.finalize());
        format!("CCN-{}", &hex[..8])
    }
}

/// Sections recovered from a scanner's textual report.
///
/// Best-effort segmentation: a scanner whose output carries none of the
/// recognized markers yields an all-absent report, and the raw text stays
/// available on the surrounding [`ScanReport`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedReport {
    pub overview: Option<String>,
    pub warning_types: Option<String>,
    pub warnings: Vec<Warning>,
}

impl ParsedReport {
    /// True when no recognized section was found.
    pub fn is_empty(&self) -> bool {
        self.overview.is_none() && self.warning_types.is_none() && self.warnings.is_empty()
    }
}

/// The complete result of one scan run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Cocoon version
    pub version: String,

    /// When the scan was performed
    pub timestamp: String,

    /// Scanner display name, e.g. "Ruby"
    pub scanner: String,

    /// Container image that performed the scan
    pub image: String,

    /// Path that was mounted and scanned
    pub scan_path: String,

    /// The exact command line that was executed
    pub command: String,

    /// Duration in milliseconds
    pub duration_ms: u64,

    /// True when the tool exited non-zero but still produced a report
    pub findings_reported: bool,

    /// Sections recovered from the scanner's output
    pub report: ParsedReport,

    /// Raw scanner stdout; retained even when sectioning recognizes nothing
    pub raw_output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_ids_are_deterministic() {
        let a = Warning::generate_id("Ruby", 0, "File: user.rb");
        let b = Warning::generate_id("Ruby", 0, "File: user.rb");
        assert_eq!(a, b);
        assert!(a.starts_with("CCN-"));
        assert_eq!(a.len(), "CCN-".len() + 8);
    }

    #[test]
    fn test_warning_ids_differ_by_position() {
        let a = Warning::generate_id("Ruby", 0, "File: user.rb");
        let b = Warning::generate_id("Ruby", 1, "File: user.rb");
        assert_ne!(a, b);
    }

    #[test]
    fn test_warning_ids_differ_by_scanner() {
        let a = Warning::generate_id("Ruby", 0, "File: user.rb");
        let b = Warning::generate_id("Python", 0, "File: user.rb");
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_parsed_report() {
        assert!(ParsedReport::default().is_empty());
    }
}
