//! Marker-based sectioning of scanner reports.
//!
//! Tailored to the Brakeman-style text format. One regex pass locates
//! every marker; sections are slices between marker positions. Output
//! from a tool that uses a different shape falls through to an empty
//! report instead of an error, with the raw text kept upstream.

use regex::Regex;

use crate::report::{ParsedReport, Warning};

const OVERVIEW: &str = "== Overview ==";
const WARNING_TYPES: &str = "== Warning Types ==";
const WARNINGS: &str = "== Warnings ==";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerKind {
    Overview,
    WarningTypes,
    Warnings,
    File,
}

struct Marker {
    kind: MarkerKind,
    start: usize,
}

fn markers(text: &str) -> Vec<Marker> {
    let pattern = Regex::new(&format!("{OVERVIEW}|{WARNING_TYPES}|{WARNINGS}|File:")).unwrap();

    pattern
        .find_iter(text)
        .map(|m| {
            let kind = match m.as_str() {
                OVERVIEW => MarkerKind::Overview,
                WARNING_TYPES => MarkerKind::WarningTypes,
                WARNINGS => MarkerKind::Warnings,
                _ => MarkerKind::File,
            };
            Marker {
                kind,
                start: m.start(),
            }
        })
        .collect()
}

/// Partition raw scanner output into an overview, a warning-types block,
/// and individual warning blocks. Absent markers mean absent sections,
/// never an error.
pub fn extract(raw: &str, scanner: &str) -> ParsedReport {
    let marks = markers(raw);

    // Overview: up to the next "== Warning Types ==", or end of text.
    let overview = marks
        .iter()
        .find(|m| m.kind == MarkerKind::Overview)
        .map(|m| {
            let end = marks
                .iter()
                .find(|n| n.kind == MarkerKind::WarningTypes && n.start > m.start)
                .map_or(raw.len(), |n| n.start);
            raw[m.start..end].to_string()
        });

    // Warning types: up to the next line opening with "==", or end of text.
    let warning_types = marks
        .iter()
        .find(|m| m.kind == MarkerKind::WarningTypes)
        .map(|m| {
            let after = m.start + WARNING_TYPES.len();
            let end = raw[after..].find("\n==").map_or(raw.len(), |rel| after + rel);
            raw[m.start..end].to_string()
        });

    // Warnings: every block headed by "== Warnings ==" or "File:", cut at
    // the next "File:", the next "== Overview ==", or end of text.
    let mut warnings = Vec::new();
    for (idx, m) in marks.iter().enumerate() {
        if !matches!(m.kind, MarkerKind::Warnings | MarkerKind::File) {
            continue;
        }
        let end = marks[idx + 1..]
            .iter()
            .find(|n| matches!(n.kind, MarkerKind::File | MarkerKind::Overview))
            .map_or(raw.len(), |n| n.start);
        let body = raw[m.start..end].to_string();
        let id = Warning::generate_id(scanner, warnings.len(), &body);
        warnings.push(Warning { id, body });
    }

    ParsedReport {
        overview,
        warning_types,
        warnings,
    }
}
