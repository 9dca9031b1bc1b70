//! Subprocess plumbing for the container runtime.
//!
//! The exit-status policy lives entirely in this module so it can be
//! tuned per scanner later: these tools exit non-zero when they find
//! vulnerabilities, so a non-zero exit that still produced report text
//! on stdout is a completed scan, and only a non-zero exit with no
//! stdout at all is a failed run.

use std::process::Command;

use tracing::{debug, warn};

use crate::error::ScanError;
use crate::scanners::ScannerSpec;

/// Captured output of one scan subprocess.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub stdout: String,
    pub stderr: String,
    /// True when the tool exited non-zero but still produced a report
    pub findings_reported: bool,
}

/// Pull a scanner image. A failed pull aborts the run before any scan
/// is attempted.
pub fn pull(runtime: &str, image: &str) -> Result<(), ScanError> {
    let output = Command::new(runtime)
        .args(["pull", image])
        .output()
        .map_err(|e| ScanError::Pull {
            image: image.to_string(),
            detail: e.to_string(),
        })?;

    if output.status.success() {
        debug!("Pulled {}", image);
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    Err(ScanError::Pull {
        image: image.to_string(),
        detail: format!("{} ({})", stderr.trim(), output.status),
    })
}

/// Run a built scan command line through the shell, capturing stdout and
/// stderr in full. Outputs are bounded by scan size, so buffering them
/// in memory is fine; nothing is streamed.
pub fn run(command: &str) -> Result<ScanOutcome, ScanError> {
    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .output()
        .map_err(|e| ScanError::Execution {
            command: command.to_string(),
            detail: e.to_string(),
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if output.status.success() {
        return Ok(ScanOutcome {
            stdout,
            stderr,
            findings_reported: false,
        });
    }

    if stdout.is_empty() {
        return Err(ScanError::Execution {
            command: command.to_string(),
            detail: format!("{} with no output: {}", output.status, stderr.trim()),
        });
    }

    Ok(ScanOutcome {
        stdout,
        stderr,
        findings_reported: true,
    })
}

/// Fetch the wrapped tool's own help text by running its image with the
/// registry's help arguments.
pub fn help(runtime: &str, spec: &ScannerSpec) -> Result<String, ScanError> {
    let output = Command::new(runtime)
        .args(["run", "--rm", spec.image])
        .args(spec.help_args)
        .output()
        .map_err(|e| ScanError::Execution {
            command: format!("{} run --rm {} {}", runtime, spec.image, spec.help_args.join(" ")),
            detail: e.to_string(),
        })?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        warn!("Help stderr: {}", stderr.trim());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_exit_is_not_findings() {
        let outcome = run("printf 'all clear'").unwrap();
        assert!(!outcome.findings_reported);
        assert_eq!(outcome.stdout, "all clear");
    }

    #[test]
    fn test_nonzero_exit_with_stdout_reports_findings() {
        let outcome = run("printf 'SQL Injection in user.rb'; exit 1").unwrap();
        assert!(outcome.findings_reported);
        assert_eq!(outcome.stdout, "SQL Injection in user.rb");
    }

    #[test]
    fn test_stdout_preserved_byte_for_byte() {
        let outcome = run("printf 'line one\\nline two\\n'; exit 3").unwrap();
        assert_eq!(outcome.stdout, "line one\nline two\n");
    }

    #[test]
    fn test_nonzero_exit_without_stdout_is_failure() {
        let err = run("exit 1").unwrap_err();
        assert!(matches!(err, ScanError::Execution { .. }));
    }

    #[test]
    fn test_stderr_alone_is_not_failure() {
        let outcome = run("printf 'deprecation warning' >&2; printf 'report'").unwrap();
        assert!(!outcome.findings_reported);
        assert_eq!(outcome.stdout, "report");
        assert_eq!(outcome.stderr, "deprecation warning");
    }

    #[test]
    fn test_stderr_captured_alongside_findings() {
        let outcome = run("printf 'noise' >&2; printf 'body'; exit 1").unwrap();
        assert!(outcome.findings_reported);
        assert_eq!(outcome.stderr, "noise");
    }

    #[test]
    fn test_pull_with_missing_runtime_fails() {
        let err = pull("cocoon-no-such-runtime", "some/image").unwrap_err();
        assert!(matches!(err, ScanError::Pull { image, .. } if image == "some/image"));
    }
}
