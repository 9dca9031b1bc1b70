pub mod command;
pub mod executor;

use std::time::Instant;

use tracing::{info, warn};

use crate::error::ScanError;
use crate::report::{extract, ScanReport};
use crate::scanners::ScannerSpec;

/// Parameters for a single scan, gathered from the wizard or the CLI.
///
/// Constructed per invocation, consumed by one pipeline run, never
/// persisted. There is no cross-run state to keep consistent.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub scanner: &'static ScannerSpec,

    /// Path to the code to scan, bind-mounted into the container.
    /// Only non-emptiness is validated here; a missing or unreadable
    /// directory surfaces as an execution failure from the runtime.
    pub code_path: String,

    /// Scan the whole mounted tree, ignoring `file_list`
    pub scan_all: bool,

    /// Files to restrict the scan to; required when `scan_all` is false
    pub file_list: Vec<String>,

    /// Extra tool options appended verbatim
    pub extra_args: String,
}

impl ScanRequest {
    /// Validate and construct a request. Rejecting bad input here means
    /// the executor is never invoked for a request that could not have
    /// produced a runnable command.
    pub fn new(
        scanner: &'static ScannerSpec,
        code_path: impl Into<String>,
        scan_all: bool,
        file_list: Vec<String>,
        extra_args: impl Into<String>,
    ) -> Result<Self, ScanError> {
        let code_path = code_path.into();
        if code_path.trim().is_empty() {
            return Err(ScanError::InvalidRequest(
                "code path cannot be empty".to_string(),
            ));
        }

        let file_list: Vec<String> = file_list
            .into_iter()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();

        if !scan_all && file_list.is_empty() {
            return Err(ScanError::InvalidRequest(
                "at least one file is required when not scanning the whole codebase".to_string(),
            ));
        }

        Ok(Self {
            scanner,
            code_path,
            scan_all,
            file_list,
            extra_args: extra_args.into().trim().to_string(),
        })
    }
}

/// The scan pipeline. Strictly sequential: pull the image, build the
/// command line, run it, cut the captured output into sections.
pub struct Pipeline {
    request: ScanRequest,

    /// Container runtime executable ("docker", "podman", ...)
    runtime: String,

    skip_pull: bool,
}

impl Pipeline {
    pub fn new(request: ScanRequest, runtime: impl Into<String>, skip_pull: bool) -> Self {
        Pipeline {
            request,
            runtime: runtime.into(),
            skip_pull,
        }
    }

    /// Run the full scan pipeline and assemble the report envelope.
    pub fn run(&self) -> Result<ScanReport, ScanError> {
        let start = Instant::now();
        let scanner = self.request.scanner;

        let command = command::build(&self.request, &self.runtime)?;

        if self.skip_pull {
            info!("Skipping image pull for {}", scanner.image);
        } else {
            info!("Pulling image {} for {}...", scanner.image, scanner.name);
            executor::pull(&self.runtime, scanner.image)?;
        }

        info!(
            "Running {} scan on {}",
            scanner.name, self.request.code_path
        );
        info!("Executing command: {}", command);
        let outcome = executor::run(&command)?;

        if !outcome.stderr.trim().is_empty() {
            warn!("Scanner stderr: {}", outcome.stderr.trim());
        }
        if outcome.findings_reported {
            warn!("Scan exited non-zero but produced a report: vulnerabilities were detected");
        }

        info!("Scan completed.");
        let report = extract::extract(&outcome.stdout, scanner.name);

        Ok(ScanReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            scanner: scanner.name.to_string(),
            image: scanner.image.to_string(),
            scan_path: self.request.code_path.clone(),
            command,
            duration_ms: start.elapsed().as_millis() as u64,
            findings_reported: outcome.findings_reported,
            report,
            raw_output: outcome.stdout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanners::lookup;

    #[test]
    fn test_request_trims_file_entries() {
        let request = ScanRequest::new(
            lookup("Ruby").unwrap(),
            "/src/app",
            false,
            vec!["  a.rb ".to_string(), "".to_string(), "b.rb".to_string()],
            "",
        )
        .unwrap();
        assert_eq!(request.file_list, vec!["a.rb", "b.rb"]);
    }

    #[test]
    fn test_request_rejects_empty_code_path() {
        let err = ScanRequest::new(lookup("Ruby").unwrap(), "  ", true, vec![], "").unwrap_err();
        assert!(matches!(err, ScanError::InvalidRequest(_)));
    }

    #[test]
    fn test_request_rejects_missing_file_list() {
        let err = ScanRequest::new(
            lookup("Python").unwrap(),
            "/src/app",
            false,
            vec!["   ".to_string()],
            "",
        )
        .unwrap_err();
        assert!(matches!(err, ScanError::InvalidRequest(_)));
    }

    #[test]
    fn test_request_trims_extra_args() {
        let request =
            ScanRequest::new(lookup("Python").unwrap(), "/src/app", true, vec![], "  -ll  ")
                .unwrap();
        assert_eq!(request.extra_args, "-ll");
    }

    #[test]
    fn test_whole_tree_request_allows_leftover_file_list() {
        let request = ScanRequest::new(
            lookup("JavaScript").unwrap(),
            "/src/app",
            true,
            vec!["stale.js".to_string()],
            "",
        )
        .unwrap();
        assert!(request.scan_all);
    }
}
