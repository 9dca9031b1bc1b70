use thiserror::Error;

/// Errors that can abort a scan run.
///
/// A scanner that exits non-zero while still printing a report is NOT an
/// error here; the executor models that as a normal outcome with
/// `findings_reported` set.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("no scanner registered under \"{0}\" (see `cocoon list-scanners`)")]
    UnknownScanner(String),

    #[error("invalid scan request: {0}")]
    InvalidRequest(String),

    #[error("failed to pull image {image}: {detail}")]
    Pull { image: String, detail: String },

    #[error("command `{command}` failed: {detail}")]
    Execution { command: String, detail: String },
}
