use thiserror::Error;

#[derive(Debug, Error)]
pub enum VajraError {
    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("Scanner could not be launched: {0}")]
    LaunchFailure(String),

    #[error("Scan timed out: {0}")]
    ScanTimeout(String),

    #[error("Scanner exited with code {code}: {stderr}")]
    ScannerFailed { code: i32, stderr: String },

    #[error("Malformed scanner output: {0}")]
    MalformedOutput(String),

    #[error("Scan cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
