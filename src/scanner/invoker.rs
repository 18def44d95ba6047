use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::errors::VajraError;
use crate::utils::truncation::truncate_stderr;

/// Captured output of one scanner run. Stdout carries the findings document;
/// stderr is diagnostic only and is never fed to the parser.
#[derive(Debug, Clone)]
pub struct ScannerOutput {
    pub stdout: Vec<u8>,
    pub stderr: String,
    pub exit_code: i32,
}

impl ScannerOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Narrow seam around the scanning engine so it can be swapped (external
/// process today, in-process library or remote service later) without
/// touching parsing, aggregation, or presentation.
#[async_trait]
pub trait Scanner: Send + Sync {
    /// Run the engine against one file. Exactly one terminal outcome per
    /// invocation: output (any exit code), timeout, launch failure, or
    /// cancellation.
    async fn invoke(&self, path: &Path, cancel: &CancellationToken)
        -> Result<ScannerOutput, VajraError>;
}

/// Invokes the scanning engine as a child process:
/// `<program> <file-path>`, findings JSON on stdout.
pub struct ExternalScanner {
    program: PathBuf,
    timeout: Duration,
}

impl ExternalScanner {
    pub fn new(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }
}

#[async_trait]
impl Scanner for ExternalScanner {
    async fn invoke(
        &self,
        path: &Path,
        cancel: &CancellationToken,
    ) -> Result<ScannerOutput, VajraError> {
        debug!(program = %self.program.display(), file = %path.display(), "Spawning scanner");

        // kill_on_drop reaps the child if the output future is abandoned,
        // which is how both the timeout and the cancellation arms terminate it.
        let child = Command::new(&self.program)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                VajraError::LaunchFailure(format!(
                    "failed to start {}: {}",
                    self.program.display(),
                    e
                ))
            })?;

        let output = tokio::select! {
            _ = cancel.cancelled() => {
                warn!(program = %self.program.display(), "Scan cancelled, killing scanner");
                return Err(VajraError::Cancelled);
            }
            collected = tokio::time::timeout(self.timeout, child.wait_with_output()) => {
                collected.map_err(|_| VajraError::ScanTimeout(format!(
                    "scanner exceeded {}s budget",
                    self.timeout.as_secs()
                )))?
                .map_err(|e| VajraError::Internal(format!("failed to collect scanner output: {}", e)))?
            }
        };

        let exit_code = output.status.code().unwrap_or(-1);
        let stderr = truncate_stderr(&String::from_utf8_lossy(&output.stderr));

        debug!(
            exit_code,
            stdout_bytes = output.stdout.len(),
            "Scanner exited"
        );

        Ok(ScannerOutput {
            stdout: output.stdout,
            stderr,
            exit_code,
        })
    }
}
