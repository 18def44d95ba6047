use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::dashboard::{self, ViewModel};
use crate::errors::VajraError;
use crate::models::{RiskSummary, ScanResult};
use crate::risk;
use crate::scanner::{parse_findings, Scanner};

/// Everything one scan produces: the parsed findings, their aggregate
/// summary, and the dashboard view model. Lives for one request/response
/// cycle; nothing is cached across scans.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub result: ScanResult,
    pub summary: RiskSummary,
    pub view: ViewModel,
}

/// Runs the scan pipeline for one file: invoke the engine, decode its
/// output, aggregate, present. Strictly sequential; any failure terminates
/// the pipeline before aggregation.
pub struct ScanPipeline {
    scanner: Arc<dyn Scanner>,
}

impl ScanPipeline {
    pub fn new(scanner: Arc<dyn Scanner>) -> Self {
        Self { scanner }
    }

    /// Scan `path`. The caller owns the file and is responsible for removing
    /// it afterwards, on success and failure alike.
    pub async fn run(
        &self,
        path: &Path,
        cancel: &CancellationToken,
    ) -> Result<ScanOutcome, VajraError> {
        let started = Instant::now();

        let output = self.scanner.invoke(path, cancel).await?;

        // The engine exits nonzero when findings exist, so its stdout is
        // authoritative whenever it parses; the exit code only matters once
        // the output turns out to be unusable.
        let result = match parse_findings(&output.stdout) {
            Ok(result) => result,
            Err(parse_err) => {
                if !output.success() {
                    warn!(
                        exit_code = output.exit_code,
                        "Scanner failed without parseable output"
                    );
                    return Err(VajraError::ScannerFailed {
                        code: output.exit_code,
                        stderr: output.stderr,
                    });
                }
                return Err(parse_err);
            }
        };

        let summary = risk::aggregate(&result);
        let view = dashboard::present(&summary, &result);

        info!(
            file = %path.display(),
            total = summary.total_count,
            critical = summary.critical_count,
            score = summary.score,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Scan complete"
        );

        Ok(ScanOutcome {
            result,
            summary,
            view,
        })
    }
}
