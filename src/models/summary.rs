use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use super::finding::{Cloud, Severity};

/// Aggregated counts and score derived from one [`ScanResult`].
///
/// Recomputed from scratch on every scan; never updated in place. Both
/// histograms always carry every known enum key, zeroed when absent, so
/// consumers never need to treat a missing key as zero themselves.
///
/// [`ScanResult`]: super::scan_result::ScanResult
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    pub total_count: usize,
    pub critical_count: usize,
    /// Health score in [0, 100]; higher is safer.
    pub score: u8,
    pub severity_histogram: HashMap<Severity, usize>,
    pub cloud_histogram: HashMap<Cloud, usize>,
    /// Distinct cloud labels observed, in first-seen order. Unrecognized
    /// labels are included here even though the histogram skips them.
    pub clouds_present: Vec<Cloud>,
}
