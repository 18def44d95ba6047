use std::collections::HashMap;

use crate::models::{Cloud, RiskSummary, ScanResult, Severity};

/// The four recognized severities, in display order.
pub const KNOWN_SEVERITIES: [Severity; 4] = [
    Severity::Critical,
    Severity::High,
    Severity::Medium,
    Severity::Low,
];

/// The recognized cloud platforms, in display order.
pub const KNOWN_CLOUDS: [Cloud; 2] = [Cloud::Aws, Cloud::Azure];

/// Linear penalty score: start at 100, lose 5 per finding and another 10 per
/// critical finding, floored at 0. A heuristic, not a calibrated risk model;
/// the formula is a fixed contract shared with downstream consumers. Note a
/// critical finding is counted by both terms and so costs 15 points.
pub fn score(total: usize, critical: usize) -> u8 {
    (100i64 - 5 * total as i64 - 10 * critical as i64).clamp(0, 100) as u8
}

/// Derive a [`RiskSummary`] from a parsed scan. Pure and total over all
/// valid results, including the empty one (score 100, zeroed histograms).
///
/// Findings with unrecognized severity or cloud labels are counted in
/// `total_count` but in neither histogram; their cloud labels still surface
/// in `clouds_present`.
pub fn aggregate(result: &ScanResult) -> RiskSummary {
    let total_count = result.len();
    let critical_count = result
        .iter()
        .filter(|f| f.severity == Severity::Critical)
        .count();

    let mut severity_histogram: HashMap<Severity, usize> =
        KNOWN_SEVERITIES.iter().map(|s| (s.clone(), 0)).collect();
    let mut cloud_histogram: HashMap<Cloud, usize> =
        KNOWN_CLOUDS.iter().map(|c| (c.clone(), 0)).collect();
    let mut clouds_present: Vec<Cloud> = Vec::new();

    for finding in result.iter() {
        if let Some(count) = severity_histogram.get_mut(&finding.severity) {
            *count += 1;
        }
        if let Some(count) = cloud_histogram.get_mut(&finding.cloud) {
            *count += 1;
        }
        if !clouds_present.contains(&finding.cloud) {
            clouds_present.push(finding.cloud.clone());
        }
    }

    RiskSummary {
        total_count,
        critical_count,
        score: score(total_count, critical_count),
        severity_histogram,
        cloud_histogram,
        clouds_present,
    }
}
