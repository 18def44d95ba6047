use serde::{Deserialize, Serialize};

use crate::models::{RiskSummary, ScanResult, Severity};
use crate::risk::{KNOWN_CLOUDS, KNOWN_SEVERITIES};
use super::charts::{
    ChartDataset, AMBER, BLUE, CLOUD_CHART_LABELS, GREEN, RED, SEVERITY_CHART_COLORS,
    SEVERITY_CHART_LABELS,
};

/// Banded color class for the headline score: >80 good, >50 warn, else
/// critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Good,
    Warn,
    Critical,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        if score > 80 {
            ScoreBand::Good
        } else if score > 50 {
            ScoreBand::Warn
        } else {
            ScoreBand::Critical
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ScoreBand::Good => GREEN,
            ScoreBand::Warn => AMBER,
            ScoreBand::Critical => RED,
        }
    }
}

/// One renderable row of the findings table, in scan order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub cloud: String,
    pub resource: String,
    pub severity: String,
    /// Badge color for the severity cell.
    pub severity_color: String,
    pub compliance: String,
    pub fix: String,
}

/// Everything the dashboard needs to render one scan. Derived entirely from
/// the aggregate summary plus the finding list; the rendering layer swaps a
/// whole new model in per scan and never recomputes scores itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    pub score: u8,
    pub score_band: ScoreBand,
    pub score_color: String,
    pub critical_count: usize,
    pub total_count: usize,
    /// Observed platforms joined with " / ", or "None" when the scan is clean.
    pub clouds_label: String,
    pub rows: Vec<TableRow>,
    pub severity_chart: ChartDataset,
    pub cloud_chart: ChartDataset,
}

/// Badge color for a severity cell. Amber is the default; only critical and
/// medium are styled distinctly, and LOW inherits the default.
fn severity_color(severity: &Severity) -> &'static str {
    match severity {
        Severity::Critical => RED,
        Severity::Medium => BLUE,
        _ => AMBER,
    }
}

/// Shape a [`RiskSummary`] and its source [`ScanResult`] into a [`ViewModel`].
/// Deterministic and I/O-free; calling it twice on the same inputs yields
/// identical models.
pub fn present(summary: &RiskSummary, result: &ScanResult) -> ViewModel {
    let band = ScoreBand::for_score(summary.score);

    let clouds_label = if summary.clouds_present.is_empty() {
        "None".to_string()
    } else {
        summary
            .clouds_present
            .iter()
            .map(|c| c.as_str().to_string())
            .collect::<Vec<_>>()
            .join(" / ")
    };

    let rows = result
        .iter()
        .map(|f| TableRow {
            cloud: f.cloud.to_string(),
            resource: f.resource.clone(),
            severity: f.severity.to_string(),
            severity_color: severity_color(&f.severity).to_string(),
            compliance: f.compliance.clone(),
            fix: f.fix.clone(),
        })
        .collect();

    let severity_chart = ChartDataset {
        labels: SEVERITY_CHART_LABELS.iter().map(|s| s.to_string()).collect(),
        counts: KNOWN_SEVERITIES
            .iter()
            .map(|s| summary.severity_histogram.get(s).copied().unwrap_or(0))
            .collect(),
        colors: SEVERITY_CHART_COLORS.iter().map(|c| c.to_string()).collect(),
    };

    let cloud_chart = ChartDataset {
        labels: CLOUD_CHART_LABELS.iter().map(|s| s.to_string()).collect(),
        counts: KNOWN_CLOUDS
            .iter()
            .map(|c| summary.cloud_histogram.get(c).copied().unwrap_or(0))
            .collect(),
        colors: vec![BLUE.to_string(); CLOUD_CHART_LABELS.len()],
    };

    ViewModel {
        score: summary.score,
        score_band: band,
        score_color: band.color().to_string(),
        critical_count: summary.critical_count,
        total_count: summary.total_count,
        clouds_label,
        rows,
        severity_chart,
        cloud_chart,
    }
}
