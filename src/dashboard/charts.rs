use serde::{Deserialize, Serialize};

// Palette shared with the dashboard frontend.
pub const RED: &str = "#ef4444";
pub const AMBER: &str = "#f59e0b";
pub const BLUE: &str = "#3b82f6";
pub const GREEN: &str = "#10b981";

/// Fixed label order of the severity doughnut chart.
pub const SEVERITY_CHART_LABELS: [&str; 4] = ["CRITICAL", "HIGH", "MEDIUM", "LOW"];
pub const SEVERITY_CHART_COLORS: [&str; 4] = [RED, AMBER, BLUE, GREEN];

/// Fixed label order of the per-cloud bar chart.
pub const CLOUD_CHART_LABELS: [&str; 2] = ["AWS", "AZURE"];

/// Labels, counts, and per-slice colors for one chart widget. The rendering
/// layer swaps the whole dataset in on every scan; it never updates slices
/// incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub counts: Vec<usize>,
    pub colors: Vec<String>,
}
