use serde::{Deserialize, Serialize};
use std::fmt;

/// Cloud platform a finding was raised against.
///
/// Values outside the known set are carried through verbatim in `Other` so
/// they still show up in finding tables, while enum-keyed aggregations skip
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Cloud {
    Aws,
    Azure,
    #[serde(untagged)]
    Other(String),
}

impl Cloud {
    pub fn as_str(&self) -> &str {
        match self {
            Cloud::Aws => "AWS",
            Cloud::Azure => "AZURE",
            Cloud::Other(raw) => raw,
        }
    }

    /// Whether this is a member of the known platform set (not a raw label).
    pub fn is_known(&self) -> bool {
        !matches!(self, Cloud::Other(_))
    }
}

impl fmt::Display for Cloud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity level for a finding, ordered from most to least severe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    #[serde(untagged)]
    Other(String),
}

impl Severity {
    /// Returns a numeric rank where lower values indicate higher severity.
    /// Critical = 0, High = 1, Medium = 2, Low = 3; raw labels rank last.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Medium => 2,
            Severity::Low => 3,
            Severity::Other(_) => 4,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Severity::Other(_))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single misconfiguration reported by the scanning engine.
///
/// Field names on the wire are PascalCase and case-sensitive; the external
/// scanner and the existing dashboard consumer both depend on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Finding {
    pub cloud: Cloud,
    pub resource: String,
    pub severity: Severity,
    /// Compliance framework/control reference. May be empty.
    #[serde(default)]
    pub compliance: String,
    /// Remediation hint. May be empty.
    #[serde(default)]
    pub fix: String,
}
