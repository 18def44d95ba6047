use serde::{Deserialize, Serialize};
use super::finding::Finding;

/// The ordered sequence of findings produced by one scanner invocation.
///
/// Immutable once parsed; serializes as the bare finding array so the wire
/// shape matches what the existing dashboard consumer expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanResult {
    findings: Vec<Finding>,
}

impl ScanResult {
    pub fn new(findings: Vec<Finding>) -> Self {
        Self { findings }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Finding> {
        self.findings.iter()
    }
}
