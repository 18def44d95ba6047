use crate::errors::VajraError;
use crate::models::{Finding, ScanResult};

/// Decode the scanner's stdout into a [`ScanResult`].
///
/// Rejecting, not lenient: findings are security-relevant, so a record
/// missing a required field fails the whole batch rather than being dropped
/// silently. Empty output is a distinct failure from a structurally valid
/// empty array: the first means the engine produced no usable payload, the
/// second means it ran and found nothing.
pub fn parse_findings(raw: &[u8]) -> Result<ScanResult, VajraError> {
    if raw.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(VajraError::MalformedOutput(
            "scanner produced no output".into(),
        ));
    }

    let findings: Vec<Finding> = serde_json::from_slice(raw)
        .map_err(|e| VajraError::MalformedOutput(format!("invalid findings document: {}", e)))?;

    for (index, finding) in findings.iter().enumerate() {
        if finding.resource.trim().is_empty() {
            return Err(VajraError::MalformedOutput(format!(
                "finding {} has an empty Resource",
                index
            )));
        }
    }

    Ok(ScanResult::new(findings))
}
