use super::types::VajraError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub retryable: bool,
}

impl VajraError {
    /// Classify this error to determine its type and whether a caller could
    /// reasonably retry it. Nothing in this crate retries automatically;
    /// the flag is advisory for the calling layer.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            // Retryable errors
            VajraError::ScanTimeout(_) => ErrorClassification {
                error_type: "ScanTimeoutError",
                retryable: true,
            },
            VajraError::Io(_) => ErrorClassification {
                error_type: "IoError",
                retryable: true,
            },
            VajraError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                retryable: true,
            },

            // Non-retryable errors
            VajraError::InvalidTarget(_) => ErrorClassification {
                error_type: "InvalidTargetError",
                retryable: false,
            },
            VajraError::LaunchFailure(_) => ErrorClassification {
                error_type: "LaunchFailureError",
                retryable: false,
            },
            VajraError::ScannerFailed { .. } => ErrorClassification {
                error_type: "ScannerFailedError",
                retryable: false,
            },
            VajraError::MalformedOutput(_) => ErrorClassification {
                error_type: "MalformedOutputError",
                retryable: false,
            },
            VajraError::Cancelled => ErrorClassification {
                error_type: "CancelledError",
                retryable: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_retryable() {
        let err = VajraError::ScanTimeout("exceeded 60s budget".into());
        let class = err.classify();
        assert!(class.retryable);
        assert_eq!(class.error_type, "ScanTimeoutError");
    }

    #[test]
    fn test_launch_failure_not_retryable() {
        let err = VajraError::LaunchFailure("no such executable".into());
        let class = err.classify();
        assert!(!class.retryable);
        assert_eq!(class.error_type, "LaunchFailureError");
    }

    #[test]
    fn test_scanner_failed_not_retryable() {
        let err = VajraError::ScannerFailed {
            code: 2,
            stderr: "panic".into(),
        };
        assert!(!err.classify().retryable);
    }

    #[test]
    fn test_malformed_output_not_retryable() {
        let err = VajraError::MalformedOutput("not a findings array".into());
        assert!(!err.classify().retryable);
    }

    #[test]
    fn test_cancelled_not_retryable() {
        assert!(!VajraError::Cancelled.classify().retryable);
    }

    #[test]
    fn test_invalid_target_not_retryable() {
        let err = VajraError::InvalidTarget("no file uploaded".into());
        assert!(!err.classify().retryable);
    }
}
