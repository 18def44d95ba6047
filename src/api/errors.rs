use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use crate::errors::VajraError;

impl IntoResponse for VajraError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            VajraError::InvalidTarget(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            VajraError::ScanTimeout(_) => (StatusCode::GATEWAY_TIMEOUT, self.to_string()),
            VajraError::LaunchFailure(_)
            | VajraError::ScannerFailed { .. }
            | VajraError::MalformedOutput(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        (status, Json(json!({"error": message}))).into_response()
    }
}
