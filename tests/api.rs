use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::StatusCode;
use http_body_util::BodyExt;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use vajrascan::api::{build_router, create_app_state, AppState};
use vajrascan::errors::VajraError;
use vajrascan::scanner::{Scanner, ScannerOutput};

const BOUNDARY: &str = "vajrascan-test-boundary";

/// Canned scanner so API tests never spawn a real child process.
struct StubScanner {
    stdout: &'static [u8],
    stderr: &'static str,
    exit_code: i32,
}

#[async_trait]
impl Scanner for StubScanner {
    async fn invoke(
        &self,
        path: &Path,
        _cancel: &CancellationToken,
    ) -> Result<ScannerOutput, VajraError> {
        // The upload must exist while the scanner runs.
        assert!(path.exists(), "uploaded file missing during invocation");
        Ok(ScannerOutput {
            stdout: self.stdout.to_vec(),
            stderr: self.stderr.to_string(),
            exit_code: self.exit_code,
        })
    }
}

async fn test_state(stub: StubScanner, upload_dir: &Path) -> AppState {
    create_app_state(Arc::new(stub), upload_dir.to_path_buf(), 2)
        .await
        .unwrap()
}

fn multipart_request(uri: &str, field: &str, content: &str) -> axum::http::Request<Body> {
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"main.tf\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n\
         {content}\r\n\
         --{BOUNDARY}--\r\n"
    );
    axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn response_json(response: axum::http::Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("JSON parse error: {}. Body: {:?}", e, String::from_utf8_lossy(&bytes)))
}

fn upload_dir_is_empty(dir: &Path) -> bool {
    std::fs::read_dir(dir).unwrap().next().is_none()
}

#[tokio::test]
async fn test_health_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(
        StubScanner { stdout: b"[]", stderr: "", exit_code: 0 },
        dir.path(),
    )
    .await;

    let req = axum::http::Request::builder()
        .method("GET")
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let response = build_router(state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "vajrascan");
}

#[tokio::test]
async fn test_scan_returns_raw_finding_list() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(
        StubScanner {
            stdout: br#"[{"Cloud": "AWS", "Resource": "s3-bucket-1", "Severity": "CRITICAL",
                          "Compliance": "CIS-1.1", "Fix": "enable encryption"}]"#,
            stderr: "",
            exit_code: 1,
        },
        dir.path(),
    )
    .await;

    let req = multipart_request("/scan", "tfFile", "resource {}\n");
    let response = build_router(state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    // Wire compatibility: a bare array with PascalCase fields, no envelope.
    let findings = body.as_array().expect("expected raw finding array");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["Cloud"], "AWS");
    assert_eq!(findings[0]["Resource"], "s3-bucket-1");
    assert_eq!(findings[0]["Severity"], "CRITICAL");

    assert!(upload_dir_is_empty(dir.path()));
}

#[tokio::test]
async fn test_dashboard_returns_view_model() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(
        StubScanner {
            stdout: br#"[{"Cloud": "AWS", "Resource": "s3-bucket-1", "Severity": "CRITICAL",
                          "Compliance": "CIS-1.1", "Fix": "enable encryption"}]"#,
            stderr: "",
            exit_code: 1,
        },
        dir.path(),
    )
    .await;

    let req = multipart_request("/api/scan/dashboard", "tfFile", "resource {}\n");
    let response = build_router(state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["score"], 85);
    assert_eq!(body["score_band"], "good");
    assert_eq!(body["critical_count"], 1);
    assert_eq!(body["clouds_label"], "AWS");
    assert_eq!(body["rows"].as_array().unwrap().len(), 1);
    assert_eq!(
        body["severity_chart"]["labels"],
        serde_json::json!(["CRITICAL", "HIGH", "MEDIUM", "LOW"])
    );
    assert_eq!(
        body["severity_chart"]["counts"],
        serde_json::json!([1, 0, 0, 0])
    );
    assert_eq!(body["cloud_chart"]["counts"], serde_json::json!([1, 0]));
}

#[tokio::test]
async fn test_clean_scan_returns_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(
        StubScanner { stdout: b"[]", stderr: "", exit_code: 0 },
        dir.path(),
    )
    .await;

    let req = multipart_request("/scan", "tfFile", "resource {}\n");
    let response = build_router(state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_missing_file_field_is_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(
        StubScanner { stdout: b"[]", stderr: "", exit_code: 0 },
        dir.path(),
    )
    .await;

    let req = multipart_request("/scan", "wrongField", "resource {}\n");
    let response = build_router(state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("no file uploaded"));
}

#[tokio::test]
async fn test_scanner_failure_reports_error_and_removes_upload() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(
        StubScanner {
            stdout: b"",
            stderr: "ParserError: unexpected token",
            exit_code: 1,
        },
        dir.path(),
    )
    .await;

    let req = multipart_request("/scan", "tfFile", "not hcl at all");
    let response = build_router(state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = response_json(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("code 1"));
    assert!(message.contains("ParserError"));

    // The upload is removed on failure paths too.
    assert!(upload_dir_is_empty(dir.path()));
}

#[tokio::test]
async fn test_malformed_output_distinct_from_scanner_failure() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(
        StubScanner {
            stdout: b"warning: something\n",
            stderr: "",
            exit_code: 0,
        },
        dir.path(),
    )
    .await;

    let req = multipart_request("/scan", "tfFile", "resource {}\n");
    let response = build_router(state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = response_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Malformed scanner output"));
    assert!(upload_dir_is_empty(dir.path()));
}
