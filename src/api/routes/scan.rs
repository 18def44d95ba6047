use std::path::PathBuf;

use axum::extract::{Multipart, State};
use axum::Json;
use tracing::warn;
use uuid::Uuid;

use crate::api::AppState;
use crate::dashboard::ViewModel;
use crate::errors::VajraError;
use crate::models::ScanResult;
use crate::pipeline::ScanOutcome;

/// Upload form field carrying the IaC file. Fixed by the existing frontend.
const UPLOAD_FIELD: &str = "tfFile";

/// Legacy scan endpoint. Responds with the bare ordered finding list; the
/// existing consumer expects the raw array, not an envelope.
pub async fn scan_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ScanResult>, VajraError> {
    let outcome = run_upload_scan(&state, multipart).await?;
    Ok(Json(outcome.result))
}

/// Consolidated scan endpoint. Responds with the full dashboard view model
/// so the rendering layer only swaps it in.
pub async fn scan_dashboard(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ViewModel>, VajraError> {
    let outcome = run_upload_scan(&state, multipart).await?;
    Ok(Json(outcome.view))
}

/// Persist the uploaded file, run the pipeline under an admission permit,
/// and remove the file on every exit path.
async fn run_upload_scan(
    state: &AppState,
    multipart: Multipart,
) -> Result<ScanOutcome, VajraError> {
    let upload_path = save_upload(state, multipart).await?;

    let permit = state
        .scan_permits
        .clone()
        .acquire_owned()
        .await
        .map_err(|_| VajraError::Internal("scan queue closed".into()))?;

    let cancel = state.cancel.child_token();
    let outcome = state.pipeline.run(&upload_path, &cancel).await;
    drop(permit);

    if let Err(e) = tokio::fs::remove_file(&upload_path).await {
        warn!(file = %upload_path.display(), error = %e, "Failed to remove uploaded file");
    }

    outcome
}

/// Pull the IaC file out of the multipart body and write it under the
/// upload directory with a fresh uuid name.
async fn save_upload(state: &AppState, mut multipart: Multipart) -> Result<PathBuf, VajraError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| VajraError::InvalidTarget(format!("invalid multipart body: {}", e)))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| VajraError::InvalidTarget(format!("failed to read upload: {}", e)))?;

        let upload_path = state.upload_dir.join(format!("{}.tf", Uuid::new_v4()));
        tokio::fs::write(&upload_path, &bytes).await?;
        return Ok(upload_path);
    }

    Err(VajraError::InvalidTarget("no file uploaded".into()))
}
