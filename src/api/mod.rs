pub mod routes;
pub mod models;
pub mod errors;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::errors::VajraError;
use crate::pipeline::ScanPipeline;
use crate::scanner::Scanner;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ScanPipeline>,
    pub upload_dir: PathBuf,
    /// Caps concurrent scanner child processes. Requests queue on the
    /// semaphore rather than spawning unbounded children.
    pub scan_permits: Arc<Semaphore>,
    /// Server-level token; each request scans under a child of it so
    /// shutdown kills in-flight scanner processes promptly.
    pub cancel: CancellationToken,
}

pub async fn create_app_state(
    scanner: Arc<dyn Scanner>,
    upload_dir: PathBuf,
    max_concurrent_scans: usize,
) -> Result<AppState, VajraError> {
    tokio::fs::create_dir_all(&upload_dir).await?;
    Ok(AppState {
        pipeline: Arc::new(ScanPipeline::new(scanner)),
        upload_dir,
        scan_permits: Arc::new(Semaphore::new(max_concurrent_scans)),
        cancel: CancellationToken::new(),
    })
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", axum::routing::get(routes::health::health_check))
        // Legacy upload endpoint: responds with the bare finding list.
        .route("/scan", axum::routing::post(routes::scan::scan_upload))
        // Consolidated endpoint: full dashboard view model, so the browser
        // never recomputes scores on its own.
        .route(
            "/api/scan/dashboard",
            axum::routing::post(routes::scan::scan_dashboard),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
