use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::api;
use crate::cli::commands::ServeArgs;
use crate::errors::VajraError;
use crate::scanner::ExternalScanner;

pub async fn handle_serve(args: ServeArgs) -> Result<(), VajraError> {
    info!(host = %args.host, port = args.port, scanner = %args.scanner, "Starting scan server");

    let scanner = Arc::new(ExternalScanner::new(
        &args.scanner,
        Duration::from_secs(args.timeout),
    ));
    let state = api::create_app_state(scanner, args.upload_dir.into(), args.workers).await?;

    // Shutdown cancels in-flight scans, which kills their child processes.
    let cancel = state.cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown requested");
            cancel.cancel();
        }
    });

    let shutdown = state.cancel.clone();
    let app = api::build_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| VajraError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
