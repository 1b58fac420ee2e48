use std::sync::Arc;

use anyhow::Result;
use quotebook_http::{AppState, create_router};
use quotebook_service::spawn_sync_scheduler;
use tokio_util::sync::CancellationToken;

use super::open_service;
use crate::config::Config;

pub(crate) async fn run(config: Config, port: u16, host: String) -> Result<()> {
    let service = open_service(&config).await?;
    let shutdown = CancellationToken::new();

    let scheduler = if service.has_remote() {
        Some(spawn_sync_scheduler(Arc::clone(&service), config.sync_interval, shutdown.clone()))
    } else {
        tracing::info!("QUOTEBOOK_REMOTE_URL not set, remote sync disabled");
        None
    };

    let state = Arc::new(AppState::new(service));
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let signal = shutdown.clone();
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Failed to listen for shutdown signal: {}", e);
            }
            signal.cancel();
        })
        .await?;

    shutdown.cancel();
    if let Some(handle) = scheduler {
        handle.await?;
    }
    Ok(())
}
