use std::sync::Arc;

use axum::{Json, extract::State};
use quotebook_service::SyncReport;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::SyncStatusResponse;

pub async fn run_sync(State(state): State<Arc<AppState>>) -> Result<Json<SyncReport>, ApiError> {
    Ok(Json(state.service.sync().await?))
}

pub async fn sync_status(State(state): State<Arc<AppState>>) -> Json<SyncStatusResponse> {
    Json(SyncStatusResponse {
        remote_enabled: state.service.has_remote(),
        last_sync: state.service.last_sync().await,
    })
}
