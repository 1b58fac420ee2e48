//! JSON file export and import.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use quotebook_service::ImportReport;

use crate::AppState;
use crate::api_error::ApiError;

/// Serves the store as a downloadable `quotes.json`.
pub async fn export_quotes(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let file = state.service.export().await?;
    let disposition = format!("attachment; filename=\"{}\"", file.file_name);
    let headers = [
        (header::CONTENT_TYPE, file.content_type.to_owned()),
        (header::CONTENT_DISPOSITION, disposition),
    ];
    Ok((headers, file.bytes).into_response())
}

/// Accepts the raw file body. Invalid JSON or a non-array is a 400 and
/// nothing is merged.
pub async fn import_quotes(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ImportReport>, ApiError> {
    Ok(Json(state.service.import(&body).await?))
}
