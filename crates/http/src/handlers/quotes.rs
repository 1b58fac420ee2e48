use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use quotebook_core::{Quote, QuoteError};
use quotebook_service::{AddOutcome, FilteredView, ServiceError};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::{AddQuoteRequest, CategoryQuery};

pub async fn list_quotes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CategoryQuery>,
) -> Json<FilteredView> {
    Json(state.service.filtered(query.selection()).await)
}

pub async fn random_quote(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<Quote>, ApiError> {
    state
        .service
        .random(query.selection())
        .await?
        .map(Json)
        .ok_or_else(|| ServiceError::Quote(QuoteError::EmptyCollection).into())
}

pub async fn add_quote(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddQuoteRequest>,
) -> Result<(StatusCode, Json<AddOutcome>), ApiError> {
    let outcome = state.service.add(&req.text, &req.category).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}
