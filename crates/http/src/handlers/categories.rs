use std::sync::Arc;

use axum::{Json, extract::State};
use quotebook_service::CategoriesView;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::SelectCategoryRequest;

pub async fn list_categories(State(state): State<Arc<AppState>>) -> Json<CategoriesView> {
    Json(state.service.categories().await)
}

pub async fn select_category(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SelectCategoryRequest>,
) -> Result<Json<CategoriesView>, ApiError> {
    state.service.select(req.category).await?;
    Ok(Json(state.service.categories().await))
}
