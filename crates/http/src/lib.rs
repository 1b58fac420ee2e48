//! HTTP API server for quotebook.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod api_types;
mod handlers;
mod query_types;

use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{get, post, put},
};
use quotebook_service::QuoteService;
use tower_http::cors::CorsLayer;

pub use api_types::{SyncStatusResponse, VersionResponse};
pub use query_types::{AddQuoteRequest, CategoryQuery, SelectCategoryRequest};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Owns the quote store; every handler goes through it.
    pub service: Arc<QuoteService>,
}

impl AppState {
    #[must_use]
    pub fn new(service: Arc<QuoteService>) -> Self {
        Self { service }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/quotes", get(handlers::quotes::list_quotes).post(handlers::quotes::add_quote))
        .route("/api/quotes/random", get(handlers::quotes::random_quote))
        .route("/api/categories", get(handlers::categories::list_categories))
        .route("/api/categories/selected", put(handlers::categories::select_category))
        .route("/api/export", get(handlers::transfer::export_quotes))
        .route("/api/import", post(handlers::transfer::import_quotes))
        .route("/api/sync", post(handlers::sync::run_sync))
        .route("/api/sync/status", get(handlers::sync::sync_status))
        .route("/events", get(handlers::events::sse_events))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
