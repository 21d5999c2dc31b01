pub mod health;

use axum::{http::Uri, routing::get, Router};

use crate::errors::AppError;
use crate::matching::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::banner_handler))
        .route("/health", get(health::health_handler))
        .route("/api/matching-jobs", get(handlers::handle_matching_jobs))
        .fallback(not_found)
        .with_state(state)
}
