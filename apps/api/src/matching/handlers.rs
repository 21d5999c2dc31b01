//! Axum route handlers for the matching API.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::matching::aggregator::find_matching_jobs;
use crate::models::posting::ScoredPosting;
use crate::state::AppState;

/// GET /api/matching-jobs
///
/// Fetches every configured source, scores the postings and returns those at
/// or above the threshold, best first. Sources that fail are skipped.
pub async fn handle_matching_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScoredPosting>>, AppError> {
    let ranked = find_matching_jobs(
        Arc::clone(&state.board),
        Arc::clone(&state.sources),
        &state.profile,
    )
    .await?;

    Ok(Json(ranked))
}
