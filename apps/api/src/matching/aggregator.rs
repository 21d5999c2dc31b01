//! Aggregation: fetch every source, concatenate, then rank.
//!
//! Sources are fetched concurrently, one task per source, and the batches are
//! put back in configured source order before concatenation.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::boards::JobBoard;
use crate::matching::profile::MatchProfile;
use crate::matching::scoring::rank_postings;
use crate::models::posting::{Posting, ScoredPosting};
use crate::models::source::Source;

/// Fetches postings from every source. A source that fails contributes no
/// postings and is logged; it never fails the call. The only error is a fetch
/// task that panicked or was cancelled.
pub async fn collect_postings(
    board: Arc<dyn JobBoard>,
    sources: Arc<[Source]>,
) -> Result<Vec<Posting>> {
    let mut tasks = JoinSet::new();

    for (index, source) in sources.iter().cloned().enumerate() {
        let board = Arc::clone(&board);
        tasks.spawn(async move {
            let postings = match board.fetch_postings(&source).await {
                Ok(postings) => postings,
                Err(e) => {
                    warn!("Failed to fetch {}: {e}", source.name);
                    Vec::new()
                }
            };
            (index, postings)
        });
    }

    let mut batches = Vec::with_capacity(sources.len());
    while let Some(joined) = tasks.join_next().await {
        batches.push(joined.context("Source fetch task failed")?);
    }
    batches.sort_by_key(|(index, _)| *index);

    Ok(batches
        .into_iter()
        .flat_map(|(_, postings)| postings)
        .collect())
}

/// Full pipeline: fetch → normalize → score → filter → sort.
pub async fn find_matching_jobs(
    board: Arc<dyn JobBoard>,
    sources: Arc<[Source]>,
    profile: &MatchProfile,
) -> Result<Vec<ScoredPosting>> {
    info!("Starting job fetch across {} sources", sources.len());

    let postings = collect_postings(board, sources).await?;
    info!("Total jobs fetched: {}", postings.len());

    let ranked = rank_postings(postings, profile);
    info!("Jobs after filtering: {}", ranked.len());

    Ok(ranked)
}
