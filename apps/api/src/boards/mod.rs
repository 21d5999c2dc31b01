//! Job boards: the upstream feeds postings are fetched from.
//!
//! `AppState` holds an `Arc<dyn JobBoard>`; the Greenhouse client is the only
//! production backend.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::posting::Posting;
use crate::models::source::Source;

pub mod greenhouse;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Board returned status {status}")]
    Status { status: u16 },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetches every open posting for one source and normalizes it into a
/// `Posting`. Implementations make a single attempt; callers decide what a
/// failure means for the rest of the request.
#[async_trait]
pub trait JobBoard: Send + Sync {
    async fn fetch_postings(&self, source: &Source) -> Result<Vec<Posting>, FetchError>;
}
