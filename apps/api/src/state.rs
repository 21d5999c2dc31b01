use std::sync::Arc;

use crate::boards::JobBoard;
use crate::matching::profile::MatchProfile;
use crate::models::source::Source;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable board backend. Default: GreenhouseClient.
    pub board: Arc<dyn JobBoard>,
    pub sources: Arc<[Source]>,
    pub profile: Arc<MatchProfile>,
}
