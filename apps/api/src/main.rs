mod boards;
mod config;
mod errors;
mod matching;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::boards::greenhouse::GreenhouseClient;
use crate::config::Config;
use crate::matching::profile::{default_sources, MatchProfile};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting job matcher v{}", env!("CARGO_PKG_VERSION"));

    let board = GreenhouseClient::new(config.greenhouse_api_url.clone());
    info!("Greenhouse client initialized ({})", config.greenhouse_api_url);

    let sources = default_sources();
    let profile = MatchProfile::default();
    info!(
        "Match profile: {} sources, {} keywords, threshold {}",
        sources.len(),
        profile.keywords.len(),
        profile.threshold
    );

    let state = AppState {
        board: Arc::new(board),
        sources: sources.into(),
        profile: Arc::new(profile),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
