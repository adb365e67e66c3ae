mod clues;
mod config;
mod errors;
mod llm_client;
mod puzzle;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::clues::llm::LlmClueSource;
use crate::clues::sample::SampleClueSource;
use crate::clues::ClueSource;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Crossword API v{}", env!("CARGO_PKG_VERSION"));

    // Wire the clue source: the Gemini-backed one by default, the bundled
    // sample data when USE_SAMPLE_CROSSWORD_DATA=true.
    let clue_source: Arc<dyn ClueSource> = if config.use_sample_data {
        info!("Clue source: bundled sample data");
        Arc::new(SampleClueSource)
    } else {
        let llm = LlmClient::new(
            config.gemini_api_key.clone(),
            config.gemini_model_name.clone(),
        );
        info!("Clue source: LLM (model: {})", llm.model());
        Arc::new(LlmClueSource::new(llm))
    };

    // Build app state
    let state = AppState {
        clue_source,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
