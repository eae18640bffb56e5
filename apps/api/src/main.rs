mod advice;
mod config;
mod errors;
mod llm_client;
mod matching;
mod pdf;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advice::{LlmSuggestionEngine, SuggestionEngine};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::matching::{PhraseMatching, SkillVocabulary, TokenWindowMatcher};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", target, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Scanner API v{}", env!("CARGO_PKG_VERSION"));

    // Load the skill vocabulary. This is the one fatal startup step: without
    // a vocabulary the service must not accept match requests.
    let vocabulary = SkillVocabulary::load(Path::new(&config.skill_patterns_path))
        .context("failed to load skill vocabulary; refusing to start")?;
    info!(
        "Skill vocabulary loaded: {} terms ({} matchable)",
        vocabulary.len(),
        vocabulary.matchable_len()
    );
    if vocabulary.is_empty() {
        warn!("Skill vocabulary is empty; every match request will be rejected");
    }

    let matcher: Arc<dyn PhraseMatching> = Arc::new(TokenWindowMatcher::new(vocabulary));

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let suggester: Arc<dyn SuggestionEngine> = Arc::new(LlmSuggestionEngine(llm.clone()));

    // Build app state
    let state = AppState {
        llm,
        matcher,
        suggester,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
