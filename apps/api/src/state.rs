use std::sync::Arc;

use crate::advice::SuggestionEngine;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::matching::PhraseMatching;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is read-only after startup; concurrent match requests share
/// the frozen vocabulary behind the matcher without locking.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Pluggable skill extractor. Default: `TokenWindowMatcher` over the
    /// vocabulary loaded at startup.
    pub matcher: Arc<dyn PhraseMatching>,
    /// Pluggable suggestion generator. Default: `LlmSuggestionEngine`; the
    /// handler falls back to template output if it fails.
    pub suggester: Arc<dyn SuggestionEngine>,
    /// Runtime settings; only startup reads them today.
    #[allow(dead_code)]
    pub config: Config,
}
