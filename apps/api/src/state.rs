use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::models::Settings;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Present only when ANTHROPIC_API_KEY is configured; the suggestion
    /// routes degrade gracefully without it.
    pub llm: Option<LlmClient>,
    /// Fallback settings for requests that carry none of their own.
    pub default_settings: Settings,
}
