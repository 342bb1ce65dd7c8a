use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Present only when ANTHROPIC_API_KEY is configured. Handlers reject
    /// recommendation requests with a structured error when this is `None`.
    pub llm: Option<LlmClient>,
    pub config: Config,
}
