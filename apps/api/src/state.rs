use crate::config::Config;
use crate::llm_client::OllamaClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. Holds no per-user or per-session data — the service is
/// stateless by design.
#[derive(Clone)]
pub struct AppState {
    pub llm: OllamaClient,
    pub config: Config,
}
