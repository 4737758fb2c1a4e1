use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default suitable for a local Ollama install.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the local inference server, e.g. `http://localhost:11434`.
    pub ollama_base_url: String,
    /// Name of the served model.
    pub ollama_model: String,
    /// Per-call timeout in seconds. Local models can be slow on long prompts.
    pub llm_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ollama_base_url: env_or("OLLAMA_BASE_URL", "http://localhost:11434"),
            ollama_model: env_or("OLLAMA_MODEL", "llama3.3"),
            llm_timeout_secs: env_or("LLM_TIMEOUT_SECS", "180")
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a number of seconds")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
