use anyhow::Context;

use crate::errors::EngineError;

/// Engine configuration loaded from environment variables. Only the
/// embedding-service client needs it; the scoring and parsing paths carry no
/// configuration beyond their static tables.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub embedding_url: String,
    pub request_timeout_secs: u64,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, EngineError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(EngineConfig {
            embedding_url: require_env("EMBEDDING_SERVICE_URL")?,
            request_timeout_secs: std::env::var("EMBEDDING_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("EMBEDDING_TIMEOUT_SECS must be a number of seconds")?,
        })
    }
}

fn require_env(key: &str) -> anyhow::Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
