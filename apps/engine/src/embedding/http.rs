//! HTTP embedding provider — the single point of entry for all embedding
//! service calls in the engine.
//!
//! The remote service holds the loaded model in memory; this client only
//! speaks JSON to it. Retries on 429 and 5xx with exponential backoff.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::embedding::{EmbeddingProvider, EmbeddingVector};
use crate::errors::EngineError;

/// The model served behind the embedding endpoint.
/// Intentionally hardcoded to prevent accidental drift between deployments.
pub const MODEL: &str = "dbmdz/bert-base-turkish-cased";

const MAX_RETRIES: u32 = 3;

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embedding: Vec<f32>,
}

/// Client for a remote embedding service.
///
/// The service's vector dimensionality is recorded on the first successful
/// call through a one-time, thread-safe gate, so concurrent first calls
/// cannot race; every later call is checked against it.
pub struct HttpEmbeddingProvider {
    client: Client,
    endpoint: String,
    dimension: OnceCell<usize>,
}

impl HttpEmbeddingProvider {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint: config.embedding_url.clone(),
            dimension: OnceCell::new(),
        }
    }

    async fn call_service(&self, text: &str) -> Result<Vec<f32>, EngineError> {
        let request_body = EmbedRequest { model: MODEL, text };
        let mut last_error: Option<EngineError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Embedding call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&self.endpoint)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(EngineError::Embedding(format!("HTTP error: {e}")));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Embedding service returned {}: {}", status, body);
                last_error = Some(EngineError::Embedding(format!(
                    "service error (status {status}): {body}"
                )));
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(EngineError::Embedding(format!(
                    "service error (status {status}): {body}"
                )));
            }

            let parsed: EmbedResponse = response
                .json()
                .await
                .map_err(|e| EngineError::Embedding(format!("invalid response body: {e}")))?;

            debug!("Embedding call succeeded: dim={}", parsed.embedding.len());
            return Ok(parsed.embedding);
        }

        Err(last_error
            .unwrap_or_else(|| EngineError::Embedding("retries exhausted".to_string())))
    }
}

#[async_trait]
impl EmbeddingProvider for HttpEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<EmbeddingVector, EngineError> {
        let values = self.call_service(text).await?;

        if values.is_empty() {
            return Err(EngineError::Embedding(
                "service returned an empty vector".to_string(),
            ));
        }

        let expected = *self.dimension.get_or_init(|| async { values.len() }).await;
        if values.len() != expected {
            return Err(EngineError::Embedding(format!(
                "service changed dimensionality mid-deployment: expected {expected}, got {}",
                values.len()
            )));
        }

        Ok(EmbeddingVector::new(values))
    }
}
