//! Embedding vector type and the provider boundary.
//!
//! The engine treats embedding generation as an opaque capability: text in,
//! fixed-length vector out. Callers inject the capability (`Arc<dyn
//! EmbeddingProvider>`) rather than reaching into ambient global state.

pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Ordered sequence of floats with model-defined dimensionality. Equal
/// dimensionality is enforced at comparison time, not at creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmbeddingVector(Vec<f32>);

impl EmbeddingVector {
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    /// The empty vector: "no embedding available". Scoring rejects it;
    /// ranking skips over it.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn dim(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

impl From<Vec<f32>> for EmbeddingVector {
    fn from(values: Vec<f32>) -> Self {
        Self(values)
    }
}

/// The embedding capability consumed by the engine.
///
/// Implementations must tolerate concurrent calls; the engine never
/// serializes access, and calls carry no ordering guarantee relative to one
/// another.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Maps text to a vector. Every call within one deployment returns the
    /// same dimensionality.
    async fn embed(&self, text: &str) -> Result<EmbeddingVector, EngineError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_vector_has_zero_dim() {
        let v = EmbeddingVector::empty();
        assert!(v.is_empty());
        assert_eq!(v.dim(), 0);
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let v = EmbeddingVector::new(vec![0.5, -0.25]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[0.5,-0.25]");

        let back: EmbeddingVector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
