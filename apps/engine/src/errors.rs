use thiserror::Error;

/// Engine-level error type.
///
/// Collaborator layers (HTTP, storage) surface these as request failures
/// without reinterpretation; the engine itself never retries.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Upstream text extraction failed (unreadable or corrupt document).
    #[error("Text extraction failed: {0}")]
    Extraction(String),

    /// The embedding provider failed to produce a vector.
    #[error("Embedding provider error: {0}")]
    Embedding(String),

    /// Two embeddings of different length were compared. Programmer or data
    /// error; always surfaced, never coerced.
    #[error("Embedding dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Scoring was attempted with an empty vector. Callers are expected to
    /// validate embedding presence before invoking scoring.
    #[error("Missing embedding for {0}")]
    MissingEmbedding(&'static str),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
