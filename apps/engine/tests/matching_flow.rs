//! End-to-end matching flow against an in-process embedding provider.

use std::sync::Arc;

use async_trait::async_trait;
use engine::{
    EmbeddingProvider, EmbeddingVector, EngineError, MatchEngine, RawDocument,
};

/// Embeds text as a crude bag-of-terms vector so that related texts land
/// close together and unrelated ones do not.
struct TermProvider {
    terms: Vec<&'static str>,
}

#[async_trait]
impl EmbeddingProvider for TermProvider {
    async fn embed(&self, text: &str) -> Result<EmbeddingVector, EngineError> {
        let lower = text.to_lowercase();
        let values = self
            .terms
            .iter()
            .map(|term| lower.matches(term).count() as f32)
            .collect();
        Ok(EmbeddingVector::new(values))
    }
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .try_init()
        .ok();
}

#[tokio::test]
async fn full_flow_ranks_the_relevant_posting_first() {
    init_logging();

    let provider = Arc::new(TermProvider {
        terms: vec!["python", "sql", "coffee", "espresso"],
    });
    let engine = MatchEngine::new(provider);

    let cv = RawDocument::new(
        "jane@example.com\n\
         Summary: backend developer\n\
         Skills: Python, SQL, Docker",
    );
    let profile = engine.analyze_document(&cv).await;
    assert!(!profile.embedding.is_empty());

    let backend = engine
        .index_posting(
            "Backend Developer",
            "Acme",
            "Istanbul",
            "We need python and sql daily.",
            Some("python required"),
        )
        .await;
    let barista = engine
        .index_posting(
            "Barista",
            "Cafe Roma",
            "Izmir",
            "Espresso and coffee service.",
            None,
        )
        .await;

    let ranked = engine
        .match_against(&profile, &[barista, backend])
        .unwrap();

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].title, "Backend Developer");
    assert!(ranked[0].score.final_score > ranked[1].score.final_score);
    assert!(ranked[0].score.matched_skills.contains("python"));
    assert!(ranked[0].score.matched_skills.contains("sql"));
}

#[tokio::test]
async fn posting_that_cannot_be_embedded_is_left_out_of_results() {
    init_logging();

    /// Fails for posting text, succeeds for the CV.
    struct FlakyProvider;

    #[async_trait]
    impl EmbeddingProvider for FlakyProvider {
        async fn embed(&self, text: &str) -> Result<EmbeddingVector, EngineError> {
            if text.contains("Barista") {
                Err(EngineError::Embedding("model offline".to_string()))
            } else {
                Ok(EmbeddingVector::new(vec![1.0, 0.5]))
            }
        }
    }

    let engine = MatchEngine::new(Arc::new(FlakyProvider));

    let profile = engine
        .analyze_document(&RawDocument::new("Skills: python"))
        .await;

    let good = engine
        .index_posting("Python Developer", "Acme", "Ankara", "python", None)
        .await;
    let failed = engine
        .index_posting("Barista", "Cafe", "Izmir", "coffee", None)
        .await;
    assert!(failed.embedding.is_empty());

    let ranked = engine.match_against(&profile, &[failed, good]).unwrap();

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].title, "Python Developer");
}
