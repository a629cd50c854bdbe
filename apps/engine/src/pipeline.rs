//! End-to-end pipeline: parse + extract skills + embed on the way in, score
//! + rank on the way out.
//!
//! The embedding capability is injected; the engine never reaches into
//! ambient global state. A provider failure during analysis degrades the
//! profile to an empty embedding (ranking will then skip it), but the
//! failure is logged rather than silently swallowed.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::embedding::{EmbeddingProvider, EmbeddingVector};
use crate::errors::EngineError;
use crate::parser::{parse_document, ParsedDocument, RawDocument};
use crate::ranking::{rank_postings, JobPosting, RankedMatch};
use crate::scoring::ScoringWeights;
use crate::skills::{extract_skills, ExtractedSkill};

/// Everything the engine derives from one uploaded document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentProfile {
    pub id: Uuid,
    pub parsed: ParsedDocument,
    pub skills: Vec<ExtractedSkill>,
    /// Empty when embedding failed; such a profile cannot be ranked.
    pub embedding: EmbeddingVector,
}

impl DocumentProfile {
    pub fn skill_names(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.name.clone()).collect()
    }
}

/// The matching engine: injected embedding capability plus scoring policy.
///
/// All methods are safe to call concurrently; the engine holds no mutable
/// state across calls.
pub struct MatchEngine {
    provider: Arc<dyn EmbeddingProvider>,
    weights: ScoringWeights,
}

impl MatchEngine {
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            provider,
            weights: ScoringWeights::default(),
        }
    }

    pub fn with_weights(provider: Arc<dyn EmbeddingProvider>, weights: ScoringWeights) -> Self {
        Self { provider, weights }
    }

    /// Analyzes one document: structural parse, skill extraction, embedding.
    /// Never fails; an embedding failure leaves the profile with an empty
    /// vector and a warning in the logs.
    pub async fn analyze_document(&self, document: &RawDocument) -> DocumentProfile {
        let parsed = parse_document(&document.text);
        let skills = extract_skills(&document.text);
        let embedding = self.embed_or_empty(&document.text, "document").await;

        info!(
            document_id = %document.id,
            skills = skills.len(),
            sections = parsed.sections.len(),
            "document analyzed"
        );

        DocumentProfile {
            id: document.id,
            parsed,
            skills,
            embedding,
        }
    }

    /// Builds a posting ready for ranking. Skills and embedding are derived
    /// from the title, description, and requirements combined, the same text
    /// basis used for documents.
    pub async fn index_posting(
        &self,
        title: &str,
        company: &str,
        location: &str,
        description: &str,
        requirements: Option<&str>,
    ) -> JobPosting {
        let combined = format!("{title} {description} {}", requirements.unwrap_or(""));
        let skills: Vec<String> = extract_skills(&combined)
            .into_iter()
            .map(|s| s.name)
            .collect();
        let embedding = self.embed_or_empty(&combined, "posting").await;

        JobPosting {
            id: Uuid::new_v4(),
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            skills,
            embedding,
        }
    }

    /// Ranks postings against an analyzed document.
    pub fn match_against(
        &self,
        profile: &DocumentProfile,
        postings: &[JobPosting],
    ) -> Result<Vec<RankedMatch>, EngineError> {
        rank_postings(
            &profile.embedding,
            &profile.skill_names(),
            postings,
            &self.weights,
        )
    }

    async fn embed_or_empty(&self, text: &str, what: &str) -> EmbeddingVector {
        match self.provider.embed(text).await {
            Ok(vector) => vector,
            Err(e) => {
                warn!(error = %e, "embedding failed for {what}; continuing without a vector");
                EmbeddingVector::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::BTreeSet;

    /// Deterministic provider: hashes nothing, just returns a fixed vector.
    struct FixedProvider(Vec<f32>);

    #[async_trait]
    impl EmbeddingProvider for FixedProvider {
        async fn embed(&self, _text: &str) -> Result<EmbeddingVector, EngineError> {
            Ok(EmbeddingVector::new(self.0.clone()))
        }
    }

    /// Provider that always fails, for the degraded path.
    struct FailingProvider;

    #[async_trait]
    impl EmbeddingProvider for FailingProvider {
        async fn embed(&self, _text: &str) -> Result<EmbeddingVector, EngineError> {
            Err(EngineError::Embedding("model offline".to_string()))
        }
    }

    fn engine_with(provider: impl EmbeddingProvider + 'static) -> MatchEngine {
        MatchEngine::new(Arc::new(provider))
    }

    const CV_TEXT: &str = "\
        jane@example.com\n\
        Skills: python, sql and more python\n";

    #[tokio::test]
    async fn test_analyze_document_builds_full_profile() {
        let engine = engine_with(FixedProvider(vec![1.0, 0.0]));
        let document = RawDocument::new(CV_TEXT);

        let profile = engine.analyze_document(&document).await;

        assert_eq!(profile.id, document.id);
        assert_eq!(
            profile.parsed.contact.email.as_deref(),
            Some("jane@example.com")
        );
        assert!(profile.skill_names().contains(&"python".to_string()));
        assert_eq!(profile.embedding.dim(), 2);
    }

    #[tokio::test]
    async fn test_analyze_document_degrades_to_empty_embedding() {
        let engine = engine_with(FailingProvider);
        let profile = engine.analyze_document(&RawDocument::new(CV_TEXT)).await;

        // Analysis still succeeds; only the vector is missing.
        assert!(profile.embedding.is_empty());
        assert!(!profile.skills.is_empty());
    }

    #[tokio::test]
    async fn test_index_posting_combines_title_description_requirements() {
        let engine = engine_with(FixedProvider(vec![1.0]));
        let posting = engine
            .index_posting(
                "Python Developer",
                "Acme",
                "Ankara",
                "Backend services.",
                Some("docker required"),
            )
            .await;

        assert!(posting.skills.contains(&"python".to_string()));
        assert!(posting.skills.contains(&"docker".to_string()));
        assert_eq!(posting.company, "Acme");
        assert_eq!(posting.embedding.dim(), 1);
    }

    #[tokio::test]
    async fn test_end_to_end_match() {
        let engine = engine_with(FixedProvider(vec![0.6, 0.8]));

        let profile = engine.analyze_document(&RawDocument::new(CV_TEXT)).await;
        let matching = engine
            .index_posting("Python Developer", "Acme", "Ankara", "python and sql", None)
            .await;
        let unrelated = engine
            .index_posting("Barista", "Cafe", "Izmir", "coffee", None)
            .await;
        let postings = vec![unrelated, matching];

        let ranked = engine.match_against(&profile, &postings).unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].title, "Python Developer");
        assert!(ranked[0].score.final_score > ranked[1].score.final_score);
        assert!(ranked[0]
            .score
            .matched_skills
            .contains(&"python".to_string()));
    }

    #[tokio::test]
    async fn test_unembedded_profile_cannot_be_ranked() {
        let failing = engine_with(FailingProvider);
        let profile = failing.analyze_document(&RawDocument::new(CV_TEXT)).await;

        let scoring = engine_with(FixedProvider(vec![1.0]));
        let posting = scoring
            .index_posting("Any", "Acme", "Ankara", "python", None)
            .await;

        let err = scoring.match_against(&profile, &[posting]).unwrap_err();
        assert!(matches!(err, EngineError::MissingEmbedding("cv")));
    }

    #[tokio::test]
    async fn test_matched_skill_names_flow_through() {
        let engine = engine_with(FixedProvider(vec![1.0]));
        let profile = engine.analyze_document(&RawDocument::new(CV_TEXT)).await;
        let posting = engine
            .index_posting("Data Engineer", "Acme", "Ankara", "sql pipelines", None)
            .await;

        let ranked = engine.match_against(&profile, &[posting]).unwrap();
        assert_eq!(
            ranked[0].score.matched_skills,
            BTreeSet::from(["sql".to_string()])
        );
    }
}
