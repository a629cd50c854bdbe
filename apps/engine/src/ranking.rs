//! Ranker — scores one document against many postings and returns a totally
//! ordered result list.
//!
//! Unscoreable postings (no embedding, or a scoring error) are skipped and
//! logged, never fatal: one bad posting must not abort ranking for the rest.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::embedding::EmbeddingVector;
use crate::errors::EngineError;
use crate::scoring::{score_match, MatchScore, ScoringWeights};

/// A posting as the ranker consumes it: identity and display fields, the
/// posting's skill names, and its (possibly absent) embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub skills: Vec<String>,
    pub embedding: EmbeddingVector,
}

/// One ranked result: the posting's display fields plus its match score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    pub job_id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub score: MatchScore,
}

/// Ranks postings against one document, sorted by `final_score` descending.
///
/// Equal scores preserve the relative order of the input sequence (stable
/// sort). An empty CV embedding is a precondition failure; an empty posting
/// embedding just drops that posting from the result.
pub fn rank_postings(
    cv_embedding: &EmbeddingVector,
    cv_skills: &[String],
    postings: &[JobPosting],
    weights: &ScoringWeights,
) -> Result<Vec<RankedMatch>, EngineError> {
    if cv_embedding.is_empty() {
        return Err(EngineError::MissingEmbedding("cv"));
    }

    let mut ranked = Vec::with_capacity(postings.len());

    for posting in postings {
        if posting.embedding.is_empty() {
            debug!(job_id = %posting.id, "skipping posting without embedding");
            continue;
        }

        let score = match score_match(
            cv_embedding,
            &posting.embedding,
            cv_skills,
            &posting.skills,
            weights,
        ) {
            Ok(score) => score,
            Err(e) => {
                warn!(job_id = %posting.id, error = %e, "skipping unscoreable posting");
                continue;
            }
        };

        ranked.push(RankedMatch {
            job_id: posting.id,
            title: posting.title.clone(),
            company: posting.company.clone(),
            location: posting.location.clone(),
            score,
        });
    }

    // Stable descending sort; ties keep input order.
    ranked.sort_by(|a, b| {
        b.score
            .final_score
            .partial_cmp(&a.score.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(ranked)
}
