//! Match Scorer — cosine similarity over embeddings plus lowercase-exact
//! skill overlap, blended into a 0–100 composite.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::embedding::EmbeddingVector;
use crate::errors::EngineError;

/// Blend weights for the composite score. 60% embedding similarity, 40%
/// skill overlap — a fixed policy default, overridable per engine instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub embedding: f32,
    pub skills: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            embedding: 0.6,
            skills: 0.4,
        }
    }
}

/// Result of scoring one document against one posting.
///
/// `embedding_similarity` is the raw cosine value (nominally [-1, 1],
/// typically [0, 1] for normalized text embeddings); `skill_match_ratio` is
/// in [0, 1]; `final_score` is on a 0–100 scale, rounded to 2 decimals.
/// Matched skill names are compared on a lowercase basis but keep the CV's
/// surface form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchScore {
    pub embedding_similarity: f32,
    pub skill_match_ratio: f32,
    pub final_score: f32,
    pub matched_skills: BTreeSet<String>,
}

/// Cosine similarity of two vectors of equal dimensionality. A zero-norm
/// vector on either side yields 0.0 rather than a division fault.
pub fn cosine_similarity(a: &EmbeddingVector, b: &EmbeddingVector) -> Result<f32, EngineError> {
    if a.dim() != b.dim() {
        return Err(EngineError::DimensionMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }

    let (a, b) = (a.as_slice(), b.as_slice());
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }
    Ok(dot / (norm_a * norm_b))
}

/// Share of job skills that also appear (case-insensitively, exact string)
/// among the CV skills. An empty job skill set is 0.0 by definition.
pub fn skill_match_ratio(cv_skills: &[String], job_skills: &[String]) -> f32 {
    if job_skills.is_empty() {
        return 0.0;
    }

    let cv_lower: HashSet<String> = cv_skills.iter().map(|s| s.to_lowercase()).collect();
    let matched = job_skills
        .iter()
        .filter(|s| cv_lower.contains(&s.to_lowercase()))
        .count();

    matched as f32 / job_skills.len() as f32
}

/// The CV skills whose lowercase form equals some job skill's lowercase
/// form. Emitted in the CV's surface form; for case-duplicates among the CV
/// skills the first occurrence wins.
fn matched_skill_names(cv_skills: &[String], job_skills: &[String]) -> BTreeSet<String> {
    let job_lower: HashSet<String> = job_skills.iter().map(|s| s.to_lowercase()).collect();
    let mut seen = HashSet::new();
    cv_skills
        .iter()
        .filter(|s| {
            let lower = s.to_lowercase();
            job_lower.contains(&lower) && seen.insert(lower)
        })
        .cloned()
        .collect()
}

/// Scores one document against one posting.
///
/// Preconditions: both embeddings non-empty (`MissingEmbedding`) and of equal
/// dimensionality (`DimensionMismatch`).
pub fn score_match(
    cv_embedding: &EmbeddingVector,
    job_embedding: &EmbeddingVector,
    cv_skills: &[String],
    job_skills: &[String],
    weights: &ScoringWeights,
) -> Result<MatchScore, EngineError> {
    if cv_embedding.is_empty() {
        return Err(EngineError::MissingEmbedding("cv"));
    }
    if job_embedding.is_empty() {
        return Err(EngineError::MissingEmbedding("job"));
    }

    let embedding_similarity = cosine_similarity(cv_embedding, job_embedding)?;
    let skill_match_ratio = skill_match_ratio(cv_skills, job_skills);

    let composite = weights.embedding * embedding_similarity + weights.skills * skill_match_ratio;
    let final_score = round2(composite * 100.0);

    Ok(MatchScore {
        embedding_similarity,
        skill_match_ratio,
        final_score,
        matched_skills: matched_skill_names(cv_skills, job_skills),
    })
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
