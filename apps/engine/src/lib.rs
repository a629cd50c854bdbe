//! CV / job-posting matching engine.
//!
//! Raw document text goes in; structured contact fields, named sections,
//! normalized skill mentions, and ranked match scores come out. Embedding
//! generation and persistence are collaborator concerns: the engine consumes
//! an injected [`embedding::EmbeddingProvider`] and returns plain value
//! objects for the caller to store.
//!
//! All scoring and parsing paths are pure, stateless, and safe to call
//! concurrently.

pub mod config;
pub mod embedding;
pub mod errors;
pub mod extract;
pub mod parser;
pub mod pipeline;
pub mod ranking;
pub mod scoring;
pub mod skills;

pub use config::EngineConfig;
pub use embedding::{EmbeddingProvider, EmbeddingVector};
pub use errors::EngineError;
pub use extract::{PdfTextExtractor, TextExtractor};
pub use parser::{parse_document, ParsedDocument, RawDocument};
pub use pipeline::{DocumentProfile, MatchEngine};
pub use ranking::{rank_postings, JobPosting, RankedMatch};
pub use scoring::{cosine_similarity, score_match, MatchScore, ScoringWeights};
pub use skills::{extract_skills, ExtractedSkill};
