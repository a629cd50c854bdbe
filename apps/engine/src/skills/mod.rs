//! Skill Extractor — vocabulary-driven presence detector with an
//! occurrence-count confidence heuristic.
//!
//! This is deliberately not an NER model. Substring containment means "go"
//! also fires inside "django"; that false-positive behavior is part of the
//! extractor's contract and downstream consumers rely on it staying put.

pub mod vocabulary;

use serde::{Deserialize, Serialize};

use crate::skills::vocabulary::{SkillCategory, SKILL_VOCABULARY};

/// One detected skill. `name` is the vocabulary's canonical form, never the
/// surface form from the text. Confidence is a heuristic in [0.5, 1.0], not
/// a calibrated probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSkill {
    pub name: String,
    pub category: SkillCategory,
    pub confidence: f32,
}

/// Scans text against the fixed vocabulary and returns one `ExtractedSkill`
/// per matched entry, sorted by confidence descending. Ties keep vocabulary
/// order (stable sort), and no entry can appear twice because the vocabulary
/// is iterated exactly once.
pub fn extract_skills(text: &str) -> Vec<ExtractedSkill> {
    let text_lower = text.to_lowercase();
    let mut found = Vec::new();

    for entry in SKILL_VOCABULARY {
        let occurrences = text_lower.matches(entry.name).count();
        if occurrences > 0 {
            found.push(ExtractedSkill {
                name: entry.name.to_string(),
                category: entry.category,
                confidence: confidence_for(occurrences),
            });
        }
    }

    found.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    found
}

/// confidence = min(1.0, 0.5 + 0.1 * occurrences)
fn confidence_for(occurrences: usize) -> f32 {
    (0.5 + 0.1 * occurrences as f32).min(1.0)
}
