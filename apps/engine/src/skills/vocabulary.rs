//! The fixed skill vocabulary the extractor scans for. Static configuration
//! data: an ordered list of lowercase terms, iterated once per extraction.
//! Order matters — it is the tie-break for equal-confidence results.

use serde::{Deserialize, Serialize};

/// Broad grouping for a vocabulary term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    ProgrammingLanguage,
    Web,
    Database,
    Devops,
    DataScience,
    Other,
}

/// A canonical skill term (lowercase form used for matching) and its category.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillVocabularyEntry {
    pub name: &'static str,
    pub category: SkillCategory,
}

const fn entry(name: &'static str, category: SkillCategory) -> SkillVocabularyEntry {
    SkillVocabularyEntry { name, category }
}

use SkillCategory::*;

pub const SKILL_VOCABULARY: &[SkillVocabularyEntry] = &[
    // Programming languages
    entry("python", ProgrammingLanguage),
    entry("java", ProgrammingLanguage),
    entry("javascript", ProgrammingLanguage),
    entry("c++", ProgrammingLanguage),
    entry("c#", ProgrammingLanguage),
    entry("php", ProgrammingLanguage),
    entry("ruby", ProgrammingLanguage),
    entry("swift", ProgrammingLanguage),
    entry("kotlin", ProgrammingLanguage),
    entry("go", ProgrammingLanguage),
    entry("rust", ProgrammingLanguage),
    entry("typescript", ProgrammingLanguage),
    // Web technologies
    entry("html", Web),
    entry("css", Web),
    entry("react", Web),
    entry("angular", Web),
    entry("vue", Web),
    entry("node.js", Web),
    entry("express", Web),
    entry("django", Web),
    entry("flask", Web),
    entry("fastapi", Web),
    entry("spring", Web),
    // Databases
    entry("sql", Database),
    entry("mysql", Database),
    entry("postgresql", Database),
    entry("mongodb", Database),
    entry("redis", Database),
    entry("elasticsearch", Database),
    entry("oracle", Database),
    entry("sqlite", Database),
    // DevOps & cloud
    entry("docker", Devops),
    entry("kubernetes", Devops),
    entry("aws", Devops),
    entry("azure", Devops),
    entry("gcp", Devops),
    entry("jenkins", Devops),
    entry("gitlab", Devops),
    entry("github", Devops),
    entry("ci/cd", Devops),
    entry("linux", Devops),
    // Data science & ML
    entry("machine learning", DataScience),
    entry("deep learning", DataScience),
    entry("tensorflow", DataScience),
    entry("pytorch", DataScience),
    entry("scikit-learn", DataScience),
    entry("pandas", DataScience),
    entry("numpy", DataScience),
    // Other
    entry("git", Other),
    entry("agile", Other),
    entry("scrum", Other),
    entry("rest api", Other),
    entry("graphql", Other),
    entry("microservices", Other),
    entry("unit test", Other),
    entry("jira", Other),
];
