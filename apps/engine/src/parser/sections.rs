//! Positional section segmentation driven by a fixed header-synonym table
//! (Turkish and English). Each located header anchors a section that runs to
//! the next located header, or to end of text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Fixed set of document-structure categories the segmenter recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Education,
    Experience,
    Skills,
    Languages,
    Projects,
    Certificates,
    Summary,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Education => "education",
            SectionKind::Experience => "experience",
            SectionKind::Skills => "skills",
            SectionKind::Languages => "languages",
            SectionKind::Projects => "projects",
            SectionKind::Certificates => "certificates",
            SectionKind::Summary => "summary",
        }
    }
}

/// Header synonyms per section kind, tried in listed order. The first
/// synonym found anywhere in the text anchors that kind; remaining synonyms
/// are not tested.
const SECTION_HEADERS: &[(SectionKind, &[&str])] = &[
    (
        SectionKind::Education,
        &["eğitim", "education", "öğrenim", "akademik"],
    ),
    (
        SectionKind::Experience,
        &[
            "deneyim",
            "experience",
            "iş deneyimi",
            "work experience",
            "tecrübe",
        ],
    ),
    (
        SectionKind::Skills,
        &[
            "yetenekler",
            "skills",
            "beceriler",
            "teknik beceriler",
            "technical skills",
        ],
    ),
    (
        SectionKind::Languages,
        &["diller", "languages", "yabancı dil"],
    ),
    (SectionKind::Projects, &["projeler", "projects"]),
    (
        SectionKind::Certificates,
        &["sertifikalar", "certificates", "certifications"],
    ),
    (
        SectionKind::Summary,
        &["özet", "summary", "profil", "profile", "hakkımda", "about me"],
    ),
];

/// Case-insensitive patterns compiled once per synonym, in table order.
/// Matching against the original text keeps byte offsets valid even when
/// Unicode case folding would change string length.
static HEADER_PATTERNS: Lazy<Vec<(SectionKind, Vec<Regex>)>> = Lazy::new(|| {
    SECTION_HEADERS
        .iter()
        .map(|(kind, synonyms)| {
            let patterns = synonyms
                .iter()
                .map(|syn| {
                    Regex::new(&format!("(?i){}", regex::escape(syn)))
                        .expect("Invalid header pattern")
                })
                .collect();
            (*kind, patterns)
        })
        .collect()
});

/// One located section: the text between its header and the next header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub text: String,
}

/// Sections in order of discovery position (start offset ascending), not
/// enumeration order. Kinds with no located header are simply absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionMap(Vec<Section>);

impl SectionMap {
    pub fn get(&self, kind: SectionKind) -> Option<&str> {
        self.0
            .iter()
            .find(|s| s.kind == kind)
            .map(|s| s.text.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.0.iter()
    }
}

/// Splits text into named sections by header position.
pub fn extract_sections(text: &str) -> SectionMap {
    // (start offset, kind, end offset of the matched header)
    let mut anchors: Vec<(usize, SectionKind, usize)> = Vec::new();

    for (kind, patterns) in HEADER_PATTERNS.iter() {
        for pattern in patterns {
            if let Some(m) = pattern.find(text) {
                anchors.push((m.start(), *kind, m.end()));
                break;
            }
        }
    }

    // Stable sort: same-offset anchors keep table order. That tie order is
    // unspecified, not a contract.
    anchors.sort_by_key(|(pos, _, _)| *pos);

    let mut sections = Vec::with_capacity(anchors.len());
    for (i, (_, kind, header_end)) in anchors.iter().enumerate() {
        let end = anchors
            .get(i + 1)
            .map(|(next_pos, _, _)| *next_pos)
            .unwrap_or(text.len());
        // The next anchor can start inside this header (e.g. two headers
        // sharing a letter); the body is then empty, never a backwards slice.
        let start = (*header_end).min(end);
        sections.push(Section {
            kind: *kind,
            text: text[start..end].trim().to_string(),
        });
    }

    SectionMap(sections)
}
