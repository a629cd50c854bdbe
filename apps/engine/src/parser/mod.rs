//! Contact & Section Extractor — turns raw document text into structured
//! contact fields and named sections.
//!
//! Parsing is a total function: malformed text never fails, it just yields
//! absent fields and an empty section map.

pub mod contact;
pub mod sections;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::parser::contact::ContactInfo;
use crate::parser::sections::SectionMap;

/// An immutable text blob plus its identifying label. Never mutated after
/// creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: Uuid,
    pub text: String,
}

impl RawDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
        }
    }
}

/// Structured output of a single parse call. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub raw_text: String,
    pub contact: ContactInfo,
    pub sections: SectionMap,
}

/// Parses raw document text into contact fields and named sections.
/// Best-effort on any input: nothing found means absent fields, not errors.
pub fn parse_document(raw_text: &str) -> ParsedDocument {
    ParsedDocument {
        raw_text: raw_text.to_string(),
        contact: contact::extract_contact(raw_text),
        sections: sections::extract_sections(raw_text),
    }
}
