use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Contact fields located in the document text. `None` means "not found",
/// which is distinct from "found but empty".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
}

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("Invalid email regex")
});

/// Turkish-style numbering: optional `+90` or `0` prefix, then digit groups
/// of 3-3-2-2 with optional space/dot/hyphen separators.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+90|0)?[\s.-]?(\d{3})[\s.-]?(\d{3})[\s.-]?(\d{2})[\s.-]?(\d{2})")
        .expect("Invalid phone regex")
});

pub fn extract_contact(text: &str) -> ContactInfo {
    ContactInfo {
        email: extract_email(text),
        phone: extract_phone(text),
    }
}

/// First email-shaped substring, if any.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// First phone match, normalized to the bare 10 digits (country/trunk
/// prefix dropped, separators removed).
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.captures(text).map(|caps| {
        let mut digits = String::with_capacity(10);
        for group in 2..=5 {
            if let Some(m) = caps.get(group) {
                digits.push_str(m.as_str());
            }
        }
        digits
    })
}
