//! # Resume Text Parsing
//!
//! Best-effort contact and profile fields from OCR'd or PDF-extracted
//! resume text: email, Indian mobile number, name, experience phrase,
//! skill keywords (English and Hindi), and education keywords.
//!
//! Like the document extractor this never fails; unmatched fields stay
//! unset and `skills` may be empty.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_.-]+@[A-Za-z0-9_.-]+\.[A-Za-z0-9_]+").unwrap());
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\+91|91)?[\s-]?[6-9][0-9]{9}").unwrap());
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:Name|नाम)[ \t:]+([A-Za-z \t]+)").unwrap());
static EXPERIENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[0-9]+[\s-]+(?:years?|yrs?|साल)(?:\s+(?:of\s+)?experience)?").unwrap()
});
static EDUCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives: Vec<String> = EDUCATION_KEYWORDS.iter().map(|k| regex::escape(k)).collect();
    Regex::new(&format!("(?i)(?:{})", alternatives.join("|"))).unwrap()
});
static VALID_PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").unwrap());
static VALID_EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Skill keywords, matched case-insensitively as substrings.
pub const SKILL_KEYWORDS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "node",
    "sql",
    "html",
    "css",
    "driving",
    "ड्राइविंग",
    "cooking",
    "खाना बनाना",
    "plumbing",
    "electrical",
    "mechanic",
    "मैकेनिक",
    "delivery",
    "डिलीवरी",
    "sales",
    "सेल्स",
    "cleaning",
    "सफाई",
    "security",
    "सुरक्षा",
    "helper",
    "हेल्पर",
];

/// Education keywords. Longer forms come first so `b.tech` wins over `b.e`.
pub const EDUCATION_KEYWORDS: &[&str] = &[
    "b.tech",
    "b.e",
    "mca",
    "mba",
    "bca",
    "bsc",
    "msc",
    "10th",
    "12th",
    "graduation",
];

/// Fields recovered from resume text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedResumeData {
    /// Labelled name, or the first non-blank line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// First email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Ten-digit mobile number without country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// First experience phrase, as written (`"5 years of experience"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    /// Matched skill keywords, in keyword-list order.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Every education keyword occurrence, joined with `", "`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    /// The input, unmodified.
    pub raw_text: String,
}

/// Whether `phone` is a bare ten-digit Indian mobile number.
pub fn validate_phone(phone: &str) -> bool {
    VALID_PHONE_RE.is_match(phone)
}

/// Whether `email` looks like `local@domain.tld`.
pub fn validate_email(email: &str) -> bool {
    VALID_EMAIL_RE.is_match(email)
}

fn extract_phone(text: &str) -> Option<String> {
    let m = PHONE_RE.find(text)?;
    let digits: Vec<char> = m.as_str().chars().filter(char::is_ascii_digit).collect();
    let start = digits.len().saturating_sub(10);
    Some(digits[start..].iter().collect())
}

fn extract_name(text: &str) -> Option<String> {
    let labelled = NAME_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| !name.is_empty());

    labelled.or_else(|| {
        text.lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string)
    })
}

/// Parse resume text into structured fields.
pub fn parse_resume_text(text: &str) -> ExtractedResumeData {
    let lower = text.to_lowercase();
    let skills = SKILL_KEYWORDS
        .iter()
        .filter(|skill| lower.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect();

    let education: Vec<&str> = EDUCATION_RE.find_iter(text).map(|m| m.as_str()).collect();

    let data = ExtractedResumeData {
        name: extract_name(text),
        email: EMAIL_RE.find(text).map(|m| m.as_str().to_string()),
        phone: extract_phone(text),
        experience: EXPERIENCE_RE.find(text).map(|m| m.as_str().to_string()),
        skills,
        education: (!education.is_empty()).then(|| education.join(", ")),
        raw_text: text.to_string(),
    };

    tracing::debug!(
        name = data.name.is_some(),
        email = data.email.is_some(),
        phone = data.phone.is_some(),
        skills = data.skills.len(),
        "parsed resume text"
    );

    data
}
