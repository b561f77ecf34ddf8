//! # OCR Document Text Extraction
//!
//! Scans free-form OCR output for Aadhaar, PAN, and GSTIN numbers, classifies
//! the document, and pulls the holder or business name from labelled fields.
//!
//! ## Pipeline
//!
//! 1. Collapse whitespace runs to one space and uppercase the text. The
//!    untouched input is kept in [`ExtractedDocumentData::raw_text`].
//! 2. Aadhaar, then PAN, then GSTIN. For each, only the first pattern match
//!    is checked; if it passes its validator it is recorded and sets the
//!    classification and confidence. A failing first match records nothing,
//!    even when a later match would pass. A later hit overwrites the
//!    classification of an earlier one; the earlier number stays populated.
//! 3. Name (Aadhaar and PAN) or business name (GSTIN) from `NAME:`-style
//!    labels, chosen by the final classification. Names shorter than
//!    [`MIN_NAME_CHARS`] after trimming are dropped.
//! 4. Nothing recognized: [`DocumentType::Unknown`] at confidence 30.
//!
//! Confidence values are fixed per document type, not statistical.
//! Downstream verification compares them against a threshold
//! ([`DEFAULT_OCR_VERIFIED_THRESHOLD`]), so they must not drift.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::document::{mask_document, validate_aadhaar, validate_gst, validate_pan, DocumentKind};
use crate::identity::{Aadhaar, Gstin, IdentityNumber, Pan};

/// Confidence assigned when an Aadhaar number is the deciding match.
pub const AADHAAR_CONFIDENCE: u8 = 85;
/// Confidence assigned when a PAN is the deciding match.
pub const PAN_CONFIDENCE: u8 = 90;
/// Confidence assigned when a GSTIN is the deciding match.
pub const GST_CONFIDENCE: u8 = 88;
/// Confidence assigned when nothing was recognized.
pub const UNKNOWN_CONFIDENCE: u8 = 30;
/// Scores strictly above this count as OCR-verified.
pub const DEFAULT_OCR_VERIFIED_THRESHOLD: u8 = 80;
/// Shortest holder or business name kept after trimming label vocabulary.
pub const MIN_NAME_CHARS: usize = 3;

static AADHAAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}[\s-]?[0-9]{4}[\s-]?[0-9]{4}").unwrap());
static PAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]{5}[0-9]{4}[A-Z]").unwrap());
static GST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]").unwrap()
});

/// Holder-name labels on Aadhaar cards, English then Hindi.
static AADHAAR_NAME_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"NAME[:\s]+([A-Z\s]{3,50})").unwrap(),
        Regex::new(r"नाम[:\s]+([A-Z\s]{3,50})").unwrap(),
    ]
});
static PAN_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"NAME[:\s]+([A-Z\s]{3,50})").unwrap());
static BUSINESS_NAME_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"LEGAL NAME[:\s]+([A-Z0-9\s&.,]{3,100})").unwrap(),
        Regex::new(r"TRADE NAME[:\s]+([A-Z0-9\s&.,]{3,100})").unwrap(),
    ]
});

/// Card vocabulary that ends a holder name. The name class admits any run
/// of letters, so text such as `NAME: RAHUL SHARMA AADHAAR 1234...` would
/// otherwise swallow the following label.
const NAME_STOP_WORDS: &[&str] = &[
    "AADHAAR", "AADHAR", "ADDRESS", "BIRTH", "CARD", "DATE", "DOB", "FATHER", "FATHERS", "FEMALE",
    "GENDER", "GOVERNMENT", "GOVT", "HUSBAND", "INCOME", "INDIA", "MALE", "MOTHER", "NAME",
    "NUMBER", "PAN", "PERMANENT", "SIGNATURE", "TAX", "UIDAI", "VID", "YOB",
];

/// Certificate vocabulary that ends a business name.
const BUSINESS_STOP_WORDS: &[&str] = &[
    "ADDRESS",
    "CONSTITUTION",
    "DATE",
    "GSTIN",
    "NAME",
    "PERIOD",
    "REGISTRATION",
    "TYPE",
];

/// Label prefixes dropped if a name ends on them (`... TRADE` before `NAME`).
const BUSINESS_LABEL_PREFIXES: &[&str] = &["LEGAL", "TRADE", "BUSINESS"];

/// Classification of a scanned document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// Aadhaar card.
    Aadhaar,
    /// PAN card.
    Pan,
    /// GST registration certificate.
    Gst,
    /// No identity number recognized.
    Unknown,
}

impl DocumentType {
    /// Fixed confidence score for this classification.
    pub fn confidence(&self) -> u8 {
        match self {
            Self::Aadhaar => AADHAAR_CONFIDENCE,
            Self::Pan => PAN_CONFIDENCE,
            Self::Gst => GST_CONFIDENCE,
            Self::Unknown => UNKNOWN_CONFIDENCE,
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Aadhaar => "aadhaar",
            Self::Pan => "pan",
            Self::Gst => "gst",
            Self::Unknown => "unknown",
        })
    }
}

/// Fields recovered from one OCR pass.
///
/// Serializes with camelCase keys (`aadhaarNumber`, `documentType`, ...);
/// unset fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedDocumentData {
    /// Holder name (Aadhaar and PAN only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Legal or trade name (GSTIN only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    /// 12 digits, no separators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aadhaar_number: Option<String>,
    /// 10-character PAN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan_number: Option<String>,
    /// 15-character GSTIN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,
    /// Final classification.
    pub document_type: DocumentType,
    /// Fixed score for `document_type`, 0-100.
    pub confidence: u8,
    /// The input, unmodified.
    pub raw_text: String,
}

impl ExtractedDocumentData {
    /// Whether the result clears `threshold` (strictly greater).
    pub fn is_ocr_verified(&self, threshold: u8) -> bool {
        self.confidence > threshold
    }

    /// The recognized numbers as typed values, Aadhaar first.
    pub fn identity_numbers(&self) -> Vec<IdentityNumber> {
        let aadhaar = self
            .aadhaar_number
            .as_deref()
            .and_then(|s| Aadhaar::new(s).ok())
            .map(IdentityNumber::from);
        let pan = self
            .pan_number
            .as_deref()
            .and_then(|s| Pan::new(s).ok())
            .map(IdentityNumber::from);
        let gst = self
            .gst_number
            .as_deref()
            .and_then(|s| Gstin::new(s).ok())
            .map(IdentityNumber::from);
        [aadhaar, pan, gst].into_iter().flatten().collect()
    }
}

/// Collapse whitespace runs to single spaces and uppercase.
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// First match of `re` in `text`, after `clean`, if `valid` accepts it.
/// Later matches are never tried.
fn first_match(
    re: &Regex,
    text: &str,
    kind: DocumentKind,
    clean: impl Fn(&str) -> String,
    valid: impl Fn(&str) -> bool,
) -> Option<String> {
    let candidate = clean(re.find(text)?.as_str());
    if valid(&candidate) {
        Some(candidate)
    } else {
        tracing::trace!(%kind, candidate = %mask_document(&candidate, kind), "candidate rejected");
        None
    }
}

/// Trim a captured label value at the first stop word after the first token.
/// The first token is always kept: names such as `INDIA KUMAR` start with
/// card vocabulary.
fn cut_at_stop_words(captured: &str, stop_words: &[&str]) -> Vec<String> {
    let mut tokens = captured.split_whitespace();
    let Some(first) = tokens.next() else {
        return Vec::new();
    };
    std::iter::once(first)
        .chain(tokens.take_while(|token| {
            let bare = token.trim_matches(|c: char| c == '.' || c == ',');
            !stop_words.contains(&bare)
        }))
        .map(str::to_string)
        .collect()
}

/// Join kept tokens, or `None` if the result is too short to be a name.
fn join_name(tokens: &[String]) -> Option<String> {
    let name = tokens.join(" ");
    (name.chars().count() >= MIN_NAME_CHARS).then_some(name)
}

fn extract_name(text: &str, patterns: &[&Regex]) -> Option<String> {
    let captured = patterns
        .iter()
        .find_map(|re| re.captures(text))
        .and_then(|caps| caps.get(1))?;
    join_name(&cut_at_stop_words(captured.as_str(), NAME_STOP_WORDS))
}

fn extract_business_name(text: &str) -> Option<String> {
    let captured = BUSINESS_NAME_RES
        .iter()
        .find_map(|re| re.captures(text))
        .and_then(|caps| caps.get(1))?;
    let mut tokens = cut_at_stop_words(captured.as_str(), BUSINESS_STOP_WORDS);
    while tokens
        .last()
        .is_some_and(|t| BUSINESS_LABEL_PREFIXES.contains(&t.as_str()))
    {
        tokens.pop();
    }
    join_name(&tokens)
}

/// Scan OCR text for identity numbers and names.
///
/// Never fails: anything unrecognized leaves the field unset, and text with
/// no identity number at all is classified [`DocumentType::Unknown`].
pub fn parse_document_text(raw_text: &str) -> ExtractedDocumentData {
    let text = normalize(raw_text);
    let mut document_type = None;

    let aadhaar_number = first_match(
        &AADHAAR_RE,
        &text,
        DocumentKind::Aadhaar,
        |m| m.chars().filter(|c| !c.is_whitespace() && *c != '-').collect(),
        validate_aadhaar,
    );
    if aadhaar_number.is_some() {
        document_type = Some(DocumentType::Aadhaar);
    }

    let pan_number = first_match(
        &PAN_RE,
        &text,
        DocumentKind::Pan,
        str::to_string,
        validate_pan,
    );
    if pan_number.is_some() {
        document_type = Some(DocumentType::Pan);
    }

    let gst_number = first_match(
        &GST_RE,
        &text,
        DocumentKind::Gst,
        str::to_string,
        validate_gst,
    );
    if gst_number.is_some() {
        document_type = Some(DocumentType::Gst);
    }

    let document_type = document_type.unwrap_or(DocumentType::Unknown);

    let (name, business_name) = match document_type {
        DocumentType::Aadhaar => {
            let patterns: Vec<&Regex> = AADHAAR_NAME_RES.iter().collect();
            (extract_name(&text, &patterns), None)
        }
        DocumentType::Pan => (extract_name(&text, &[&*PAN_NAME_RE]), None),
        DocumentType::Gst => (None, extract_business_name(&text)),
        DocumentType::Unknown => (None, None),
    };

    tracing::debug!(
        %document_type,
        aadhaar = aadhaar_number.is_some(),
        pan = pan_number.is_some(),
        gst = gst_number.is_some(),
        name = name.is_some(),
        business_name = business_name.is_some(),
        "parsed document text"
    );

    ExtractedDocumentData {
        name,
        business_name,
        aadhaar_number,
        pan_number,
        gst_number,
        document_type,
        confidence: document_type.confidence(),
        raw_text: raw_text.to_string(),
    }
}
