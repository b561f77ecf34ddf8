//! # Document Validation API
//!
//! Boolean validators for the three identifiers the OCR extractor looks for,
//! plus kind detection, typed dispatch, and display masking across every
//! supported document kind.
//!
//! The boolean validators never fail: any malformed input, including empty
//! or non-ASCII text, is simply `false`.

use serde::{Deserialize, Serialize};

use crate::error::KycError;
use crate::identity::{
    matches_shape, normalize_code, Aadhaar, BankAccount, DrivingLicense, Gstin, Ifsc, Pan, Uan,
    VoterId,
};

/// Kinds of document number this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    /// UIDAI Aadhaar.
    Aadhaar,
    /// Permanent Account Number.
    Pan,
    /// GST identification number.
    Gst,
    /// Driving licence.
    DrivingLicense,
    /// Electors Photo Identity Card.
    VoterId,
    /// EPFO Universal Account Number.
    Uan,
    /// Indian Financial System Code.
    Ifsc,
    /// Bank account number.
    BankAccount,
}

impl DocumentKind {
    /// All kinds, in detection order.
    pub const ALL: [DocumentKind; 8] = [
        Self::Aadhaar,
        Self::Pan,
        Self::Gst,
        Self::DrivingLicense,
        Self::VoterId,
        Self::Uan,
        Self::Ifsc,
        Self::BankAccount,
    ];

    /// Wire name, e.g. `"driving-license"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aadhaar => "aadhaar",
            Self::Pan => "pan",
            Self::Gst => "gst",
            Self::DrivingLicense => "driving-license",
            Self::VoterId => "voter-id",
            Self::Uan => "uan",
            Self::Ifsc => "ifsc",
            Self::BankAccount => "bank-account",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| format!("unknown document type: {s}"))
    }
}

/// Whether `input` is a well-formed Aadhaar number with a valid Verhoeff
/// check digit. Spaces and hyphens are ignored.
pub fn validate_aadhaar(input: &str) -> bool {
    Aadhaar::new(input).is_ok()
}

/// Whether `input` is a well-formed PAN (`AAAAA9999A`).
pub fn validate_pan(input: &str) -> bool {
    Pan::new(input).is_ok()
}

/// Whether `input` is a well-formed GSTIN (`99AAAAA9999A9Z9`).
pub fn validate_gst(input: &str) -> bool {
    Gstin::new(input).is_ok()
}

/// Whether the leading bytes of `s` match `shape`.
fn prefix_matches(s: &str, shape: &str) -> bool {
    s.get(..shape.len())
        .is_some_and(|prefix| matches_shape(prefix, shape))
}

/// Guess the document kind from the shape of a number.
///
/// Only shape is checked, not validity: a 12-digit string is reported as
/// Aadhaar whether or not its checksum holds. UAN and bank account numbers
/// are never inferred because they overlap with Aadhaar; callers must name
/// them explicitly.
pub fn detect_document_kind(number: &str) -> Option<DocumentKind> {
    let cleaned = normalize_code(number, true);
    let len = cleaned.len();

    if len == 12 && cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return Some(DocumentKind::Aadhaar);
    }
    if matches_shape(&cleaned, "AAAAA9999A") {
        return Some(DocumentKind::Pan);
    }
    if len == 15 && prefix_matches(&cleaned, "99AAAAA9999A") {
        return Some(DocumentKind::Gst);
    }
    if len == 15 && prefix_matches(&cleaned, "AA99") {
        return Some(DocumentKind::DrivingLicense);
    }
    if matches_shape(&cleaned, "AAA9999999") {
        return Some(DocumentKind::VoterId);
    }
    if len == 11 && prefix_matches(&cleaned, "AAAA0") {
        return Some(DocumentKind::Ifsc);
    }
    None
}

/// A document number that passed validation for its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum ValidatedDocument {
    /// Aadhaar.
    Aadhaar(Aadhaar),
    /// PAN.
    Pan(Pan),
    /// GSTIN.
    Gst(Gstin),
    /// Driving licence.
    DrivingLicense(DrivingLicense),
    /// Voter ID.
    VoterId(VoterId),
    /// UAN.
    Uan(Uan),
    /// IFSC.
    Ifsc(Ifsc),
    /// Bank account.
    BankAccount(BankAccount),
}

impl ValidatedDocument {
    /// Kind of the validated number.
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Aadhaar(_) => DocumentKind::Aadhaar,
            Self::Pan(_) => DocumentKind::Pan,
            Self::Gst(_) => DocumentKind::Gst,
            Self::DrivingLicense(_) => DocumentKind::DrivingLicense,
            Self::VoterId(_) => DocumentKind::VoterId,
            Self::Uan(_) => DocumentKind::Uan,
            Self::Ifsc(_) => DocumentKind::Ifsc,
            Self::BankAccount(_) => DocumentKind::BankAccount,
        }
    }

    /// Display form: grouped for Aadhaar and driving licences, the
    /// normalized code otherwise.
    pub fn formatted(&self) -> String {
        match self {
            Self::Aadhaar(a) => a.formatted(),
            Self::DrivingLicense(d) => d.formatted(),
            Self::Pan(p) => p.as_str().to_string(),
            Self::Gst(g) => g.as_str().to_string(),
            Self::VoterId(v) => v.as_str().to_string(),
            Self::Uan(u) => u.as_str().to_string(),
            Self::Ifsc(i) => i.as_str().to_string(),
            Self::BankAccount(b) => b.as_str().to_string(),
        }
    }
}

/// Validate `number` as `kind`, or as the detected kind when `kind` is
/// `None`.
///
/// # Errors
///
/// [`KycError::UndetectedKind`] if no kind was given and none could be
/// inferred; [`KycError::Validation`] if the number is invalid for the kind.
pub fn validate_document(
    number: &str,
    kind: Option<DocumentKind>,
) -> Result<ValidatedDocument, KycError> {
    let kind = kind
        .or_else(|| detect_document_kind(number))
        .ok_or_else(|| KycError::UndetectedKind(number.to_string()))?;

    let doc = match kind {
        DocumentKind::Aadhaar => ValidatedDocument::Aadhaar(Aadhaar::new(number)?),
        DocumentKind::Pan => ValidatedDocument::Pan(Pan::new(number)?),
        DocumentKind::Gst => ValidatedDocument::Gst(Gstin::new(number)?),
        DocumentKind::DrivingLicense => {
            ValidatedDocument::DrivingLicense(DrivingLicense::new(number)?)
        }
        DocumentKind::VoterId => ValidatedDocument::VoterId(VoterId::new(number)?),
        DocumentKind::Uan => ValidatedDocument::Uan(Uan::new(number)?),
        DocumentKind::Ifsc => ValidatedDocument::Ifsc(Ifsc::new(number)?),
        DocumentKind::BankAccount => ValidatedDocument::BankAccount(BankAccount::new(number)?),
    };
    Ok(doc)
}

/// Last `n` characters of `s` (all of it if shorter).
fn tail(s: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    let start = s.char_indices().rev().nth(n - 1).map_or(0, |(i, _)| i);
    &s[start..]
}

/// Mask a document number for display.
///
/// Works on unvalidated input: only separators are stripped. Aadhaar keeps
/// the last four digits, PAN the first character and last five, bank
/// accounts the last four. Other kinds are returned cleaned but unmasked.
pub fn mask_document(number: &str, kind: DocumentKind) -> String {
    let cleaned: String = number
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    match kind {
        DocumentKind::Aadhaar => format!("XXXX XXXX {}", tail(&cleaned, 4)),
        DocumentKind::Pan => {
            let first: String = cleaned.chars().take(1).collect();
            format!("{first}XXXX{}", tail(&cleaned, 5))
        }
        DocumentKind::BankAccount => {
            let total = cleaned.chars().count();
            format!("{}{}", "X".repeat(total.saturating_sub(4)), tail(&cleaned, 4))
        }
        _ => cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn aadhaar_bool_validator() {
        assert!(validate_aadhaar("123456789010"));
        assert!(validate_aadhaar("1234 5678 9010"));
        assert!(validate_aadhaar("1234-5678-9010"));
        assert!(!validate_aadhaar("123456789012"));
        assert!(!validate_aadhaar(""));
        assert!(!validate_aadhaar("1234567890100"));
        assert!(!validate_aadhaar("12345678901O"));
    }

    #[test]
    fn pan_bool_validator() {
        assert!(validate_pan("ABCDE1234F"));
        assert!(validate_pan("abcde1234f"));
        assert!(!validate_pan("ABCDE1234"));
    }

    #[test]
    fn gst_bool_validator() {
        assert!(validate_gst("29ABCDE1234F1Z5"));
        assert!(!validate_gst("29ABCDE1234F1z5"));
    }

    #[test]
    fn kind_from_str_and_display() {
        for kind in DocumentKind::ALL {
            assert_eq!(kind.to_string().parse::<DocumentKind>().unwrap(), kind);
        }
        assert_eq!(
            "voter_id".parse::<DocumentKind>().unwrap(),
            DocumentKind::VoterId
        );
        assert_eq!("PAN".parse::<DocumentKind>().unwrap(), DocumentKind::Pan);
        assert!("passport".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn kind_serde_matches_display() {
        let json = serde_json::to_string(&DocumentKind::DrivingLicense).unwrap();
        assert_eq!(json, "\"driving-license\"");
    }

    #[test]
    fn detect_kinds() {
        assert_eq!(
            detect_document_kind("1234 5678 9012"),
            Some(DocumentKind::Aadhaar)
        );
        assert_eq!(detect_document_kind("abcde1234f"), Some(DocumentKind::Pan));
        assert_eq!(
            detect_document_kind("29ABCDE1234F1Z5"),
            Some(DocumentKind::Gst)
        );
        assert_eq!(
            detect_document_kind("HR-06 20160034761"),
            Some(DocumentKind::DrivingLicense)
        );
        assert_eq!(
            detect_document_kind("ABC1234567"),
            Some(DocumentKind::VoterId)
        );
        assert_eq!(detect_document_kind("SBIN0001234"), Some(DocumentKind::Ifsc));
        assert_eq!(detect_document_kind("hello"), None);
        assert_eq!(detect_document_kind(""), None);
        // 15 bytes but not on a char boundary at 12.
        assert_eq!(detect_document_kind("12345678901न1"), None);
    }

    #[test]
    fn validate_document_detects_and_validates() {
        let doc = validate_document("1234 5678 9010", None).unwrap();
        assert_eq!(doc.kind(), DocumentKind::Aadhaar);
        assert_eq!(doc.formatted(), "1234 5678 9010");

        let doc = validate_document("hr0620160034761", None).unwrap();
        assert_eq!(doc.formatted(), "HR06 20160034761");
    }

    #[test]
    fn validate_document_explicit_kind_overrides_detection() {
        // Twelve digits would be detected as Aadhaar; UAN has no checksum.
        let doc = validate_document("123456789012", Some(DocumentKind::Uan)).unwrap();
        assert_eq!(doc.kind(), DocumentKind::Uan);
        assert!(validate_document("123456789012", None).is_err());
    }

    #[test]
    fn validate_document_errors() {
        assert!(matches!(
            validate_document("???", None),
            Err(KycError::UndetectedKind(_))
        ));
        assert!(matches!(
            validate_document("123456789012", None),
            Err(KycError::Validation(ValidationError::AadhaarChecksum(_)))
        ));
    }

    #[test]
    fn validated_document_serializes_tagged() {
        let doc = validate_document("ABCDE1234F", None).unwrap();
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            serde_json::json!({"kind": "pan", "value": "ABCDE1234F"})
        );
    }

    #[test]
    fn masking() {
        assert_eq!(
            mask_document("1234 5678 9010", DocumentKind::Aadhaar),
            "XXXX XXXX 9010"
        );
        assert_eq!(mask_document("ABCDE1234F", DocumentKind::Pan), "AXXXX1234F");
        assert_eq!(
            mask_document("0123456789", DocumentKind::BankAccount),
            "XXXXXX6789"
        );
        assert_eq!(
            mask_document("SBIN 0001234", DocumentKind::Ifsc),
            "SBIN0001234"
        );
    }

    #[test]
    fn masking_short_input_does_not_panic() {
        assert_eq!(mask_document("12", DocumentKind::BankAccount), "12");
        assert_eq!(mask_document("", DocumentKind::Pan), "XXXX");
        assert_eq!(mask_document("ab", DocumentKind::Aadhaar), "XXXX XXXX ab");
    }

    #[test]
    fn tail_is_char_safe() {
        assert_eq!(tail("नाम1234", 4), "1234");
        assert_eq!(tail("नाम", 2), "ाम");
        assert_eq!(tail("abc", 0), "");
        assert_eq!(tail("abc", 10), "abc");
    }
}
