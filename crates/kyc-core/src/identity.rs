//! # Identity Number Newtypes
//!
//! Validated newtypes for Indian KYC identifiers. Each identifier is a
//! distinct type: you cannot pass a [`Pan`] where a [`Gstin`] is expected.
//!
//! ## Normalization
//!
//! Every constructor normalizes before validating, and stores only the
//! normalized form:
//!
//! - whitespace is stripped (and hyphens, for Aadhaar and driving licences);
//! - input written in a single case is folded to uppercase, so `abcde1234f`
//!   is accepted as `ABCDE1234F`. Mixed-case input is checked as written: a
//!   stray lowercase letter inside an otherwise uppercase code is treated as
//!   an OCR or typing fault and rejected.
//!
//! ## Reference
//!
//! - Aadhaar: UIDAI 12-digit number, last digit a Verhoeff check digit
//! - PAN: Income Tax Department Permanent Account Number (AAAAA9999A)
//! - GSTIN: 2-digit state code, embedded PAN, entity code, `Z`, check char

use serde::{Deserialize, Serialize};

use crate::document::DocumentKind;
use crate::error::ValidationError;
use crate::verhoeff;

/// Implement `Deserialize` for string newtypes by routing through `new()`,
/// so invalid values are rejected at deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Drop whitespace, and hyphens too when `hyphens` is set.
fn strip_separators(s: &str, hyphens: bool) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && !(hyphens && *c == '-'))
        .collect()
}

/// Fold single-case input to uppercase; leave mixed-case input untouched.
fn fold_case(s: String) -> String {
    if s.chars().any(|c| c.is_ascii_uppercase()) {
        s
    } else {
        s.to_ascii_uppercase()
    }
}

/// Normalize an alphanumeric code: strip separators, then fold case.
pub(crate) fn normalize_code(s: &str, hyphens: bool) -> String {
    fold_case(strip_separators(s, hyphens))
}

/// Match `s` against a fixed-width shape.
///
/// Shape characters: `A` uppercase ASCII letter, `9` ASCII digit, `N`
/// uppercase letter or digit, `E` GSTIN entity code (`1`-`9` or `A`-`Z`).
/// Any other shape character must appear literally.
pub(crate) fn matches_shape(s: &str, shape: &str) -> bool {
    s.len() == shape.len()
        && s.bytes().zip(shape.bytes()).all(|(c, class)| match class {
            b'A' => c.is_ascii_uppercase(),
            b'9' => c.is_ascii_digit(),
            b'N' => c.is_ascii_uppercase() || c.is_ascii_digit(),
            b'E' => c.is_ascii_uppercase() || (b'1'..=b'9').contains(&c),
            lit => c == lit,
        })
}

const PAN_SHAPE: &str = "AAAAA9999A";
const GSTIN_SHAPE: &str = "99AAAAA9999AEZN";
const DRIVING_LICENSE_SHAPE: &str = "AA9999999999999";
const VOTER_ID_SHAPE: &str = "AAA9999999";
const IFSC_SHAPE: &str = "AAAA0NNNNNN";

/// State and union territory prefixes accepted on driving licences.
const STATE_CODES: &[&str] = &[
    "AP", "AR", "AS", "BR", "CG", "GA", "GJ", "HR", "HP", "JH", "KA", "KL", "MP", "MH", "MN", "ML",
    "MZ", "NL", "OD", "PB", "RJ", "SK", "TN", "TS", "TR", "UP", "UK", "WB", "DL", "AN", "CH", "DD",
    "JK", "LA", "LD", "PY",
];

// ---------------------------------------------------------------------------
// Aadhaar
// ---------------------------------------------------------------------------

/// UIDAI Aadhaar number.
///
/// Accepts `"123456789010"`, `"1234 5678 9010"` and `"1234-5678-9010"`.
/// Stored as 12 digits.
///
/// # Validation
///
/// - Exactly 12 ASCII digits after stripping spaces and hyphens
/// - Final digit is a valid Verhoeff check digit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Aadhaar(String);

impl_validating_deserialize!(Aadhaar);

impl Aadhaar {
    /// Create an Aadhaar number, validating length and checksum.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidAadhaarFormat`] if the value is not 12
    /// digits, [`ValidationError::AadhaarChecksum`] if the check digit is
    /// wrong.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let digits = strip_separators(&raw, true);

        if digits.len() != 12 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidAadhaarFormat(raw));
        }
        if !verhoeff::is_valid(&digits) {
            return Err(ValidationError::AadhaarChecksum(raw));
        }

        Ok(Self(digits))
    }

    /// The 12 digits, no separators.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Grouped for display: `XXXX XXXX XXXX`.
    pub fn formatted(&self) -> String {
        format!("{} {} {}", &self.0[..4], &self.0[4..8], &self.0[8..])
    }

    /// Only the last four digits visible: `XXXX XXXX 9010`.
    pub fn masked(&self) -> String {
        format!("XXXX XXXX {}", &self.0[8..])
    }
}

impl std::fmt::Display for Aadhaar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

// ---------------------------------------------------------------------------
// PAN
// ---------------------------------------------------------------------------

/// Holder category encoded in the fourth character of a PAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanHolderType {
    /// `P`
    Individual,
    /// `C`
    Company,
    /// `H`, Hindu Undivided Family.
    Huf,
    /// `F`, firm or limited liability partnership.
    Firm,
    /// `A`
    AssociationOfPersons,
    /// `T`
    Trust,
    /// `B`
    BodyOfIndividuals,
    /// `L`
    LocalAuthority,
    /// `J`
    ArtificialJuridicalPerson,
    /// `G`
    Government,
}

impl PanHolderType {
    /// Decode a PAN holder-type character.
    pub fn from_code(c: char) -> Option<Self> {
        Some(match c {
            'P' => Self::Individual,
            'C' => Self::Company,
            'H' => Self::Huf,
            'F' => Self::Firm,
            'A' => Self::AssociationOfPersons,
            'T' => Self::Trust,
            'B' => Self::BodyOfIndividuals,
            'L' => Self::LocalAuthority,
            'J' => Self::ArtificialJuridicalPerson,
            'G' => Self::Government,
            _ => return None,
        })
    }
}

/// Permanent Account Number.
///
/// Format-only: PAN has no check digit. The holder-type character is
/// decoded by [`Pan::holder_type`] but never used to reject a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Pan(String);

impl_validating_deserialize!(Pan);

impl Pan {
    /// Create a PAN, validating the `AAAAA9999A` shape.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPan`] if the normalized value does
    /// not match.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let code = normalize_code(&raw, false);
        if !matches_shape(&code, PAN_SHAPE) {
            return Err(ValidationError::InvalidPan(raw));
        }
        Ok(Self(code))
    }

    /// The 10-character code, uppercase.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Holder category from the fourth character, if it is a known one.
    pub fn holder_type(&self) -> Option<PanHolderType> {
        self.0.chars().nth(3).and_then(PanHolderType::from_code)
    }

    /// First character and last five visible: `AXXXX1234F`.
    pub fn masked(&self) -> String {
        format!("{}XXXX{}", &self.0[..1], &self.0[5..])
    }
}

impl std::fmt::Display for Pan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// GSTIN
// ---------------------------------------------------------------------------

/// Goods and Services Tax Identification Number.
///
/// Layout: state code (2 digits), PAN (10), entity code (`1-9A-Z`),
/// literal `Z`, check character (`0-9A-Z`). The check character is only
/// shape-checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Gstin(String);

impl_validating_deserialize!(Gstin);

impl Gstin {
    /// Create a GSTIN, validating shape and the embedded PAN.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidGstin`] on a shape mismatch,
    /// [`ValidationError::InvalidGstinPan`] if characters 3-12 are not a PAN.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let code = normalize_code(&raw, false);
        if !matches_shape(&code, GSTIN_SHAPE) {
            return Err(ValidationError::InvalidGstin(raw));
        }
        if !matches_shape(&code[2..12], PAN_SHAPE) {
            return Err(ValidationError::InvalidGstinPan(raw));
        }
        Ok(Self(code))
    }

    /// The 15-character code, uppercase.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-digit state code (e.g. 29 for Karnataka).
    pub fn state_code(&self) -> u8 {
        self.0.as_bytes()[..2]
            .iter()
            .fold(0, |acc, b| acc * 10 + (b - b'0'))
    }

    /// The PAN of the registered taxpayer.
    pub fn embedded_pan(&self) -> Pan {
        Pan(self.0[2..12].to_string())
    }
}

impl std::fmt::Display for Gstin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Supplementary identifiers
// ---------------------------------------------------------------------------

/// Driving licence number: state code, RTO code, issue year, serial.
///
/// Stored as 15 characters; displayed as `AA99 99999999999`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DrivingLicense(String);

impl_validating_deserialize!(DrivingLicense);

impl DrivingLicense {
    /// Create a driving licence number.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidDrivingLicense`] on a shape mismatch,
    /// [`ValidationError::UnknownStateCode`] for an unrecognized prefix.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let code = normalize_code(&raw, true);
        if !matches_shape(&code, DRIVING_LICENSE_SHAPE) {
            return Err(ValidationError::InvalidDrivingLicense(raw));
        }
        let state = &code[..2];
        if !STATE_CODES.contains(&state) {
            return Err(ValidationError::UnknownStateCode {
                code: state.to_string(),
                value: raw,
            });
        }
        Ok(Self(code))
    }

    /// The 15-character code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-letter issuing state code.
    pub fn state_code(&self) -> &str {
        &self.0[..2]
    }

    /// `AA99 99999999999`.
    pub fn formatted(&self) -> String {
        format!("{} {}", &self.0[..4], &self.0[4..])
    }
}

impl std::fmt::Display for DrivingLicense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

/// Electors Photo Identity Card number (Voter ID).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VoterId(String);

impl_validating_deserialize!(VoterId);

impl VoterId {
    /// Create a Voter ID, validating the `AAA9999999` shape.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidVoterId`] on a shape mismatch.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let code = normalize_code(&raw, false);
        if !matches_shape(&code, VOTER_ID_SHAPE) {
            return Err(ValidationError::InvalidVoterId(raw));
        }
        Ok(Self(code))
    }

    /// The 10-character code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VoterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// EPFO Universal Account Number. Twelve digits, no checksum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Uan(String);

impl_validating_deserialize!(Uan);

impl Uan {
    /// Create a UAN.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidUan`] unless the value is 12 digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let digits = strip_separators(&raw, false);
        if digits.len() != 12 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidUan(raw));
        }
        Ok(Self(digits))
    }

    /// The 12 digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Uan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bank account number, 9 to 18 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BankAccount(String);

impl_validating_deserialize!(BankAccount);

impl BankAccount {
    /// Create a bank account number.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBankAccount`] unless the value is
    /// 9-18 digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let digits = strip_separators(&raw, false);
        if !(9..=18).contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidBankAccount(raw));
        }
        Ok(Self(digits))
    }

    /// The digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// All but the last four digits replaced with `X`.
    pub fn masked(&self) -> String {
        let visible = self.0.len() - 4;
        format!("{}{}", "X".repeat(visible), &self.0[visible..])
    }
}

impl std::fmt::Display for BankAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Indian Financial System Code: bank code, literal `0`, branch code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Ifsc(String);

impl_validating_deserialize!(Ifsc);

impl Ifsc {
    /// Create an IFSC code.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidIfsc`] on a shape mismatch.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let code = normalize_code(&raw, false);
        if !matches_shape(&code, IFSC_SHAPE) {
            return Err(ValidationError::InvalidIfsc(raw));
        }
        Ok(Self(code))
    }

    /// The 11-character code.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Four-letter bank code.
    pub fn bank_code(&self) -> &str {
        &self.0[..4]
    }

    /// Six-character branch code.
    pub fn branch_code(&self) -> &str {
        &self.0[5..]
    }
}

impl std::fmt::Display for Ifsc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tagged identity number
// ---------------------------------------------------------------------------

/// One of the identity numbers the OCR extractor recognizes.
///
/// Serialized as `{"kind": "aadhaar", "value": "123456789010"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum IdentityNumber {
    /// 12-digit Aadhaar.
    Aadhaar(Aadhaar),
    /// 10-character PAN.
    Pan(Pan),
    /// 15-character GSTIN.
    Gst(Gstin),
}

impl IdentityNumber {
    /// Document kind of this number.
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Aadhaar(_) => DocumentKind::Aadhaar,
            Self::Pan(_) => DocumentKind::Pan,
            Self::Gst(_) => DocumentKind::Gst,
        }
    }

    /// Normalized string value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Aadhaar(a) => a.as_str(),
            Self::Pan(p) => p.as_str(),
            Self::Gst(g) => g.as_str(),
        }
    }
}

impl From<Aadhaar> for IdentityNumber {
    fn from(a: Aadhaar) -> Self {
        Self::Aadhaar(a)
    }
}

impl From<Pan> for IdentityNumber {
    fn from(p: Pan) -> Self {
        Self::Pan(p)
    }
}

impl From<Gstin> for IdentityNumber {
    fn from(g: Gstin) -> Self {
        Self::Gst(g)
    }
}
