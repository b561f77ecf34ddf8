//! # Error Hierarchy
//!
//! Structured error types for KYC validation, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Boolean validators and the OCR extractor never return these: a malformed
//! number there is simply `false` or an unset field. The typed constructors
//! return [`ValidationError`] so callers that need a reason get one.

use thiserror::Error;

/// Top-level error type for the KYC crates.
#[derive(Error, Debug)]
pub enum KycError {
    /// Identifier format or checksum failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No document kind was supplied and none could be inferred from the value.
    #[error("could not detect document type for \"{0}\"")]
    UndetectedKind(String),

    /// Configuration was rejected.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validation errors for identifier newtypes.
///
/// Each variant carries the rejected input (as supplied, before
/// normalization) and names the expected format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Aadhaar is not 12 digits after stripping spaces and hyphens.
    #[error("invalid Aadhaar format: \"{0}\" (expected 12 digits, optionally as XXXX XXXX XXXX)")]
    InvalidAadhaarFormat(String),

    /// Aadhaar has the right shape but fails the Verhoeff check.
    #[error("invalid Aadhaar number: \"{0}\" (Verhoeff checksum mismatch)")]
    AadhaarChecksum(String),

    /// PAN does not match AAAAA9999A.
    #[error("invalid PAN format: \"{0}\" (expected AAAAA9999A)")]
    InvalidPan(String),

    /// GSTIN does not match 99AAAAA9999A9Z9.
    #[error("invalid GSTIN format: \"{0}\" (expected 99AAAAA9999A9Z9)")]
    InvalidGstin(String),

    /// The PAN embedded in a GSTIN (characters 3-12) is malformed.
    #[error("invalid PAN embedded in GSTIN: \"{0}\"")]
    InvalidGstinPan(String),

    /// Driving licence does not match AA99 99999999999.
    #[error("invalid driving license format: \"{0}\" (expected AA99 99999999999)")]
    InvalidDrivingLicense(String),

    /// Driving licence prefix is not a known state or union territory code.
    #[error("invalid state code \"{code}\" in driving license \"{value}\"")]
    UnknownStateCode {
        /// The full rejected value.
        value: String,
        /// The two-letter prefix.
        code: String,
    },

    /// Voter ID (EPIC) does not match AAA9999999.
    #[error("invalid Voter ID format: \"{0}\" (expected AAA9999999)")]
    InvalidVoterId(String),

    /// UAN is not 12 digits.
    #[error("invalid UAN: \"{0}\" (expected 12 digits)")]
    InvalidUan(String),

    /// Bank account number is not 9-18 digits.
    #[error("invalid bank account number: \"{0}\" (expected 9-18 digits)")]
    InvalidBankAccount(String),

    /// IFSC does not match AAAA0XXXXXX.
    #[error("invalid IFSC code: \"{0}\" (expected AAAA0XXXXXX)")]
    InvalidIfsc(String),
}
