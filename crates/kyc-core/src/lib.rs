#![deny(missing_docs)]

//! # kyc-core: Indian KYC Document Numbers
//!
//! Validation and extraction of Indian identity and business-register
//! numbers for worker and employer verification. Everything here is a pure
//! function over strings: no I/O, no shared mutable state, safe to call from
//! any thread.
//!
//! ## Contents
//!
//! - [`verhoeff`]: the Aadhaar check-digit algorithm.
//! - [`identity`]: validated newtypes ([`Aadhaar`], [`Pan`], [`Gstin`], and
//!   supplementary identifiers) that only ever hold normalized values.
//! - [`document`]: boolean validators, kind detection, dispatch, masking.
//! - [`extract`]: [`parse_document_text`], which classifies OCR text and
//!   pulls out numbers and names.
//! - [`resume`]: [`parse_resume_text`] for worker resumes.
//!
//! ## Crate Policy
//!
//! - Boolean validators and text parsers never fail or panic on any input.
//! - Typed constructors return [`ValidationError`] naming the expected format.
//! - No `.unwrap()` outside tests, except on constant regex literals.

pub mod document;
pub mod error;
pub mod extract;
pub mod identity;
pub mod resume;
pub mod verhoeff;

// Re-export primary types at crate root for ergonomic imports.
pub use document::{
    detect_document_kind, mask_document, validate_aadhaar, validate_document, validate_gst,
    validate_pan, DocumentKind, ValidatedDocument,
};
pub use error::{KycError, ValidationError};
pub use extract::{
    parse_document_text, DocumentType, ExtractedDocumentData, DEFAULT_OCR_VERIFIED_THRESHOLD,
};
pub use identity::{
    Aadhaar, BankAccount, DrivingLicense, Gstin, IdentityNumber, Ifsc, Pan, PanHolderType, Uan,
    VoterId,
};
pub use resume::{parse_resume_text, validate_email, validate_phone, ExtractedResumeData};
