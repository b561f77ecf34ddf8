//! # kyc-cli: KYC Document Command-Line Interface
//!
//! Provides the `kyc` binary over [`kyc_core`], for operators checking
//! numbers by hand and for batch jobs piping OCR output through it.
//!
//! ## Subcommands
//!
//! - `kyc validate`: Validate one number, detecting its kind if not given.
//! - `kyc parse`: Extract identity numbers and names from OCR text.
//! - `kyc resume`: Extract contact and profile fields from resume text.
//! - `kyc mask`: Mask a number for display.
//!
//! ```bash
//! kyc validate "1234 5678 9010"
//! kyc validate 29ABCDE1234F1Z5 --kind gst
//! tesseract card.png - | kyc parse
//! kyc mask 123456789010 --kind aadhaar
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from business logic.
//! - Handlers delegate to `kyc-core`; no validation rules live here.
//! - Results go to stdout, logs to stderr.

pub mod config;
pub mod mask;
pub mod parse;
pub mod resume;
pub mod validate;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// Read text from `path`, or all of stdin when `path` is `None`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Serialize `value` as JSON, pretty or single-line.
pub fn render_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("failed to serialize output")
}
