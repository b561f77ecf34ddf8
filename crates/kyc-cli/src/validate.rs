//! # Validate Subcommand
//!
//! Validates a single document number. Without `--kind` the kind is
//! inferred from the number's shape; UAN and bank account numbers overlap
//! with Aadhaar and always need `--kind`.
//!
//! Exit codes: 0 valid, 1 invalid or undetectable.

use anyhow::Result;
use clap::Args;

use kyc_core::{validate_document, DocumentKind, KycError};

use crate::config::CliConfig;

/// Arguments for the `kyc validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Document number, separators allowed (`"1234 5678 9010"`).
    #[arg(value_name = "NUMBER")]
    pub number: String,

    /// Document kind: aadhaar, pan, gst, driving-license, voter-id, uan,
    /// ifsc, bank-account.
    #[arg(long, short)]
    pub kind: Option<DocumentKind>,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Build the output line(s) and exit code for `args`.
pub fn report(args: &ValidateArgs, config: &CliConfig) -> Result<(String, u8)> {
    match validate_document(&args.number, args.kind) {
        Ok(doc) => {
            tracing::info!(kind = %doc.kind(), "number is valid");
            let out = if args.json {
                crate::render_json(&doc, config.pretty)?
            } else {
                format!("VALID {}: {}", doc.kind(), doc.formatted())
            };
            Ok((out, 0))
        }
        Err(e @ (KycError::Validation(_) | KycError::UndetectedKind(_))) => {
            tracing::info!(error = %e, "number is invalid");
            let out = if args.json {
                crate::render_json(
                    &serde_json::json!({ "valid": false, "error": e.to_string() }),
                    config.pretty,
                )?
            } else {
                format!("INVALID: {e}")
            };
            Ok((out, 1))
        }
        Err(e) => Err(e.into()),
    }
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, config: &CliConfig) -> Result<u8> {
    let (out, code) = report(args, config)?;
    println!("{out}");
    Ok(code)
}
