//! # Mask Subcommand
//!
//! Prints a number masked for display. The number is not validated, so
//! partially read OCR values can still be shown safely.

use anyhow::Result;
use clap::Args;

use kyc_core::{mask_document, DocumentKind};

/// Arguments for the `kyc mask` subcommand.
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// Document number.
    #[arg(value_name = "NUMBER")]
    pub number: String,

    /// Document kind. Aadhaar, PAN and bank accounts are masked; other
    /// kinds are printed with separators removed.
    #[arg(long, short)]
    pub kind: DocumentKind,
}

/// The masked form of `args.number`.
pub fn render(args: &MaskArgs) -> String {
    mask_document(&args.number, args.kind)
}

/// Execute the mask subcommand.
pub fn run_mask(args: &MaskArgs) -> Result<u8> {
    println!("{}", render(args));
    Ok(0)
}
