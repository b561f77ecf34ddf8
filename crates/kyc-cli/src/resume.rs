//! # Resume Subcommand
//!
//! Extracts contact and profile fields from resume text and prints them as
//! JSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use kyc_core::parse_resume_text;

use crate::config::CliConfig;

/// Arguments for the `kyc resume` subcommand.
#[derive(Args, Debug)]
pub struct ResumeArgs {
    /// File with resume text. Reads stdin when omitted.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Execute the resume subcommand.
pub fn run_resume(args: &ResumeArgs, config: &CliConfig) -> Result<u8> {
    let text = crate::read_input(args.file.as_deref())?;
    let data = parse_resume_text(&text);
    tracing::info!(skills = data.skills.len(), "parsed resume");
    println!("{}", crate::render_json(&data, config.pretty)?);
    Ok(0)
}
