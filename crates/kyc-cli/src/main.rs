//! # kyc CLI entry point
//!
//! Parses command-line arguments, loads configuration, initializes logging,
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kyc_cli::config::CliConfig;
use kyc_cli::mask::{run_mask, MaskArgs};
use kyc_cli::parse::{run_parse, ParseArgs};
use kyc_cli::resume::{run_resume, ResumeArgs};
use kyc_cli::validate::{run_validate, ValidateArgs};

/// KYC document toolkit.
///
/// Validates Aadhaar, PAN, GSTIN and other Indian identity numbers, and
/// extracts them from OCR text.
#[derive(Parser, Debug)]
#[command(name = "kyc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Single-line JSON output, overriding `pretty` in the config file.
    #[arg(long, global = true)]
    compact: bool,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a document number.
    Validate(ValidateArgs),

    /// Extract identity numbers and names from OCR text.
    Parse(ParseArgs),

    /// Extract contact and profile fields from resume text.
    Resume(ResumeArgs),

    /// Mask a document number for display.
    Mask(MaskArgs),
}

/// `RUST_LOG` when set, otherwise the level implied by `-v`.
fn log_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    })
}

fn init_tracing(verbose: u8, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "kyc CLI starting");

    let mut config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(2);
        }
    };
    if cli.compact {
        config.pretty = false;
    }

    let result = match &cli.command {
        Commands::Validate(args) => run_validate(args, &config),
        Commands::Parse(args) => run_parse(args, &config),
        Commands::Resume(args) => run_resume(args, &config),
        Commands::Mask(args) => run_mask(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
