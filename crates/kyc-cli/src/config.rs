//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`. Every key has a default, so
//! an absent file and an empty file behave the same.
//!
//! ```yaml
//! ocr_verified_threshold: 80
//! pretty: true
//! ```

use std::path::Path;

use kyc_core::{KycError, DEFAULT_OCR_VERIFIED_THRESHOLD};
use serde::Deserialize;

/// Settings shared by all subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CliConfig {
    /// OCR confidence must be strictly above this to count as verified.
    pub ocr_verified_threshold: u8,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            ocr_verified_threshold: DEFAULT_OCR_VERIFIED_THRESHOLD,
            pretty: true,
        }
    }
}

impl CliConfig {
    /// Load from `path`, or defaults when `path` is `None`.
    ///
    /// # Errors
    ///
    /// [`KycError::Io`] if the file cannot be read, [`KycError::Config`] if
    /// it is not valid YAML, has unknown keys, or fails [`Self::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self, KycError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)
            .map_err(|e| KycError::Config(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml(content: &str) -> Result<Self, KycError> {
        // serde_yaml rejects an empty document for a struct; treat it as `{}`.
        let config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| KycError::Config(e.to_string()))?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), KycError> {
        if self.ocr_verified_threshold > 100 {
            return Err(KycError::Config(format!(
                "ocr_verified_threshold must be between 0 and 100, got {}",
                self.ocr_verified_threshold
            )));
        }
        Ok(())
    }
}
