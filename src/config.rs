//! YAML Configuration File Support for FAQBot
//!
//! Loads the normalization settings, matcher thresholds, and FAQ data
//! location from a single YAML file. Every section and field is optional;
//! omitted values fall back to the engine defaults.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # FAQBot Configuration
//! version: "1.0"
//! name: "college helpdesk"
//!
//! canonical:
//!   version: 1
//!   lowercase: true
//!   expand_abbreviations: true
//!   strip_punctuation: true
//!
//! matcher:
//!   direct_match_cutoff: 90
//!   spelling_correction_threshold: 80
//!   topic_trigger_cutoff: 90
//!   candidate_cutoff: 75
//!   fallback_cutoff: 80
//!   use_parallel: false
//!   decline_message: "I'm sorry, I couldn't find a confident answer. Could you try rephrasing?"
//!
//! data:
//!   faq_path: "data/faqs.json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use canonical::CanonicalizeConfig;
use matcher::MatchConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration
///
/// The `canonical` and `matcher` sections deserialize straight into the
/// engine's own config types, so their defaults and validation rules live in
/// one place. `matcher.canonical` is ignored; the top-level `canonical`
/// section is the one the engine uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FaqBotConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Text normalization configuration
    #[serde(default)]
    pub canonical: CanonicalizeConfig,

    /// Matcher thresholds and messages
    #[serde(default)]
    pub matcher: MatchConfig,

    /// FAQ data source
    #[serde(default)]
    pub data: DataConfig,
}

impl FaqBotConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: FaqBotConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.canonical
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("canonical: {e}")))?;
        self.match_config()
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("matcher: {e}")))?;

        if self.data.faq_path.as_os_str().is_empty() {
            return Err(ConfigLoadError::Validation(
                "data.faq_path must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Normalization settings for the engine.
    pub fn canonical_config(&self) -> CanonicalizeConfig {
        self.canonical.clone()
    }

    /// Full engine configuration, normalization included.
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            canonical: self.canonical_config(),
            ..self.matcher.clone()
        }
    }
}

impl Default for FaqBotConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            canonical: CanonicalizeConfig::default(),
            matcher: MatchConfig::default(),
            data: DataConfig::default(),
        }
    }
}

/// FAQ data location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_faq_path")]
    pub faq_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            faq_path: default_faq_path(),
        }
    }
}

fn default_faq_path() -> PathBuf {
    PathBuf::from("data/faqs.json")
}
