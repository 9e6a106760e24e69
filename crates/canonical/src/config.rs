//! Configuration types for question normalization.
//!
//! [`CanonicalizeConfig`] controls which transforms [`normalize_with_config`]
//! applies. The matcher builds every derived index with one config and uses
//! the same config for queries, so questions and queries always land in the
//! same canonical space.
//!
//! # Versioning
//!
//! The `version` field tracks behavior changes. Any change to normalization
//! output (new abbreviation, different punctuation class) must come with a
//! version bump so that stored normalized questions can be told apart.
//!
//! # Examples
//!
//! ```rust
//! use canonical::CanonicalizeConfig;
//!
//! let config = CanonicalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.lowercase);
//! assert!(config.expand_abbreviations);
//! assert!(config.strip_punctuation);
//! ```
//!
//! ## Keeping punctuation
//!
//! ```rust
//! use canonical::{normalize_with_config, CanonicalizeConfig};
//!
//! let config = CanonicalizeConfig {
//!     strip_punctuation: false,
//!     ..Default::default()
//! };
//! let text = normalize_with_config("What is the fee?", &config).unwrap();
//! assert_eq!(text, "what is the fee?");
//! ```
//!
//! [`normalize_with_config`]: crate::normalize_with_config

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for the normalization pipeline.
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// configuration files.
///
/// ```json
/// {
///   "version": 1,
///   "lowercase": true,
///   "expand_abbreviations": true,
///   "strip_punctuation": true
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CanonicalizeConfig {
    /// Version of the normalization behavior.
    ///
    /// Must be >= 1; version 0 is reserved and rejected with
    /// [`CanonicalError::InvalidConfig`].
    pub version: u32,

    /// Apply locale-free Unicode lowercasing before anything else.
    ///
    /// The abbreviation table is keyed by lowercase tokens, so disabling this
    /// also means `"MD"` is no longer expanded.
    pub lowercase: bool,

    /// Replace known abbreviations (`md`, `b.tech`, ...) with their long form.
    ///
    /// Tokens are matched exactly after trailing periods are removed:
    ///
    /// ```text
    /// "md"     → "managing director"
    /// "m.d."   → "managing director"
    /// "b.tech" → "btech"
    /// ```
    pub expand_abbreviations: bool,

    /// Remove every character that is neither a word character
    /// (alphanumeric or `_`) nor whitespace.
    ///
    /// ```text
    /// "What's the fee?" → "whats the fee"
    /// "e-mail"          → "email"
    /// ```
    ///
    /// Removal is total, not replacement by a space, so hyphenated and
    /// dotted words collapse into one token.
    pub strip_punctuation: bool,
}

impl CanonicalizeConfig {
    /// Check the config before it is used to build indexes.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CanonicalizeConfig {
    /// All transforms enabled, version 1.
    fn default() -> Self {
        Self {
            version: 1,
            lowercase: true,
            expand_abbreviations: true,
            strip_punctuation: true,
        }
    }
}
