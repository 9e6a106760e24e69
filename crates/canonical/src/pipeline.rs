use std::borrow::Cow;

use crate::abbreviation::expand_abbreviations;
use crate::config::CanonicalizeConfig;
use crate::error::CanonicalError;
use crate::whitespace::collapse_whitespace;

/// Normalize text with the default configuration.
///
/// Lowercases, expands abbreviations, removes punctuation, and collapses
/// whitespace. Never fails; empty or whitespace-only input yields `""`.
///
/// ```rust
/// use canonical::normalize;
///
/// assert_eq!(normalize("What is the fee?"), "what is the fee");
/// assert_eq!(normalize("Who is the M.D.?"), "who is the managing director");
/// ```
pub fn normalize(text: &str) -> String {
    apply(text, &CanonicalizeConfig::default())
}

/// Normalize text with an explicit configuration.
///
/// Returns [`CanonicalError::InvalidConfig`] for a config that fails
/// validation.
pub fn normalize_with_config(
    text: &str,
    cfg: &CanonicalizeConfig,
) -> Result<String, CanonicalError> {
    cfg.validate()?;
    Ok(apply(text, cfg))
}

/// Normalizer bound to a validated configuration.
///
/// Build one per engine and reuse it for every question and query so both
/// sides go through identical transforms.
///
/// ```rust
/// use canonical::{CanonicalizeConfig, Normalizer};
///
/// let normalizer = Normalizer::new(CanonicalizeConfig::default()).unwrap();
/// assert_eq!(normalizer.normalize("Hostel  FEE?"), "hostel fee");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalizer {
    cfg: CanonicalizeConfig,
}

impl Normalizer {
    pub fn new(cfg: CanonicalizeConfig) -> Result<Self, CanonicalError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &CanonicalizeConfig {
        &self.cfg
    }

    pub fn normalize(&self, text: &str) -> String {
        apply(text, &self.cfg)
    }
}

pub(crate) fn apply(text: &str, cfg: &CanonicalizeConfig) -> String {
    let cased: Cow<str> = if cfg.lowercase {
        Cow::Owned(text.to_lowercase())
    } else {
        Cow::Borrowed(text)
    };

    // Dotted forms ("b.tech", "m.d.") must be expanded before their periods go.
    let expanded: Cow<str> = if cfg.expand_abbreviations {
        Cow::Owned(expand_abbreviations(&cased))
    } else {
        cased
    };

    let stripped: Cow<str> = if cfg.strip_punctuation {
        Cow::Owned(strip_punctuation(&expanded))
    } else {
        expanded
    };

    let collapsed = collapse_whitespace(&stripped);

    // A second pass catches abbreviations that were glued to punctuation
    // ("md," or "(mba)"); without it normalize would not be idempotent.
    if cfg.expand_abbreviations && cfg.strip_punctuation {
        expand_abbreviations(&collapsed)
    } else {
        collapsed
    }
}

/// Remove every character that is not a word character or whitespace.
pub fn strip_punctuation(text: &str) -> String {
    text.chars()
        .filter(|ch| ch.is_alphanumeric() || *ch == '_' || ch.is_whitespace())
        .collect()
}
