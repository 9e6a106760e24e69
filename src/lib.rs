//! Workspace umbrella crate for FAQBot.
//!
//! Re-exports the normalization, similarity, and matching layers, and adds
//! the pieces a deployment needs around them: FAQ file loading, YAML
//! configuration, and engine construction from that configuration.
//!
//! ```
//! use faqbot::{FaqEngine, load_faqs_from_str};
//!
//! let faqs = load_faqs_from_str(
//!     r#"[{"question": "Is there a hostel facility?", "answer": "Yes."}]"#,
//! )
//! .unwrap();
//! let engine = FaqEngine::new(faqs);
//! let result = engine.query("do you have dorm rooms?");
//! assert_eq!(result.answer, "Yes.");
//! ```

pub mod config;
pub mod loader;

pub use canonical::{
    CanonicalError, CanonicalizeConfig, Normalizer, extract_keywords, normalize,
    normalize_with_config,
};
pub use matcher::{
    FaqEngine, FaqRecord, MatchConfig, MatchError, MatchLayer, MatchMetrics, MatchResult,
};
pub use similarity::{BestMatch, Scorer, extract_one, hybrid_score};

pub use crate::config::{ConfigLoadError, FaqBotConfig};
pub use crate::loader::{LoadError, clean_answer, load_faqs_from_path, load_faqs_from_str};

use thiserror::Error;
use tracing::info;

/// Errors that can occur while building an engine from configuration.
#[derive(Debug, Error)]
pub enum EngineBuildError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Match(#[from] MatchError),
}

/// Load the configured FAQ file and build an engine with the configured
/// thresholds.
pub fn build_engine(config: &FaqBotConfig) -> Result<FaqEngine, EngineBuildError> {
    let faqs = load_faqs_from_path(&config.data.faq_path)?;
    info!(
        path = %config.data.faq_path.display(),
        faq_count = faqs.len(),
        "building engine from config"
    );
    Ok(FaqEngine::with_config(faqs, config.match_config())?)
}
