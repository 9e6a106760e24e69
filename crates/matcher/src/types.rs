use canonical::CanonicalizeConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One question/answer pair from the knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaqRecord {
    /// Canonical phrasing of the question.
    pub question: String,
    /// Answer returned when this question matches.
    pub answer: String,
}

impl FaqRecord {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Outcome of a single query.
///
/// Every query produces one of these, including declines. `matched_question`
/// is `None` (serialized as `null`) when no FAQ was selected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub answer: String,
    pub matched_question: Option<String>,
    /// Confidence in `[0, 100]`; `0` for declines.
    pub score: f64,
}

impl MatchResult {
    pub(crate) fn unmatched(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            matched_question: None,
            score: 0.0,
        }
    }

    /// `true` when an FAQ was selected.
    pub fn is_match(&self) -> bool {
        self.matched_question.is_some()
    }
}

/// Resolution layer that produced a [`MatchResult`].
///
/// Reported to logs and to [`crate::MatchMetrics`]; never part of the result
/// itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MatchLayer {
    /// Empty knowledge base; the pipeline did not run.
    Unavailable,
    /// Hybrid score against the normalized query.
    Direct,
    /// Hybrid score against the spelling-corrected query.
    SpellingCorrected,
    /// Topic keyword routing.
    TopicFallback,
    /// Nothing matched; fixed apology answer.
    Declined,
}

impl MatchLayer {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchLayer::Unavailable => "unavailable",
            MatchLayer::Direct => "direct",
            MatchLayer::SpellingCorrected => "spelling_corrected",
            MatchLayer::TopicFallback => "topic_fallback",
            MatchLayer::Declined => "declined",
        }
    }
}

/// Engine configuration.
///
/// Cutoffs are on the 0–100 similarity scale and are inclusive. Every field
/// has a default, so partial YAML/JSON documents deserialize cleanly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatchConfig {
    /// Layer 1 acceptance threshold for the hybrid score.
    pub direct_match_cutoff: f64,
    /// Used twice: the per-token correction threshold and the Layer 2
    /// acceptance threshold.
    pub spelling_correction_threshold: f64,
    /// Minimum partial ratio of a topic term against the query for the
    /// topic to trigger.
    pub topic_trigger_cutoff: f64,
    /// Minimum partial ratio of a question against a topic term for that
    /// question to join the candidate set.
    pub candidate_cutoff: f64,
    /// Layer 3 acceptance threshold for the token-set score.
    pub fallback_cutoff: f64,
    /// Answer returned when the knowledge base is empty.
    pub unavailable_message: String,
    /// Answer returned when no layer matched.
    pub decline_message: String,
    /// Score question scans on the rayon pool. Results are identical.
    pub use_parallel: bool,
    /// Normalization applied to stored questions and queries alike.
    pub canonical: CanonicalizeConfig,
}

impl MatchConfig {
    pub const DEFAULT_UNAVAILABLE_MESSAGE: &'static str =
        "The knowledge base is currently unavailable. Please try again later.";
    pub const DEFAULT_DECLINE_MESSAGE: &'static str =
        "I'm sorry, I couldn't find a confident answer. Could you try rephrasing?";

    /// Validate thresholds and messages.
    pub fn validate(&self) -> Result<(), MatchError> {
        let cutoffs = [
            ("direct_match_cutoff", self.direct_match_cutoff),
            (
                "spelling_correction_threshold",
                self.spelling_correction_threshold,
            ),
            ("topic_trigger_cutoff", self.topic_trigger_cutoff),
            ("candidate_cutoff", self.candidate_cutoff),
            ("fallback_cutoff", self.fallback_cutoff),
        ];
        for (name, value) in cutoffs {
            if !(0.0..=100.0).contains(&value) {
                return Err(MatchError::InvalidConfig(format!(
                    "{name} must be between 0 and 100, got {value}"
                )));
            }
        }
        if self.unavailable_message.trim().is_empty() {
            return Err(MatchError::InvalidConfig(
                "unavailable_message must not be empty".into(),
            ));
        }
        if self.decline_message.trim().is_empty() {
            return Err(MatchError::InvalidConfig(
                "decline_message must not be empty".into(),
            ));
        }
        self.canonical
            .validate()
            .map_err(|e| MatchError::InvalidConfig(e.to_string()))
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            direct_match_cutoff: 90.0,
            spelling_correction_threshold: 80.0,
            topic_trigger_cutoff: 90.0,
            candidate_cutoff: 75.0,
            fallback_cutoff: 80.0,
            unavailable_message: Self::DEFAULT_UNAVAILABLE_MESSAGE.to_string(),
            decline_message: Self::DEFAULT_DECLINE_MESSAGE.to_string(),
            use_parallel: false,
            canonical: CanonicalizeConfig::default(),
        }
    }
}

/// Errors produced by the matching layer.
///
/// Queries never fail; only engine construction with an explicit config can.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    /// Invalid configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}
