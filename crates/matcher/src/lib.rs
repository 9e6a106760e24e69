//! # FAQBot Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` answers free-text questions from a fixed list of FAQ records.
//! It normalizes questions with `canonical`, scores them with `similarity`,
//! and walks four resolution layers in order, stopping at the first hit:
//!
//! 1. **Direct**: hybrid score of the normalized query against every stored
//!    question (cutoff 90).
//! 2. **Spelling corrected**: each query token is fixed from a misspelling
//!    table or the knowledge-base vocabulary, then matched again (cutoff 80).
//! 3. **Topic fallback**: a topic keyword or synonym found in the query picks
//!    candidate questions, which are re-ranked by token-set score (cutoff 80).
//! 4. **Declined**: a fixed apology with score 0.
//!
//! An engine built from an empty list answers every query with the
//! unavailable message instead.
//!
//! ## Core Types
//!
//! - [`FaqRecord`]: question/answer pair.
//! - [`MatchResult`]: answer, matched question (if any), score in `[0, 100]`.
//! - [`MatchConfig`]: thresholds, fixed messages, normalization settings.
//! - [`FaqEngine`]: built once, queried concurrently through `&self`.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{FaqEngine, FaqRecord};
//!
//! let engine = FaqEngine::new(vec![
//!     FaqRecord::new("What is the fee?", "Rs. 85,000 per year."),
//!     FaqRecord::new("Is there a hostel facility?", "Yes, for boys and girls."),
//! ]);
//!
//! let result = engine.query("what is the fee");
//! assert_eq!(result.matched_question.as_deref(), Some("What is the fee?"));
//! assert_eq!(result.score, 100.0);
//!
//! let declined = engine.query("asdkjasldkj");
//! assert!(declined.matched_question.is_none());
//! ```
//!
//! ## Observability
//!
//! Every layer transition is logged through `tracing`. Attach a
//! [`MatchMetrics`] implementation with [`FaqEngine::with_metrics`] to record
//! the answering layer, latency, and score of each query.

pub mod engine;
pub mod metrics;
pub mod spelling;
pub mod topics;
pub mod types;

pub use crate::engine::FaqEngine;
pub use crate::metrics::MatchMetrics;
pub use crate::spelling::{SpellingCorrector, MISSPELLINGS};
pub use crate::topics::{Topic, TOPICS};
pub use crate::types::{FaqRecord, MatchConfig, MatchError, MatchLayer, MatchResult};
