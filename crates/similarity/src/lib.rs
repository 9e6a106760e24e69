//! FAQBot similarity layer.
//!
//! Pure string scorers on a 0–100 scale plus best-match selection. Callers
//! normalize text first (see the `canonical` crate); scorers here compare
//! characters and whitespace-separated tokens exactly as given.
//!
//! ## Scorers
//!
//! - [`ratio`]: normalized Levenshtein similarity
//! - [`partial_ratio`]: best window of the longer string
//! - [`token_sort_ratio`], [`token_set_ratio`], [`partial_token_ratio`]:
//!   word-order and word-set insensitive variants
//! - [`weighted_ratio`]: length-aware mix of the above
//! - [`hybrid_score`]: `0.5 * weighted_ratio + 0.5 * token_set_ratio`
//!
//! Every scorer is deterministic and clamped to `[0, 100]`.
//!
//! ## Selection
//!
//! [`extract_one`] picks the highest-scoring candidate at or above a cutoff,
//! preferring the earliest on ties. [`extract_one_parallel`] scores on the
//! rayon pool and returns the identical result.

mod extract;
mod ratio;
mod token;
mod weighted;

pub use crate::extract::{extract_one, extract_one_parallel, BestMatch};
pub use crate::ratio::{partial_ratio, ratio};
pub use crate::token::{partial_token_ratio, token_set_ratio, token_sort_ratio};
pub use crate::weighted::{hybrid_score, weighted_ratio, Scorer};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn misspelled_query_still_scores_high() {
        let score = hybrid_score("what is the hostal fee", "what is the hostel fee");
        assert!(score > 80.0, "score was {score}");
    }

    #[test]
    fn reordered_question_scores_high() {
        let score = hybrid_score("fee for the hostel", "hostel fee for the");
        assert!(score >= 95.0, "score was {score}");
    }

    #[test]
    fn scorers_are_symmetric_where_expected() {
        let a = "is there a hostel facility";
        let b = "hostel";
        assert_eq!(token_set_ratio(a, b), token_set_ratio(b, a));
        assert_eq!(partial_ratio(a, b), partial_ratio(b, a));
        assert_eq!(ratio(a, b), ratio(b, a));
    }
}
