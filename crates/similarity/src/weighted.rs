//! Composite scorers built from the primitive ratios.

use serde::{Deserialize, Serialize};

use crate::ratio::{clamp_score, partial_ratio, ratio};
use crate::token::{partial_token_ratio, token_set_ratio, token_sort_ratio};

const UNBASE_SCALE: f64 = 0.95;
const PARTIAL_SCALE: f64 = 0.9;
const LONG_PARTIAL_SCALE: f64 = 0.6;

/// Length-aware combination of whole-string, partial, and token scorers.
///
/// Strings of similar length (longer/shorter < 1.5) take the best of the
/// plain ratio and the scaled token ratios. Strings of very different length
/// lean on partial matching instead, scaled down by 0.9, or by 0.6 once one
/// side is at least eight times longer. Either side empty scores `0.0`.
///
/// ```rust
/// use similarity::weighted_ratio;
///
/// assert_eq!(weighted_ratio("what is the fee", "what is the fee"), 100.0);
/// assert!(weighted_ratio("the fee what is", "what is the fee") >= 95.0);
/// assert_eq!(weighted_ratio("", "fee"), 0.0);
/// ```
pub fn weighted_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let len_a = a.chars().count() as f64;
    let len_b = b.chars().count() as f64;
    let len_ratio = len_a.max(len_b) / len_a.min(len_b);

    let base = ratio(a, b);

    if len_ratio < 1.5 {
        let token = token_sort_ratio(a, b).max(token_set_ratio(a, b));
        return clamp_score(base.max(token * UNBASE_SCALE));
    }

    let partial_scale = if len_ratio < 8.0 {
        PARTIAL_SCALE
    } else {
        LONG_PARTIAL_SCALE
    };

    let partial = partial_ratio(a, b) * partial_scale;
    let partial_token = partial_token_ratio(a, b) * UNBASE_SCALE * partial_scale;

    clamp_score(base.max(partial).max(partial_token))
}

/// Equal blend of [`weighted_ratio`] and [`token_set_ratio`].
///
/// This is the scorer used for whole-question matching.
pub fn hybrid_score(a: &str, b: &str) -> f64 {
    clamp_score(0.5 * weighted_ratio(a, b) + 0.5 * token_set_ratio(a, b))
}

/// Selectable scoring function.
///
/// Lets callers (and configuration) pick a scorer by name without passing
/// function pointers around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Scorer {
    Ratio,
    PartialRatio,
    TokenSort,
    TokenSet,
    PartialToken,
    Weighted,
    #[default]
    Hybrid,
}

impl Scorer {
    /// Score `a` against `b` with this scorer.
    pub fn score(self, a: &str, b: &str) -> f64 {
        match self {
            Scorer::Ratio => ratio(a, b),
            Scorer::PartialRatio => partial_ratio(a, b),
            Scorer::TokenSort => token_sort_ratio(a, b),
            Scorer::TokenSet => token_set_ratio(a, b),
            Scorer::PartialToken => partial_token_ratio(a, b),
            Scorer::Weighted => weighted_ratio(a, b),
            Scorer::Hybrid => hybrid_score(a, b),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Scorer::Ratio => "ratio",
            Scorer::PartialRatio => "partial_ratio",
            Scorer::TokenSort => "token_sort",
            Scorer::TokenSet => "token_set",
            Scorer::PartialToken => "partial_token",
            Scorer::Weighted => "weighted",
            Scorer::Hybrid => "hybrid",
        }
    }
}
