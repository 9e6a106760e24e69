//! Token-order and token-set comparisons.
//!
//! Tokens are whitespace-separated words. Inputs are expected to be
//! normalized already; nothing here lowercases or strips punctuation.

use std::collections::BTreeSet;

use crate::ratio::{partial_ratio, ratio};

fn token_set(text: &str) -> BTreeSet<&str> {
    text.split_whitespace().collect()
}

fn sorted_tokens(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn join<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for token in tokens {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token.as_ref());
    }
    out
}

/// [`ratio`] after sorting both token lists alphabetically.
///
/// ```rust
/// use similarity::token_sort_ratio;
///
/// assert_eq!(token_sort_ratio("fee what is the", "what is the fee"), 100.0);
/// ```
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Set-based comparison that ignores duplicates and word order.
///
/// Scores `100.0` when the token sets share at least one word and one set is
/// a subset of the other. Otherwise compares the shared words against each
/// side's shared-plus-remaining words and keeps the best. Returns `0.0` when
/// either side has no tokens.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a = token_set(a);
    let tokens_b = token_set(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let common: Vec<&&str> = tokens_a.intersection(&tokens_b).collect();
    let only_a: Vec<&&str> = tokens_a.difference(&tokens_b).collect();
    let only_b: Vec<&&str> = tokens_b.difference(&tokens_a).collect();

    if !common.is_empty() && (only_a.is_empty() || only_b.is_empty()) {
        return 100.0;
    }

    let sect = join(common);
    let diff_a = join(only_a);
    let diff_b = join(only_b);

    if sect.is_empty() {
        return ratio(&diff_a, &diff_b);
    }

    let combined_a = format!("{sect} {diff_a}");
    let combined_b = format!("{sect} {diff_b}");

    ratio(&sect, &combined_a)
        .max(ratio(&sect, &combined_b))
        .max(ratio(&combined_a, &combined_b))
}

/// Token-level partial comparison.
///
/// Any shared word scores `100.0`. Otherwise the sorted token strings are
/// compared with [`partial_ratio`]. Returns `0.0` when either side has no
/// tokens.
pub fn partial_token_ratio(a: &str, b: &str) -> f64 {
    let tokens_a = token_set(a);
    let tokens_b = token_set(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }
    if tokens_a.intersection(&tokens_b).next().is_some() {
        return 100.0;
    }
    partial_ratio(&join(&tokens_a), &join(&tokens_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_sort_ignores_order_not_content() {
        assert_eq!(token_sort_ratio("hostel fee", "fee hostel"), 100.0);
        assert!(token_sort_ratio("hostel fee", "bus fee") < 100.0);
    }

    #[test]
    fn token_set_subset_is_full_match() {
        assert_eq!(token_set_ratio("hostel", "is there a hostel facility"), 100.0);
        assert_eq!(token_set_ratio("fee fee fee", "fee"), 100.0);
    }

    #[test]
    fn token_set_partial_overlap() {
        let score = token_set_ratio("hostel fee amount", "hostel timings");
        assert!(score > 0.0 && score < 100.0);
    }

    #[test]
    fn token_set_without_overlap_is_low() {
        assert!(token_set_ratio("abc def", "xyz") < 50.0);
    }

    #[test]
    fn token_scorers_on_empty_tokens() {
        assert_eq!(token_set_ratio("", "fee"), 0.0);
        assert_eq!(token_set_ratio("   ", "fee"), 0.0);
        assert_eq!(partial_token_ratio("fee", ""), 0.0);
    }

    #[test]
    fn partial_token_shared_word() {
        assert_eq!(partial_token_ratio("bus timings", "is there a bus"), 100.0);
    }
}
