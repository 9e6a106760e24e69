//! Token-level spelling correction against the knowledge-base vocabulary.

use std::collections::BTreeSet;

use canonical::is_keyword;
use fxhash::FxHashMap;
use once_cell::sync::Lazy;
use similarity::{extract_one, Scorer};

/// Known misspellings substituted before any fuzzy lookup.
pub const MISSPELLINGS: &[(&str, &str)] = &[
    ("hte", "the"),
    ("teh", "the"),
    ("principol", "principal"),
    ("princple", "principal"),
    ("adress", "address"),
    ("addres", "address"),
    ("admision", "admission"),
    ("addmission", "admission"),
    ("colege", "college"),
    ("collge", "college"),
    ("hostal", "hostel"),
    ("hostle", "hostel"),
    ("scholorship", "scholarship"),
    ("placment", "placement"),
    ("cource", "course"),
];

static MISSPELLING_TABLE: Lazy<FxHashMap<&'static str, &'static str>> =
    Lazy::new(|| MISSPELLINGS.iter().copied().collect());

/// Corrects each token of a normalized query independently.
///
/// A token in [`MISSPELLINGS`] is replaced directly. Tokens that could not be
/// vocabulary words (stop words, non-alphabetic tokens, two characters or
/// fewer) and tokens already in the vocabulary are kept. Any other token is
/// replaced by the vocabulary word with the highest weighted ratio when that
/// score reaches the threshold; ties go to the alphabetically first word.
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    vocabulary: Vec<String>,
    threshold: f64,
}

impl SpellingCorrector {
    pub fn new(vocabulary: &BTreeSet<String>, threshold: f64) -> Self {
        Self {
            vocabulary: vocabulary.iter().cloned().collect(),
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Correct every whitespace-separated token and rejoin with single
    /// spaces.
    ///
    /// ```rust
    /// use std::collections::BTreeSet;
    /// use matcher::SpellingCorrector;
    ///
    /// let vocab: BTreeSet<String> = ["hostel".to_string()].into_iter().collect();
    /// let corrector = SpellingCorrector::new(&vocab, 80.0);
    /// assert_eq!(corrector.correct("hte hostal"), "the hostel");
    /// ```
    pub fn correct(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for token in text.split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(self.correct_token(token));
        }
        out
    }

    fn is_known(&self, token: &str) -> bool {
        self.vocabulary
            .binary_search_by(|word| word.as_str().cmp(token))
            .is_ok()
    }

    /// Correct a single token.
    pub fn correct_token<'a>(&'a self, token: &'a str) -> &'a str {
        if let Some(&fixed) = MISSPELLING_TABLE.get(token) {
            return fixed;
        }
        if !is_keyword(token) || self.is_known(token) {
            return token;
        }
        match extract_one(token, &self.vocabulary, Scorer::Weighted, self.threshold) {
            Some(best) => best.choice,
            None => token,
        }
    }
}
