//! Content-word extraction.
//!
//! Keywords are the vocabulary the spelling corrector draws replacements
//! from, so the filter is strict: no stop words, alphabetic only, and longer
//! than two characters.

use std::collections::BTreeSet;

use fxhash::FxHashSet;
use once_cell::sync::Lazy;

use crate::pipeline::Normalizer;

/// English function words, pronouns, and auxiliaries ignored by keyword
/// extraction. Includes the conversational `tell`.
pub const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she",
    "her", "hers", "herself", "it", "its", "itself", "they", "them", "their",
    "theirs", "themselves", "what", "which", "who", "whom", "this", "that",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of",
    "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once", "here", "there", "when", "where", "why", "how",
    "all", "any", "both", "each", "few", "more", "most", "other", "some",
    "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too",
    "very", "s", "t", "can", "will", "just", "don", "should", "now", "would",
    "could", "shall", "may", "might", "must", "also", "tell",
];

static STOP_WORD_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

/// Returns `true` if `token` is in the stop-word list.
///
/// The check is exact; callers pass normalized (lowercase) tokens.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORD_SET.contains(token)
}

/// Normalize `text` and return its deduplicated content words.
///
/// ```rust
/// use canonical::extract_keywords;
///
/// let words = extract_keywords("Is there a hostel facility for the students?");
/// let words: Vec<&str> = words.iter().map(String::as_str).collect();
/// assert_eq!(words, ["facility", "hostel", "students"]);
/// ```
pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    extract_keywords_with(&Normalizer::default(), text)
}

/// Like [`extract_keywords`], normalizing with an explicit [`Normalizer`].
pub fn extract_keywords_with(normalizer: &Normalizer, text: &str) -> BTreeSet<String> {
    normalizer
        .normalize(text)
        .split_whitespace()
        .filter(|word| is_keyword(word))
        .map(str::to_owned)
        .collect()
}

/// Returns `true` for a normalized token that can be a vocabulary word:
/// alphabetic, longer than two characters, and not a stop word.
pub fn is_keyword(word: &str) -> bool {
    !is_stop_word(word) && word.chars().all(char::is_alphabetic) && word.chars().count() > 2
}
