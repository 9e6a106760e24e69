//! FAQBot canonical text layer.
//!
//! Turns free text (stored FAQ questions and user queries alike) into one
//! comparable form so that the similarity layer compares words, not
//! formatting.
//!
//! ## What we do
//!
//! - Lowercasing (locale-free)
//! - Abbreviation expansion from a fixed table (`md` → `managing director`)
//! - Punctuation removal (anything that is not a word character or whitespace)
//! - Whitespace collapsing and trimming
//! - Keyword extraction (stop words removed) for the correction vocabulary
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Same text and config in,
//! same output out.
//!
//! ## Invariants worth knowing
//!
//! - `normalize(normalize(x)) == normalize(x)` for every string `x`
//! - Output contains no leading, trailing, or doubled spaces
//! - Keywords are alphabetic, longer than two characters, never stop words

mod abbreviation;
mod config;
mod error;
mod keywords;
mod pipeline;
mod whitespace;

pub use crate::abbreviation::{expand_abbreviations, lookup_abbreviation, ABBREVIATIONS};
pub use crate::config::CanonicalizeConfig;
pub use crate::error::CanonicalError;
pub use crate::keywords::{extract_keywords, extract_keywords_with, is_keyword, is_stop_word, STOP_WORDS};
pub use crate::pipeline::{normalize, normalize_with_config, strip_punctuation, Normalizer};
pub use crate::whitespace::collapse_whitespace;
