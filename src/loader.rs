//! FAQ file loading.
//!
//! Reads a JSON array of `{"question": ..., "answer": ...}` objects and
//! cleans each record before it reaches the engine: questions are trimmed,
//! answers lose `:contentReference[oaicite:N]{index=N}` markers and are
//! trimmed. Records left without a question or an answer are skipped.

use std::fs;
use std::path::{Path, PathBuf};

use matcher::FaqRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while loading an FAQ file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read FAQ file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse FAQ JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("FAQ data must be a JSON array of objects, found {0}")]
    NotAnArray(&'static str),
}

static CONTENT_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":contentReference\[oaicite:\d+\]\{index=\d+\}")
        .expect("content reference pattern is valid")
});

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFaq {
    question: String,
    answer: String,
}

/// Remove citation markers from an answer and trim it.
///
/// ```rust
/// use faqbot::clean_answer;
///
/// assert_eq!(
///     clean_answer("Yes, there is a hostel.:contentReference[oaicite:3]{index=3} "),
///     "Yes, there is a hostel."
/// );
/// ```
pub fn clean_answer(answer: &str) -> String {
    CONTENT_REFERENCE.replace_all(answer, "").trim().to_string()
}

/// Parse FAQ records from a JSON string.
///
/// An empty array is not an error; the engine handles an empty corpus.
pub fn load_faqs_from_str(json: &str) -> Result<Vec<FaqRecord>, LoadError> {
    let value: Value = serde_json::from_str(json)?;
    let items = match value {
        Value::Array(items) => items,
        other => return Err(LoadError::NotAnArray(json_kind(&other))),
    };

    let total = items.len();
    let mut faqs = Vec::with_capacity(total);
    for (position, item) in items.into_iter().enumerate() {
        let raw: RawFaq = match serde_json::from_value(item) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(position, error = %err, "skipping malformed FAQ record");
                continue;
            }
        };

        let question = raw.question.trim().to_string();
        let answer = clean_answer(&raw.answer);
        if question.is_empty() || answer.is_empty() {
            warn!(position, "skipping FAQ record with empty question or answer");
            continue;
        }
        faqs.push(FaqRecord { question, answer });
    }

    info!(loaded = faqs.len(), skipped = total - faqs.len(), "FAQ records loaded");
    Ok(faqs)
}

/// Read and parse an FAQ file.
pub fn load_faqs_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<FaqRecord>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_faqs_from_str(&content)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_and_cleans_records() {
        let json = r#"[
            {"question": "  What is the fee?  ", "answer": "Rs. 85,000.:contentReference[oaicite:0]{index=0}"},
            {"question": "Is there a hostel?", "answer": "  Yes.  "}
        ]"#;
        let faqs = load_faqs_from_str(json).unwrap();
        assert_eq!(faqs.len(), 2);
        assert_eq!(faqs[0].question, "What is the fee?");
        assert_eq!(faqs[0].answer, "Rs. 85,000.");
        assert_eq!(faqs[1].answer, "Yes.");
    }

    #[test]
    fn skips_empty_and_malformed_records() {
        let json = r#"[
            {"question": "   ", "answer": "orphan answer"},
            {"question": "Orphan question", "answer": ":contentReference[oaicite:12]{index=12}"},
            {"question": "No answer field"},
            42,
            {"question": "Kept?", "answer": "Kept."}
        ]"#;
        let faqs = load_faqs_from_str(json).unwrap();
        assert_eq!(faqs, vec![FaqRecord::new("Kept?", "Kept.")]);
    }

    #[test]
    fn empty_array_is_not_an_error() {
        assert!(load_faqs_from_str("[]").unwrap().is_empty());
    }

    #[test]
    fn non_array_document_is_rejected() {
        let err = load_faqs_from_str(r#"{"question": "q", "answer": "a"}"#).unwrap_err();
        assert!(matches!(err, LoadError::NotAnArray("an object")));
    }

    #[test]
    fn invalid_json_is_rejected() {
        let err = load_faqs_from_str("[{").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_faqs_from_path("/definitely/not/here/faqs.json").unwrap_err();
        match err {
            LoadError::Io { path, .. } => assert!(path.ends_with("faqs.json")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"[{"question": "Q?", "answer": "A."}]"#)
            .unwrap();
        let faqs = load_faqs_from_path(file.path()).unwrap();
        assert_eq!(faqs, vec![FaqRecord::new("Q?", "A.")]);
    }

    #[test]
    fn other_brackets_survive_cleaning() {
        assert_eq!(clean_answer("See [1] and {index=2}"), "See [1] and {index=2}");
    }
}
