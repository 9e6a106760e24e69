//! Whitespace normalization.
//!
//! Uses Unicode's definition of whitespace (tabs, newlines, non-breaking
//! spaces, ...). Every run becomes one ASCII space and the edges are trimmed.
//!
//! ```rust
//! use canonical::collapse_whitespace;
//!
//! assert_eq!(collapse_whitespace("  hello \t\n world  "), "hello world");
//! assert_eq!(collapse_whitespace("hello\u{00A0}world"), "hello world");
//! assert_eq!(collapse_whitespace("   "), "");
//! ```

/// Collapses repeated whitespace to single spaces and trims both ends.
///
/// Returns an empty string for empty or whitespace-only input.
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}
