//! Fixed abbreviation table used during normalization.

use fxhash::FxHashMap;
use once_cell::sync::Lazy;

/// Abbreviation → expansion pairs.
///
/// Keys are lowercase and may contain inner periods. No expansion contains a
/// key as one of its tokens, which keeps normalization idempotent.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("md", "managing director"),
    ("m.d", "managing director"),
    ("m.e", "mtech"),
    ("b.e", "btech"),
    ("b.tech", "btech"),
    ("m.tech", "mtech"),
    ("mba", "mba"),
    ("bba", "bba"),
];

static TABLE: Lazy<FxHashMap<&'static str, &'static str>> =
    Lazy::new(|| ABBREVIATIONS.iter().copied().collect());

/// Look up the expansion for a single token.
///
/// Trailing periods are ignored, so `"m.d."` and `"m.d"` resolve to the same
/// entry.
pub fn lookup_abbreviation(token: &str) -> Option<&'static str> {
    TABLE.get(token.trim_end_matches('.')).copied()
}

/// Split on whitespace, expand every known abbreviation, and rejoin with
/// single spaces.
pub fn expand_abbreviations(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for token in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(lookup_abbreviation(token).unwrap_or(token));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_periods_are_ignored() {
        assert_eq!(lookup_abbreviation("md."), Some("managing director"));
        assert_eq!(lookup_abbreviation("m.d."), Some("managing director"));
        assert_eq!(lookup_abbreviation("b.tech"), Some("btech"));
        assert_eq!(lookup_abbreviation("mdx"), None);
    }

    #[test]
    fn expansions_never_contain_keys() {
        for (_, expansion) in ABBREVIATIONS {
            for token in expansion.split_whitespace() {
                let expanded = lookup_abbreviation(token);
                assert!(
                    expanded.is_none() || expanded == Some(*expansion),
                    "expansion token {token:?} re-expands"
                );
            }
        }
    }

    #[test]
    fn expand_rejoins_with_single_spaces() {
        assert_eq!(
            expand_abbreviations("who  is the md"),
            "who is the managing director"
        );
        assert_eq!(expand_abbreviations("   "), "");
    }
}
