//! Character-level edit ratios.

/// Normalized Levenshtein similarity on a 0–100 scale.
///
/// Two empty strings are identical (`100.0`); one empty string against a
/// non-empty one scores `0.0`.
///
/// ```rust
/// use similarity::ratio;
///
/// assert_eq!(ratio("fee", "fee"), 100.0);
/// assert_eq!(ratio("abc", "xyz"), 0.0);
/// ```
pub fn ratio(a: &str, b: &str) -> f64 {
    clamp_score(strsim::normalized_levenshtein(a, b) * 100.0)
}

/// Best [`ratio`] of the shorter string against every equal-length window
/// of the longer one.
///
/// A shorter string that occurs verbatim inside the longer one scores
/// `100.0`.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let (short, short_len, long) = if a_len <= b_len {
        (a, a_len, b)
    } else {
        (b, b_len, a)
    };

    if short_len == 0 {
        return if long.is_empty() { 100.0 } else { 0.0 };
    }
    if long.contains(short) {
        return 100.0;
    }

    let long_chars: Vec<char> = long.chars().collect();
    let mut best = 0.0_f64;
    let mut window = String::with_capacity(short.len());
    for slice in long_chars.windows(short_len) {
        window.clear();
        window.extend(slice.iter());
        best = best.max(ratio(short, &window));
    }
    best
}

pub(crate) fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_counts_unicode_chars() {
        let score = ratio("kitten", "sitting");
        assert!((score - 100.0 * (1.0 - 3.0 / 7.0)).abs() < 1e-9);
        assert_eq!(ratio("café", "café"), 100.0);
    }

    #[test]
    fn ratio_empty_inputs() {
        assert_eq!(ratio("", ""), 100.0);
        assert_eq!(ratio("", "fee"), 0.0);
    }

    #[test]
    fn partial_ratio_finds_substrings() {
        assert_eq!(partial_ratio("dorm", "do you have dorm rooms"), 100.0);
        assert_eq!(partial_ratio("do you have dorm rooms", "dorm"), 100.0);
        assert_eq!(
            partial_ratio("managing director", "who is the managing director"),
            100.0
        );
    }

    #[test]
    fn partial_ratio_scores_near_windows() {
        // "hostal" is one substitution away from the "hostel" window.
        let score = partial_ratio("hostal", "is there a hostel");
        assert!((score - 100.0 * (5.0 / 6.0)).abs() < 1e-9);
    }

    #[test]
    fn partial_ratio_empty_inputs() {
        assert_eq!(partial_ratio("", ""), 100.0);
        assert_eq!(partial_ratio("", "fee"), 0.0);
        assert_eq!(partial_ratio("fee", ""), 0.0);
    }
}
