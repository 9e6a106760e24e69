//! Best-choice selection over a candidate list.

use rayon::prelude::*;

use crate::weighted::Scorer;

/// Winning candidate from [`extract_one`].
#[derive(Debug, Clone, PartialEq)]
pub struct BestMatch<'a> {
    /// The candidate text that won.
    pub choice: &'a str,
    /// Its score against the query, 0–100.
    pub score: f64,
    /// Position of the candidate in the input slice.
    pub index: usize,
}

/// Score `query` against every choice and return the best one scoring at
/// least `cutoff`.
///
/// Ties go to the earliest choice. Returns `None` for an empty slice or when
/// nothing reaches the cutoff.
///
/// ```rust
/// use similarity::{extract_one, Scorer};
///
/// let choices = ["bus timings", "hostel fee", "hostel fee"];
/// let best = extract_one("hostel fees", &choices, Scorer::Hybrid, 80.0).unwrap();
/// assert_eq!(best.index, 1);
/// assert!(extract_one("zzz", &choices, Scorer::Hybrid, 80.0).is_none());
/// ```
pub fn extract_one<'a, S>(
    query: &str,
    choices: &'a [S],
    scorer: Scorer,
    cutoff: f64,
) -> Option<BestMatch<'a>>
where
    S: AsRef<str>,
{
    let scores = choices.iter().map(|choice| scorer.score(query, choice.as_ref()));
    select_best(choices, scores, cutoff)
}

/// Same result as [`extract_one`], with candidate scoring spread over the
/// rayon pool.
///
/// Selection stays sequential so tie-breaking matches the serial version.
pub fn extract_one_parallel<'a, S>(
    query: &str,
    choices: &'a [S],
    scorer: Scorer,
    cutoff: f64,
) -> Option<BestMatch<'a>>
where
    S: AsRef<str> + Sync,
{
    let scores: Vec<f64> = choices
        .par_iter()
        .map(|choice| scorer.score(query, choice.as_ref()))
        .collect();
    select_best(choices, scores, cutoff)
}

fn select_best<'a, S, I>(choices: &'a [S], scores: I, cutoff: f64) -> Option<BestMatch<'a>>
where
    S: AsRef<str>,
    I: IntoIterator<Item = f64>,
{
    let mut best: Option<(usize, f64)> = None;
    for (index, score) in scores.into_iter().enumerate() {
        if score < cutoff {
            continue;
        }
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((index, score)),
        }
    }
    best.map(|(index, score)| BestMatch {
        choice: choices[index].as_ref(),
        score,
        index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHOICES: &[&str] = &[
        "what are the college timings",
        "what is the fee",
        "is there a hostel facility",
        "what is the fee",
        "who is the principal",
    ];

    #[test]
    fn exact_choice_wins() {
        let best = extract_one("who is the principal", CHOICES, Scorer::Hybrid, 90.0)
            .expect("match");
        assert_eq!(best.index, 4);
        assert_eq!(best.choice, "who is the principal");
        assert_eq!(best.score, 100.0);
    }

    #[test]
    fn ties_go_to_first_choice() {
        let best = extract_one("what is the fee", CHOICES, Scorer::Hybrid, 90.0).expect("match");
        assert_eq!(best.index, 1);
    }

    #[test]
    fn cutoff_is_inclusive() {
        let best = extract_one("what is the fee", CHOICES, Scorer::Hybrid, 100.0);
        assert_eq!(best.map(|b| b.index), Some(1));
    }

    #[test]
    fn nothing_above_cutoff() {
        assert!(extract_one("asdkjasldkj", CHOICES, Scorer::Hybrid, 80.0).is_none());
    }

    #[test]
    fn empty_choices() {
        let empty: &[String] = &[];
        assert!(extract_one("fee", empty, Scorer::Hybrid, 0.0).is_none());
        assert!(extract_one_parallel("fee", empty, Scorer::Hybrid, 0.0).is_none());
    }

    #[test]
    fn parallel_matches_serial() {
        let choices: Vec<String> = (0..200)
            .map(|i| format!("question number {} about topic {}", i, i % 7))
            .chain(CHOICES.iter().map(|s| s.to_string()))
            .collect();
        for query in ["what is the fee", "question number 42", "topic 3", "zzz"] {
            for cutoff in [0.0, 50.0, 90.0] {
                let serial = extract_one(query, &choices, Scorer::Hybrid, cutoff);
                let parallel = extract_one_parallel(query, &choices, Scorer::Hybrid, cutoff);
                assert_eq!(serial, parallel, "query {query:?} cutoff {cutoff}");
            }
        }
    }
}
