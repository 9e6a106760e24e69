use faqbot::{FaqEngine, FaqRecord, MatchResult, normalize};

fn corpus() -> Vec<FaqRecord> {
    vec![
        FaqRecord::new("What is the fee?", "Rs. 85,000 per year."),
        FaqRecord::new("Who is the M.D.?", "Sri K. Ramachandra Rao."),
        FaqRecord::new("Is there a hostel facility?", "Yes, for boys and girls."),
        FaqRecord::new("Who is the principal?", "Dr. M. Muralidhar Rao."),
    ]
}

const QUERIES: &[&str] = &[
    "What is the fee?",
    "what is teh fee",
    "Who is the managing director",
    "do you have dorm rooms",
    "asdkjasldkj",
    "",
    "   ",
    "FEE???",
];

#[test]
fn equivalent_inputs_normalize_identically() {
    let variants = [
        "  What IS the FEE?? ",
        "what is the fee",
        "What\tis\nthe fee.",
        "WHAT, IS; THE: FEE!",
    ];
    let expected = normalize(variants[0]);
    assert_eq!(expected, "what is the fee");
    for variant in variants {
        assert_eq!(normalize(variant), expected, "variant {variant:?}");
    }
}

#[test]
fn equivalent_inputs_get_identical_answers() {
    let engine = FaqEngine::new(corpus());
    let a = engine.query("  What IS the FEE?? ");
    let b = engine.query("what is the fee");
    assert_eq!(a, b);
    assert_eq!(a.score, 100.0);
}

#[test]
fn abbreviation_in_stored_question_matches_long_form() {
    let engine = FaqEngine::new(corpus());
    let result = engine.query("Who is the managing director?");
    assert_eq!(result.matched_question.as_deref(), Some("Who is the M.D.?"));
    assert_eq!(result.score, 100.0);
}

#[test]
fn repeated_queries_are_identical() {
    let engine = FaqEngine::new(corpus());
    let first: Vec<MatchResult> = QUERIES.iter().map(|q| engine.query(q)).collect();
    for _ in 0..5 {
        let again: Vec<MatchResult> = QUERIES.iter().map(|q| engine.query(q)).collect();
        assert_eq!(first, again);
    }
}

#[test]
fn independently_built_engines_agree() {
    let a = FaqEngine::new(corpus());
    let b = FaqEngine::new(corpus());
    assert_eq!(a.vocabulary(), b.vocabulary());
    assert_eq!(a.processed_questions(), b.processed_questions());
    for query in QUERIES {
        assert_eq!(a.query(query), b.query(query), "query {query:?}");
    }
}

#[test]
fn normalization_is_idempotent_on_stored_questions() {
    for faq in corpus() {
        let once = normalize(&faq.question);
        assert_eq!(normalize(&once), once);
    }
}
