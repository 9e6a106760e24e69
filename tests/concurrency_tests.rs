//! Concurrency and thread safety tests for FAQBot

use std::sync::Arc;
use std::thread;

use faqbot::{FaqEngine, FaqRecord, MatchConfig, MatchResult, normalize};

fn shared_engine(config: MatchConfig) -> Arc<FaqEngine> {
    let faqs = vec![
        FaqRecord::new("What is the fee?", "Rs. 85,000 per year."),
        FaqRecord::new("Who is the Managing Director?", "Sri K. Ramachandra Rao."),
        FaqRecord::new("Is there a hostel facility?", "Yes, for boys and girls."),
        FaqRecord::new("Who is the principal?", "Dr. M. Muralidhar Rao."),
        FaqRecord::new("Is bus transport available?", "Buses run daily from Eluru."),
    ];
    Arc::new(FaqEngine::with_config(faqs, config).expect("valid config"))
}

const QUERIES: &[&str] = &[
    "What is the fee?",
    "who is hte principol",
    "do you have dorm rooms",
    "bus timings",
    "asdkjasldkj",
    "",
];

#[test]
fn concurrent_queries_match_sequential_results() {
    let engine = shared_engine(MatchConfig::default());
    let expected: Vec<MatchResult> = QUERIES.iter().map(|q| engine.query(q)).collect();
    let expected = Arc::new(expected);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let engine = Arc::clone(&engine);
            let expected = Arc::clone(&expected);
            thread::spawn(move || {
                for round in 0..20 {
                    let idx = (i + round) % QUERIES.len();
                    let result = engine.query(QUERIES[idx]);
                    assert_eq!(result, expected[idx], "thread {i} query {:?}", QUERIES[idx]);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn concurrent_queries_with_parallel_scoring() {
    let serial = shared_engine(MatchConfig::default());
    let parallel = shared_engine(MatchConfig {
        use_parallel: true,
        ..MatchConfig::default()
    });

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let serial = Arc::clone(&serial);
            let parallel = Arc::clone(&parallel);
            thread::spawn(move || {
                for query in QUERIES {
                    assert_eq!(serial.query(query), parallel.query(query));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn concurrent_normalize_is_consistent() {
    let text = "  Who is the M.D. of the B.Tech dept?? ";
    let handles: Vec<_> = (0..10)
        .map(|_| thread::spawn(move || normalize(text)))
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for (i, result) in results.iter().enumerate() {
        assert_eq!(
            result, "who is the managing director of the btech dept",
            "thread {i} produced different text",
        );
    }
}
