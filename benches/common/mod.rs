//! Common utilities for FAQBot benchmarks
//!
//! Synthetic corpora and query mixes shared by the benchmark targets.

#![allow(dead_code)]

use faqbot::FaqRecord;

const SUBJECTS: &[&str] = &[
    "fee", "hostel", "bus", "library", "placement", "scholarship", "admission", "course",
    "canteen", "laboratory", "sports", "exam", "semester", "wifi", "principal", "faculty",
];

const FRAMES: &[&str] = &[
    "What is the {} schedule?",
    "Is there a {} office on campus?",
    "Who handles {} queries?",
    "How do I contact the {} department?",
    "When does {} registration open?",
];

/// Build `count` distinct FAQ records from a fixed template grid.
///
/// Records past the grid size get a numeric suffix so every question stays
/// unique.
pub fn generate_faqs(count: usize) -> Vec<FaqRecord> {
    (0..count)
        .map(|i| {
            let subject = SUBJECTS[i % SUBJECTS.len()];
            let frame = FRAMES[(i / SUBJECTS.len()) % FRAMES.len()];
            let round = i / (SUBJECTS.len() * FRAMES.len());
            let mut question = frame.replace("{}", subject);
            if round > 0 {
                question = format!("{question} ({round})");
            }
            FaqRecord::new(question, format!("Answer number {i} about the {subject}."))
        })
        .collect()
}

/// Queries that exercise each resolution layer.
pub const LAYER_QUERIES: &[(&str, &str)] = &[
    ("direct", "What is the fee schedule?"),
    ("spelling", "Who handles hostle queries?"),
    ("topic", "dorm rooms please"),
    ("declined", "asdkjasldkj qwpoeiru"),
];
