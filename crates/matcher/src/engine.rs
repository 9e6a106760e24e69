use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use canonical::{extract_keywords_with, Normalizer};
use fxhash::FxHashMap;
use similarity::{extract_one, extract_one_parallel, partial_ratio, BestMatch, Scorer};
use tracing::{debug, info, warn};

use crate::metrics::MatchMetrics;
use crate::spelling::SpellingCorrector;
use crate::topics::{Topic, TOPICS};
use crate::types::{FaqRecord, MatchConfig, MatchError, MatchLayer, MatchResult};


/// Layered FAQ matcher.
///
/// Built once from a fixed list of FAQs and read-only afterwards, so a
/// single instance can be shared as `Arc<FaqEngine>` across threads.
pub struct FaqEngine {
    faqs: Vec<FaqRecord>,
    processed_questions: Vec<String>,
    processed_question_to_indices: FxHashMap<String, Vec<usize>>,
    vocabulary: BTreeSet<String>,
    corrector: SpellingCorrector,
    normalizer: Normalizer,
    config: MatchConfig,
    metrics: Option<Arc<dyn MatchMetrics>>,
}

impl FaqEngine {
    /// Build an engine with the default configuration.
    ///
    /// Never fails. An empty list puts the engine in degraded mode, where
    /// every query returns the unavailable message.
    pub fn new(faqs: Vec<FaqRecord>) -> Self {
        let config = MatchConfig::default();
        let normalizer = Normalizer::new(config.canonical.clone()).unwrap_or_default();
        Self::build(faqs, config, normalizer)
    }

    /// Build an engine with an explicit configuration.
    pub fn with_config(faqs: Vec<FaqRecord>, config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        let normalizer = Normalizer::new(config.canonical.clone())
            .map_err(|e| MatchError::InvalidConfig(e.to_string()))?;
        Ok(Self::build(faqs, config, normalizer))
    }

    /// Attach a metrics observer to this engine.
    pub fn with_metrics(mut self, metrics: Arc<dyn MatchMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    fn build(faqs: Vec<FaqRecord>, config: MatchConfig, normalizer: Normalizer) -> Self {
        if faqs.is_empty() {
            warn!("no FAQs provided; engine running in degraded mode");
        }

        let processed_questions: Vec<String> = faqs
            .iter()
            .map(|faq| normalizer.normalize(&faq.question))
            .collect();

        let mut processed_question_to_indices: FxHashMap<String, Vec<usize>> =
            FxHashMap::default();
        for (idx, question) in processed_questions.iter().enumerate() {
            processed_question_to_indices
                .entry(question.clone())
                .or_default()
                .push(idx);
        }

        let mut vocabulary = BTreeSet::new();
        for faq in &faqs {
            let text = format!("{} {}", faq.question, faq.answer);
            vocabulary.extend(extract_keywords_with(&normalizer, &text));
        }

        let corrector = SpellingCorrector::new(&vocabulary, config.spelling_correction_threshold);

        info!(
            faq_count = faqs.len(),
            distinct_questions = processed_question_to_indices.len(),
            vocabulary_size = vocabulary.len(),
            "faq engine initialized"
        );

        Self {
            faqs,
            processed_questions,
            processed_question_to_indices,
            vocabulary,
            corrector,
            normalizer,
            config,
            metrics: None,
        }
    }

    pub fn len(&self) -> usize {
        self.faqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faqs.is_empty()
    }

    /// `true` when built from an empty FAQ list.
    pub fn is_degraded(&self) -> bool {
        self.faqs.is_empty()
    }

    pub fn faqs(&self) -> &[FaqRecord] {
        &self.faqs
    }

    /// Normalized questions, index-aligned with [`FaqEngine::faqs`].
    pub fn processed_questions(&self) -> &[String] {
        &self.processed_questions
    }

    /// Correction dictionary built from every question and answer.
    pub fn vocabulary(&self) -> &BTreeSet<String> {
        &self.vocabulary
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Answer a raw user question.
    ///
    /// Never fails: empty or unmatched input resolves to the decline answer
    /// with score `0`.
    pub fn query(&self, raw: &str) -> MatchResult {
        self.query_with_layer(raw).0
    }

    /// Like [`FaqEngine::query`], also reporting which layer resolved it.
    pub fn query_with_layer(&self, raw: &str) -> (MatchResult, MatchLayer) {
        let start = Instant::now();
        let (result, layer) = self.resolve(raw);
        let latency = start.elapsed();

        if let Some(metrics) = &self.metrics {
            metrics.record_query(layer, latency, result.score);
        }

        (result, layer)
    }

    fn resolve(&self, raw: &str) -> (MatchResult, MatchLayer) {
        if self.faqs.is_empty() {
            warn!("query received while knowledge base is empty");
            return (
                MatchResult::unmatched(&self.config.unavailable_message),
                MatchLayer::Unavailable,
            );
        }

        let clean = self.normalizer.normalize(raw);
        info!(question = raw, normalized = %clean, "processing question");

        if let Some((idx, score)) = self.best_question(&clean, self.config.direct_match_cutoff) {
            return self.answer(idx, score, MatchLayer::Direct);
        }

        debug!("no direct match, attempting spelling correction");
        let corrected = self.corrector.correct(&clean);
        if corrected != clean {
            info!(corrected = %corrected, "spelling corrected");
        }
        if let Some((idx, score)) =
            self.best_question(&corrected, self.config.spelling_correction_threshold)
        {
            return self.answer(idx, score, MatchLayer::SpellingCorrected);
        }

        debug!("no spelling-corrected match, attempting topic fallback");
        if let Some((idx, score)) = self.topic_fallback(&corrected) {
            return self.answer(idx, score, MatchLayer::TopicFallback);
        }

        info!("no match found in any layer");
        (
            MatchResult::unmatched(&self.config.decline_message),
            MatchLayer::Declined,
        )
    }

    fn answer(&self, idx: usize, score: f64, layer: MatchLayer) -> (MatchResult, MatchLayer) {
        let faq = &self.faqs[idx];
        info!(
            layer = layer.as_str(),
            matched_question = %faq.question,
            score,
            "match found"
        );
        let result = MatchResult {
            answer: faq.answer.clone(),
            matched_question: Some(faq.question.clone()),
            score: score.clamp(0.0, 100.0),
        };
        (result, layer)
    }

    /// Hybrid-score `query` against every stored question.
    ///
    /// Returns the first FAQ index carrying the winning normalized text.
    fn best_question(&self, query: &str, cutoff: f64) -> Option<(usize, f64)> {
        let best = self.extract(query, &self.processed_questions, Scorer::Hybrid, cutoff)?;
        let idx = self
            .processed_question_to_indices
            .get(best.choice)
            .and_then(|indices| indices.first().copied())
            .unwrap_or(best.index);
        Some((idx, best.score))
    }

    fn extract<'a>(
        &self,
        query: &str,
        choices: &'a [String],
        scorer: Scorer,
        cutoff: f64,
    ) -> Option<BestMatch<'a>> {
        if self.config.use_parallel {
            extract_one_parallel(query, choices, scorer, cutoff)
        } else {
            extract_one(query, choices, scorer, cutoff)
        }
    }

    fn topic_fallback(&self, corrected: &str) -> Option<(usize, f64)> {
        let topic = self.triggered_topic(corrected)?;
        info!(topic = topic.keyword, "fallback keyword detected");

        let candidates = self.topic_candidates(topic);
        if candidates.is_empty() {
            debug!(topic = topic.keyword, "no candidate questions for topic");
            return None;
        }

        let candidate_questions: Vec<&str> = candidates
            .iter()
            .map(|&idx| self.processed_questions[idx].as_str())
            .collect();

        let best = extract_one(
            topic.keyword,
            &candidate_questions,
            Scorer::TokenSet,
            self.config.fallback_cutoff,
        )?;
        Some((candidates[best.index], best.score))
    }

    /// Indices of stored questions close to any term of `topic`, in FAQ
    /// order, each listed once.
    fn topic_candidates(&self, topic: &Topic) -> Vec<usize> {
        self.processed_questions
            .iter()
            .enumerate()
            .filter(|(_, question)| {
                topic
                    .terms()
                    .any(|term| partial_ratio(term, question) >= self.config.candidate_cutoff)
            })
            .map(|(idx, _)| idx)
            .collect()
    }

    /// First topic with a term found, approximately, inside the query.
    ///
    /// Terms longer than the query never trigger; otherwise a short query
    /// would be matched inside the term instead.
    fn triggered_topic(&self, query: &str) -> Option<&'static Topic> {
        let query_len = query.chars().count();
        TOPICS.iter().find(|topic| {
            topic.terms().any(|term| {
                term.chars().count() <= query_len
                    && partial_ratio(term, query) >= self.config.topic_trigger_cutoff
            })
        })
    }
}

impl fmt::Debug for FaqEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FaqEngine")
            .field("faq_count", &self.faqs.len())
            .field("vocabulary_size", &self.vocabulary.len())
            .field("config", &self.config)
            .field("metrics", &self.metrics.is_some())
            .finish_non_exhaustive()
    }
}
