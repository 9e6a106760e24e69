// Metrics hooks for the matcher.
//
// Callers attach a `MatchMetrics` implementation to a specific engine with
// `FaqEngine::with_metrics`; each call to `FaqEngine::query` then reports the
// layer that answered, the latency, and the score. Keeps instrumentation
// decoupled from any metrics backend.
use std::time::Duration;

use crate::types::MatchLayer;

/// Metrics observer for queries.
pub trait MatchMetrics: Send + Sync {
    /// Record the outcome of one query.
    ///
    /// `layer` is the resolution layer that produced the result, `latency` is
    /// the wall-clock time spent inside the engine, and `score` is the score
    /// returned to the caller.
    fn record_query(&self, layer: MatchLayer, latency: Duration, score: f64);
}
