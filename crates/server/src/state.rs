use crate::config::ServerConfig;
use crate::error::ServerResult;
use faqbot::{FaqBotConfig, FaqEngine, MatchLayer, MatchMetrics};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Engine built once at startup (shared across requests)
    pub engine: Arc<FaqEngine>,

    /// Per-layer query counters fed by the engine
    pub stats: Arc<QueryStats>,

    /// When the state was built, the origin of reported uptime
    pub started_at: Instant,
}

impl ServerState {
    /// Load the FAQ file named by `config` and build the engine.
    ///
    /// A missing or malformed file is an error; an empty FAQ list is not,
    /// the engine starts degraded instead.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let engine = match &config.faqbot_config {
            Some(path) => {
                let faqbot_config = FaqBotConfig::from_file(path)
                    .map_err(|e| crate::error::ServerError::Config(e.to_string()))?;
                faqbot::build_engine(&faqbot_config)?
            }
            None => FaqEngine::new(faqbot::load_faqs_from_path(&config.faq_path)?),
        };

        Ok(Self::with_engine(config, engine))
    }

    /// Wrap an already-built engine.
    pub fn with_engine(config: ServerConfig, engine: FaqEngine) -> Self {
        let stats = Arc::new(QueryStats::default());
        let engine = engine.with_metrics(stats.clone());

        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
            stats,
            started_at: Instant::now(),
        }
    }
}

/// Lock-free counters of answered queries by resolution layer.
#[derive(Debug, Default)]
pub struct QueryStats {
    direct: AtomicU64,
    spelling_corrected: AtomicU64,
    topic_fallback: AtomicU64,
    declined: AtomicU64,
    unavailable: AtomicU64,
    total_latency_us: AtomicU64,
}

impl QueryStats {
    fn counter(&self, layer: MatchLayer) -> &AtomicU64 {
        match layer {
            MatchLayer::Direct => &self.direct,
            MatchLayer::SpellingCorrected => &self.spelling_corrected,
            MatchLayer::TopicFallback => &self.topic_fallback,
            MatchLayer::Declined => &self.declined,
            MatchLayer::Unavailable => &self.unavailable,
        }
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let direct = self.direct.load(Ordering::Relaxed);
        let spelling_corrected = self.spelling_corrected.load(Ordering::Relaxed);
        let topic_fallback = self.topic_fallback.load(Ordering::Relaxed);
        let declined = self.declined.load(Ordering::Relaxed);
        let unavailable = self.unavailable.load(Ordering::Relaxed);
        let total = direct + spelling_corrected + topic_fallback + declined + unavailable;
        let total_latency_us = self.total_latency_us.load(Ordering::Relaxed);

        StatsSnapshot {
            total_queries: total,
            direct,
            spelling_corrected,
            topic_fallback,
            declined,
            unavailable,
            mean_latency_us: if total == 0 { 0 } else { total_latency_us / total },
        }
    }
}

impl MatchMetrics for QueryStats {
    fn record_query(&self, layer: MatchLayer, latency: Duration, score: f64) {
        self.counter(layer).fetch_add(1, Ordering::Relaxed);
        let micros = u64::try_from(latency.as_micros()).unwrap_or(u64::MAX);
        self.total_latency_us.fetch_add(micros, Ordering::Relaxed);
        tracing::debug!(
            layer = layer.as_str(),
            latency_us = micros,
            score,
            "query recorded"
        );
    }
}

/// Point-in-time view of [`QueryStats`] served by `GET /metrics`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub total_queries: u64,
    pub direct: u64,
    pub spelling_corrected: u64,
    pub topic_fallback: u64,
    pub declined: u64,
    pub unavailable: u64,
    pub mean_latency_us: u64,
}
