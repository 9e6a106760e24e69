//! FAQBot Server - HTTP chat API for the FAQ matching engine
//!
//! Loads an FAQ file once at startup, builds a [`faqbot::FaqEngine`], and
//! answers questions over HTTP.
//!
//! # API Endpoints
//!
//! - `GET /` - Service information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe with FAQ count and degraded flag
//! - `GET /metrics` - Query counters by resolution layer
//! - `POST /api/chat/` - Answer `{"question": "..."}`
//!
//! Citation markers such as `[1]` are stripped from answers before they are
//! returned. Errors use the body `{"error": {"code", "message"}}`.
//!
//! # Configuration
//!
//! [`ServerConfig::load`] reads `.env`, an optional `server.{toml,yaml,json}`
//! file, and `FAQBOT_SERVER__*` environment variables
//! (e.g. `FAQBOT_SERVER__PORT=8080`, `FAQBOT_SERVER__ALLOWED_ORIGIN=...`).
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::{QueryStats, ServerState, StatsSnapshot};
