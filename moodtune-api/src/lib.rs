//! moodtune-api library - Mood Summary Service
//!
//! Exposes the router and shared state so integration tests can drive the
//! service without binding a socket.

use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, Utc};
use moodtune_common::{RandomSelector, TemplateSelector};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod api;
pub mod error;

pub use crate::error::{ApiError, ApiResult};

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "moodtune_api=info,moodtune_common=info,tower_http=info";

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Chooses which summary template is rendered
    pub selector: Arc<dyn TemplateSelector>,
    /// Service startup timestamp for uptime reporting
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// State with an explicit template selector (tests inject a fixed one)
    pub fn new(selector: Arc<dyn TemplateSelector>) -> Self {
        Self {
            selector,
            startup_time: Utc::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(RandomSelector))
    }
}

/// Build application router
///
/// Cross-origin requests are accepted from any origin. A panicking handler
/// answers 500 with an error body. Requests and responses are traced at INFO.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::health_routes())
        .merge(api::summary_routes())
        .with_state(state)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
}
