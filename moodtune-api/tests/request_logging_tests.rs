//! Request logging under the default log filter
//!
//! Runs in its own test binary so the scoped subscriber installed here does
//! not interleave with other suites.

use std::io::Write;
use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use moodtune_api::{build_router, AppState, DEFAULT_LOG_FILTER};
use tower::util::ServiceExt; // for `oneshot` method
use tracing_subscriber::EnvFilter;

/// In-memory log sink shared with the fmt subscriber
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_requests_logged_with_default_filter() {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(DEFAULT_LOG_FILTER))
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = build_router(AppState::default());
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let logs = buffer.contents();
    assert!(logs.contains("started processing request"), "logs: {:?}", logs);
    assert!(logs.contains("finished processing request"), "logs: {:?}", logs);
    assert!(logs.contains("/health"), "logs: {:?}", logs);
}
