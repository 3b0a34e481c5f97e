//! HTTP API handlers for moodtune-api

pub mod health;
pub mod summary;

pub use health::health_routes;
pub use summary::summary_routes;
