//! moodtune-api - Mood Summary Service
//!
//! Serves `POST /generate-summary` and `GET /health` on port 5000 unless
//! overridden with `--port` or `MOODTUNE_PORT`.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moodtune_api::{build_router, AppState, DEFAULT_LOG_FILTER};

/// Command-line arguments for moodtune-api
#[derive(Parser, Debug)]
#[command(name = "moodtune-api")]
#[command(about = "Mood summary and genre recommendation service")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5000", env = "MOODTUNE_PORT")]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting MoodTune API (moodtune-api) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let app = build_router(AppState::default());

    let addr = SocketAddr::new(args.host, args.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("API endpoint: http://{}/generate-summary", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_and_host() {
        let args = Args::try_parse_from(["moodtune-api"]).unwrap();
        assert_eq!(args.port, 5000);
        assert_eq!(args.host, IpAddr::from([127, 0, 0, 1]));
    }

    #[test]
    fn test_port_override() {
        let args = Args::try_parse_from(["moodtune-api", "--port", "8080"]).unwrap();
        assert_eq!(args.port, 8080);

        let args = Args::try_parse_from(["moodtune-api", "-p", "9001", "--host", "0.0.0.0"]).unwrap();
        assert_eq!(args.port, 9001);
        assert_eq!(args.host, IpAddr::from([0, 0, 0, 0]));
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Args::try_parse_from(["moodtune-api", "--port", "70000"]).is_err());
    }
}
