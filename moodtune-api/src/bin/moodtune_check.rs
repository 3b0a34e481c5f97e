//! moodtune-check - smoke test for a running moodtune-api
//!
//! Calls the health endpoint, then posts a small sample batch to
//! `/generate-summary` and prints the result.

use anyhow::{bail, Context, Result};
use clap::Parser;
use moodtune_api::api::health::HealthResponse;
use moodtune_common::SummaryResult;
use serde_json::json;

#[derive(Parser, Debug)]
#[command(name = "moodtune-check")]
#[command(about = "Smoke test a running MoodTune API")]
struct Args {
    /// Base URL of the service
    #[arg(long, default_value = "http://localhost:5000")]
    base_url: String,
}

async fn check_health(client: &reqwest::Client, base_url: &str) -> Result<()> {
    let response = client
        .get(format!("{}/health", base_url))
        .send()
        .await
        .context("Health request failed")?
        .error_for_status()
        .context("Health check returned an error status")?;

    let health: HealthResponse = response.json().await.context("Invalid health response")?;
    println!("[OK] Health check");
    println!("Status: {}", health.status);
    println!("Message: {}", health.message);
    Ok(())
}

async fn check_summary(client: &reqwest::Client, base_url: &str) -> Result<()> {
    let sample = json!({
        "songs": [
            {
                "title": "Sample Song 1",
                "emotions": {"joyful": 0.8, "melancholic": 0.1, "energetic": 0.3, "calm": 0.9}
            },
            {
                "title": "Sample Song 2",
                "emotions": {"joyful": 0.2, "melancholic": 0.9, "energetic": 0.1, "calm": 0.7}
            }
        ]
    });

    let response = client
        .post(format!("{}/generate-summary", base_url))
        .json(&sample)
        .send()
        .await
        .context("Summary request failed")?
        .error_for_status()
        .context("Summary endpoint returned an error status")?;

    let result: SummaryResult = response.json().await.context("Invalid summary response")?;
    println!("[OK] Summary generated");
    println!();
    println!("Mood summary:");
    println!("{}", result.mood_summary);
    println!();
    println!("Suggested genres:");
    println!("{}", result.suggested_genres.join(", "));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let base_url = args.base_url.trim_end_matches('/');
    let client = reqwest::Client::new();

    println!("MoodTune API check against {}", base_url);

    let mut failures = 0;
    println!();
    println!("1. Health endpoint");
    if let Err(e) = check_health(&client, base_url).await {
        println!("[ERROR] {:#}", e);
        failures += 1;
    }

    println!();
    println!("2. Summary endpoint");
    if let Err(e) = check_summary(&client, base_url).await {
        println!("[ERROR] {:#}", e);
        failures += 1;
    }

    if failures > 0 {
        bail!("{} check(s) failed", failures);
    }
    Ok(())
}
