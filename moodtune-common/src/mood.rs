//! Mood summary generation for a song batch
//!
//! Stands in for a remote AI model call: aggregation, summary text and genre
//! recommendations are all computed locally.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::aggregate::aggregate;
use crate::emotion::Song;
use crate::genres::recommend_genres;
use crate::summary::{summarize, TemplateSelector};
use crate::Result;

/// Summary returned to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub mood_summary: String,
    pub suggested_genres: Vec<String>,
}

/// Read every song of a JSON batch, failing on the first malformed entry
pub fn parse_songs(values: &[Value]) -> Result<Vec<Song>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| Song::from_value(index, value))
        .collect()
}

/// Aggregate a batch and build its summary and genre list
pub fn generate_mood_summary(songs: &[Song], selector: &dyn TemplateSelector) -> SummaryResult {
    let scores = aggregate(songs);

    match scores.dominant() {
        Some((category, score)) => debug!(
            songs = scores.song_count(),
            dominant = %category,
            score,
            "Aggregated song batch"
        ),
        None => debug!("Empty song batch, using no-data summary"),
    }

    SummaryResult {
        mood_summary: summarize(&scores, selector),
        suggested_genres: recommend_genres(&scores),
    }
}
