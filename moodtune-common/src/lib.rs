//! # MoodTune Common Library
//!
//! Domain logic shared by the MoodTune service and its tooling:
//! - Emotion categories and song records
//! - Aggregation of per-song scores into batch means
//! - Templated mood summaries with a pluggable template selector
//! - Threshold-based genre recommendations

pub mod aggregate;
pub mod emotion;
pub mod error;
pub mod genres;
pub mod mood;
pub mod summary;

pub use aggregate::{aggregate, AggregateScores};
pub use emotion::{EmotionCategory, Song};
pub use error::{Error, Result};
pub use genres::{recommend_genres, DEFAULT_GENRES, MAX_GENRES};
pub use mood::{generate_mood_summary, parse_songs, SummaryResult};
pub use summary::{summarize, FixedSelector, RandomSelector, TemplateSelector, NO_DATA_SUMMARY};
