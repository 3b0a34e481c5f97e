//! Batch aggregation of per-song emotion scores
//!
//! Produces one mean per category. An empty batch produces the no-data
//! aggregate instead of dividing by zero.

use crate::emotion::{EmotionCategory, Song};

/// Mean score per emotion category across a song batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateScores {
    means: [f64; 4],
    song_count: usize,
}

impl AggregateScores {
    /// Aggregate for an empty batch (all means 0, no dominant category)
    pub fn no_data() -> Self {
        Self {
            means: [0.0; 4],
            song_count: 0,
        }
    }

    /// Build from explicit means, e.g. `[joyful, melancholic, energetic, calm]`
    pub fn from_means(means: [f64; 4], song_count: usize) -> Self {
        Self { means, song_count }
    }

    /// Mean score for one category
    pub fn mean(&self, category: EmotionCategory) -> f64 {
        self.means[category.index()]
    }

    /// Number of songs the means were computed over
    pub fn song_count(&self) -> usize {
        self.song_count
    }

    /// True when computed over an empty batch
    pub fn is_empty(&self) -> bool {
        self.song_count == 0
    }

    /// Category with the strictly greatest mean, with its score
    ///
    /// Ties go to the category that comes first in [`EmotionCategory::ALL`].
    /// Returns `None` for the no-data aggregate.
    pub fn dominant(&self) -> Option<(EmotionCategory, f64)> {
        if self.is_empty() {
            return None;
        }

        let mut best = (EmotionCategory::ALL[0], self.mean(EmotionCategory::ALL[0]));
        for category in EmotionCategory::ALL.into_iter().skip(1) {
            let score = self.mean(category);
            if score > best.1 {
                best = (category, score);
            }
        }
        Some(best)
    }

    /// `(category, mean)` pairs in fixed category order
    pub fn iter(&self) -> impl Iterator<Item = (EmotionCategory, f64)> + '_ {
        EmotionCategory::ALL.into_iter().map(|c| (c, self.mean(c)))
    }
}

/// Compute per-category means over a song batch
pub fn aggregate(songs: &[Song]) -> AggregateScores {
    if songs.is_empty() {
        return AggregateScores::no_data();
    }

    let count = songs.len() as f64;
    let mut means = [0.0; 4];
    for category in EmotionCategory::ALL {
        let total: f64 = songs.iter().map(|s| s.score(category)).sum();
        means[category.index()] = total / count;
    }

    AggregateScores::from_means(means, songs.len())
}
