//! Genre recommendations from aggregate scores
//!
//! Each category is checked against two tiers, strong (> 0.6) and moderate
//! (> 0.4). Only the highest tier crossed contributes. Contributions are
//! concatenated in category order, deduplicated keeping the first occurrence
//! and capped at [`MAX_GENRES`].

use crate::aggregate::AggregateScores;
use crate::emotion::EmotionCategory;

/// Upper bound on recommended genres
pub const MAX_GENRES: usize = 4;

/// Strong tier threshold (exclusive)
pub const STRONG_THRESHOLD: f64 = 0.6;

/// Moderate tier threshold (exclusive)
pub const MODERATE_THRESHOLD: f64 = 0.4;

/// Used when no category crosses a threshold, and for empty batches
pub const DEFAULT_GENRES: [&str; 3] = ["Pop", "Light Music", "Folk"];

/// Genre lists contributed by one category
struct TierTable {
    strong: &'static [&'static str],
    moderate: &'static [&'static str],
}

fn tier_table(category: EmotionCategory) -> TierTable {
    match category {
        EmotionCategory::Joyful => TierTable {
            strong: &["Pop", "Electronic Dance", "Funk"],
            moderate: &["Pop", "Light Music"],
        },
        EmotionCategory::Melancholic => TierTable {
            strong: &["Jazz", "Folk", "Blues"],
            moderate: &["Folk", "Light Music"],
        },
        EmotionCategory::Energetic => TierTable {
            strong: &["Rock", "Hip-Hop", "Electronic"],
            moderate: &["Rock", "Pop"],
        },
        EmotionCategory::Calm => TierTable {
            strong: &["Light Music", "New Age", "Ambient"],
            moderate: &["Light Music", "Jazz"],
        },
    }
}

/// Genres contributed by one category at a given mean
pub fn tier_genres(category: EmotionCategory, mean: f64) -> &'static [&'static str] {
    let table = tier_table(category);
    if mean > STRONG_THRESHOLD {
        table.strong
    } else if mean > MODERATE_THRESHOLD {
        table.moderate
    } else {
        &[]
    }
}

/// Ordered, unique genre recommendations (at most [`MAX_GENRES`])
pub fn recommend_genres(scores: &AggregateScores) -> Vec<String> {
    let contributed: Vec<&'static str> = scores
        .iter()
        .flat_map(|(category, mean)| tier_genres(category, mean).iter().copied())
        .collect();

    let source: &[&str] = if contributed.is_empty() {
        &DEFAULT_GENRES
    } else {
        &contributed
    };

    let mut genres: Vec<String> = Vec::with_capacity(MAX_GENRES);
    for genre in source {
        if genres.len() == MAX_GENRES {
            break;
        }
        if !genres.iter().any(|g| g == genre) {
            genres.push(genre.to_string());
        }
    }
    genres
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommend(means: [f64; 4]) -> Vec<String> {
        recommend_genres(&AggregateScores::from_means(means, 1))
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        assert!(tier_genres(EmotionCategory::Joyful, 0.6).len() == 2);
        assert!(tier_genres(EmotionCategory::Joyful, 0.4).is_empty());
        assert_eq!(tier_genres(EmotionCategory::Calm, 0.61), &["Light Music", "New Age", "Ambient"]);
        assert_eq!(tier_genres(EmotionCategory::Calm, 0.41), &["Light Music", "Jazz"]);
    }

    #[test]
    fn test_strong_joyful_only() {
        assert_eq!(recommend([0.9, 0.1, 0.2, 0.1]), vec!["Pop", "Electronic Dance", "Funk"]);
    }

    #[test]
    fn test_fallback_when_nothing_crosses() {
        assert_eq!(recommend([0.4, 0.4, 0.4, 0.4]), vec!["Pop", "Light Music", "Folk"]);
        assert_eq!(recommend_genres(&AggregateScores::no_data()), vec!["Pop", "Light Music", "Folk"]);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_and_caps() {
        // joyful moderate + melancholic moderate + energetic strong
        let genres = recommend([0.5, 0.5, 0.7, 0.0]);
        assert_eq!(genres, vec!["Pop", "Light Music", "Folk", "Rock"]);
    }

    #[test]
    fn test_two_song_sample_batch() {
        // joyful 0.5, melancholic 0.5, energetic 0.2, calm 0.8
        let genres = recommend([0.5, 0.5, 0.2, 0.8]);
        assert_eq!(genres, vec!["Pop", "Light Music", "Folk", "New Age"]);
    }

    #[test]
    fn test_calm_moderate_only() {
        assert_eq!(recommend([0.0, 0.0, 0.0, 0.45]), vec!["Light Music", "Jazz"]);
    }
}
