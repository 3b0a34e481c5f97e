//! Mood summary text
//!
//! Picks the dominant category of an aggregate and renders one of three
//! pre-written templates for it. Which template is used is decided by a
//! [`TemplateSelector`]; the default draws uniformly at random, so identical
//! batches may produce different text.

use rand::Rng;

use crate::aggregate::AggregateScores;
use crate::emotion::EmotionCategory;

/// Summary returned when the batch held no songs
pub const NO_DATA_SUMMARY: &str = "No music data available. Unable to generate mood summary.";

/// Placeholder replaced by the formatted dominant score
const SCORE_PLACEHOLDER: &str = "{score}";

const JOYFUL_TEMPLATES: [&str; 3] = [
    "Based on your music listening habits, you've been choosing joyful and positive music lately. Your joy emotion score reaches {score}, indicating a very optimistic mood! Keep up this positive energy. Your music choices reflect the sunshine and vitality within you.",
    "Your music preferences show a strong joyful tendency ({score}). You're drawn to melodies full of energy and delight. These music choices can effectively boost your mood and bring positive emotional experiences.",
    "Analysis shows that joyful songs dominate your music library ({score}). This music preference indicates you're enjoying the beautiful moments in life and spreading positive energy through music.",
];

const MELANCHOLIC_TEMPLATES: [&str; 3] = [
    "Your music listening data reveals a deep emotional state. Your melancholic emotion score reaches {score}, and you tend to choose songs rich in emotional depth and meaning. This music preference may reflect your pursuit of introspection and contemplation, with music becoming an outlet for emotional expression.",
    "Based on analysis, your music choices show a clear melancholic tendency ({score}). You're drawn to melodies that touch the heart and resonate deeply. This music preference can help you process emotions and promote self-reflection and growth.",
    "Your music preferences show a gentle yet deep melancholic tendency ({score}). You appreciate songs with rich emotional layers. This choice reflects your pursuit of musical artistry and understanding of emotional depth.",
];

const ENERGETIC_TEMPLATES: [&str; 3] = [
    "Your music listening habits show strong vitality and dynamism! Your energetic emotion score is as high as {score}, and you tend to choose songs with strong rhythms and high energy. This music preference indicates you're in a state full of vitality and motivation, with music becoming a way to release energy.",
    "Analysis reveals that your music choices are full of vitality and passion ({score}). You're drawn to songs that can inspire motivation and boost energy. This music preference can help you maintain a positive mindset and enhance your drive.",
    "Your music preferences show a clear energetic tendency ({score}). You enjoy melodies with upbeat rhythms and dynamic energy. This choice reflects your passion for life and positive attitude.",
];

const CALM_TEMPLATES: [&str; 3] = [
    "Your music listening data reveals a state of seeking peace and balance. Your calm emotion score reaches {score}, and you tend to choose songs that bring inner peace and relaxation. This music preference indicates you're using music to regulate your mood and seek inner tranquility.",
    "Based on analysis, your music choices show a clear calm tendency ({score}). You're drawn to soft, soothing melodies. This music preference can help you relax, relieve stress, and promote inner balance.",
    "Your music preferences show a peaceful and serene state ({score}). You appreciate songs that bring inner peace and tranquility. This choice reflects your pursuit of quality of life and attention to your inner world.",
];

/// Template table for a category
pub fn templates(category: EmotionCategory) -> &'static [&'static str; 3] {
    match category {
        EmotionCategory::Joyful => &JOYFUL_TEMPLATES,
        EmotionCategory::Melancholic => &MELANCHOLIC_TEMPLATES,
        EmotionCategory::Energetic => &ENERGETIC_TEMPLATES,
        EmotionCategory::Calm => &CALM_TEMPLATES,
    }
}

/// Source of template choices
///
/// `select` receives the number of candidates (always > 0) and returns the
/// index to use. Out-of-range indices are wrapped by the caller.
pub trait TemplateSelector: Send + Sync {
    fn select(&self, candidates: usize) -> usize;
}

/// Uniform random choice using the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelector;

impl TemplateSelector for RandomSelector {
    fn select(&self, candidates: usize) -> usize {
        rand::thread_rng().gen_range(0..candidates)
    }
}

/// Always picks the same index
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSelector(pub usize);

impl TemplateSelector for FixedSelector {
    fn select(&self, _candidates: usize) -> usize {
        self.0
    }
}

/// Format a score in [0,1] as a percentage with one decimal (0.842 -> "84.2%")
pub fn format_percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Render the mood summary for an aggregate
pub fn summarize(scores: &AggregateScores, selector: &dyn TemplateSelector) -> String {
    let Some((category, score)) = scores.dominant() else {
        return NO_DATA_SUMMARY.to_string();
    };

    let candidates = templates(category);
    let index = selector.select(candidates.len()) % candidates.len();
    candidates[index].replace(SCORE_PLACEHOLDER, &format_percent(score))
}
