//! Emotion categories and per-song emotion records
//!
//! The category set is closed. Its declaration order is the iteration order
//! used everywhere a category ordering matters (argmax tie-break, genre
//! concatenation), so it is spelled out in [`EmotionCategory::ALL`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// Mood dimension scored per song
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Joyful,
    Melancholic,
    Energetic,
    Calm,
}

impl EmotionCategory {
    /// All categories in fixed precedence order
    pub const ALL: [EmotionCategory; 4] = [
        EmotionCategory::Joyful,
        EmotionCategory::Melancholic,
        EmotionCategory::Energetic,
        EmotionCategory::Calm,
    ];

    /// Key used for this category in request bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionCategory::Joyful => "joyful",
            EmotionCategory::Melancholic => "melancholic",
            EmotionCategory::Energetic => "energetic",
            EmotionCategory::Calm => "calm",
        }
    }

    /// Position of this category in [`EmotionCategory::ALL`]
    pub fn index(&self) -> usize {
        match self {
            EmotionCategory::Joyful => 0,
            EmotionCategory::Melancholic => 1,
            EmotionCategory::Energetic => 2,
            EmotionCategory::Calm => 3,
        }
    }

    /// Parse a request key; unknown keys yield `None`
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == key)
    }
}

impl std::fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One song of an input batch
///
/// Missing categories score 0. The title is informational only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Song {
    pub title: Option<String>,
    scores: [f64; 4],
}

impl Song {
    /// Song with every category at 0
    pub fn new(title: Option<String>) -> Self {
        Self {
            title,
            scores: [0.0; 4],
        }
    }

    /// Builder-style setter for one category score
    pub fn with_score(mut self, category: EmotionCategory, score: f64) -> Self {
        self.scores[category.index()] = score;
        self
    }

    /// Score for a category (0 when absent from the input)
    pub fn score(&self, category: EmotionCategory) -> f64 {
        self.scores[category.index()]
    }

    /// Read a song from its JSON request form
    ///
    /// `emotions` may be absent or `null` (all zero). Unknown emotion keys are
    /// ignored, a `null` score counts as 0 and a boolean score as 1 or 0.
    /// Anything else that is not a number is rejected with
    /// [`Error::InvalidSong`].
    pub fn from_value(index: usize, value: &Value) -> Result<Self> {
        let obj = value.as_object().ok_or_else(|| Error::InvalidSong {
            index,
            reason: format!("expected an object, got {}", json_kind(value)),
        })?;

        let title = obj.get("title").and_then(Value::as_str).map(str::to_owned);
        let mut song = Song::new(title);

        let emotions = match obj.get("emotions") {
            None | Some(Value::Null) => return Ok(song),
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(Error::InvalidSong {
                    index,
                    reason: format!("'emotions' must be an object, got {}", json_kind(other)),
                })
            }
        };

        for (key, raw) in emotions {
            let Some(category) = EmotionCategory::from_key(key) else {
                continue;
            };
            let score = match raw {
                Value::Null => 0.0,
                Value::Bool(flag) => f64::from(u8::from(*flag)),
                Value::Number(n) => n.as_f64().ok_or_else(|| Error::InvalidSong {
                    index,
                    reason: format!("score for '{}' is out of range", key),
                })?,
                other => {
                    return Err(Error::InvalidSong {
                        index,
                        reason: format!("score for '{}' must be a number, got {}", key, json_kind(other)),
                    })
                }
            };
            song.scores[category.index()] = score;
        }

        Ok(song)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_order_is_fixed() {
        let keys: Vec<&str> = EmotionCategory::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(keys, vec!["joyful", "melancholic", "energetic", "calm"]);
        for (i, c) in EmotionCategory::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn test_from_key() {
        assert_eq!(EmotionCategory::from_key("calm"), Some(EmotionCategory::Calm));
        assert_eq!(EmotionCategory::from_key("Calm"), None);
        assert_eq!(EmotionCategory::from_key("angry"), None);
    }

    #[test]
    fn test_song_from_full_value() {
        let value = json!({
            "title": "Song A",
            "emotions": {"joyful": 0.8, "melancholic": 0.1, "energetic": 0.3, "calm": 0.9}
        });
        let song = Song::from_value(0, &value).unwrap();
        assert_eq!(song.title.as_deref(), Some("Song A"));
        assert_eq!(song.score(EmotionCategory::Joyful), 0.8);
        assert_eq!(song.score(EmotionCategory::Melancholic), 0.1);
        assert_eq!(song.score(EmotionCategory::Energetic), 0.3);
        assert_eq!(song.score(EmotionCategory::Calm), 0.9);
    }

    #[test]
    fn test_song_missing_fields_default_to_zero() {
        let song = Song::from_value(0, &json!({})).unwrap();
        assert_eq!(song, Song::new(None));

        let song = Song::from_value(0, &json!({"emotions": null})).unwrap();
        assert_eq!(song, Song::new(None));

        let song = Song::from_value(0, &json!({"emotions": {"calm": 0.5, "angry": 1.0, "joyful": null}})).unwrap();
        assert_eq!(song.score(EmotionCategory::Calm), 0.5);
        assert_eq!(song.score(EmotionCategory::Joyful), 0.0);
    }

    #[test]
    fn test_song_integer_score_accepted() {
        let song = Song::from_value(0, &json!({"emotions": {"energetic": 1}})).unwrap();
        assert_eq!(song.score(EmotionCategory::Energetic), 1.0);
    }

    #[test]
    fn test_song_boolean_score_counts_as_one_or_zero() {
        let song = Song::from_value(0, &json!({"emotions": {"joyful": true, "calm": false}})).unwrap();
        assert_eq!(song.score(EmotionCategory::Joyful), 1.0);
        assert_eq!(song.score(EmotionCategory::Calm), 0.0);
    }

    #[test]
    fn test_song_invalid_shapes_rejected() {
        let err = Song::from_value(2, &json!("not a song")).unwrap_err();
        assert!(matches!(err, Error::InvalidSong { index: 2, .. }));

        let err = Song::from_value(0, &json!({"emotions": [0.1, 0.2]})).unwrap_err();
        assert!(err.to_string().contains("'emotions' must be an object"));

        let err = Song::from_value(1, &json!({"emotions": {"joyful": "high"}})).unwrap_err();
        assert_eq!(err.to_string(), "song 1: score for 'joyful' must be a number, got string");
    }
}
