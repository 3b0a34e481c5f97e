//! Mood summary endpoint
//!
//! POST /generate-summary accepts `{"songs": [...]}` and returns the mood
//! summary with suggested genres. The body is read as JSON whatever the
//! declared content type.

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use moodtune_common::{generate_mood_summary, parse_songs, SummaryResult};
use serde_json::Value;
use tracing::{debug, info};

use crate::{ApiError, ApiResult, AppState};

/// Returned when the body is not an object carrying a `songs` field
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid request data format. Must include 'songs' field";

/// Returned when `songs` is not a non-empty array
pub const EMPTY_SONGS_MESSAGE: &str = "songs must be a non-empty array";

/// Extract the song list from a request body, enforcing its shape
fn song_values(body: &[u8]) -> ApiResult<Vec<Value>> {
    let data: Value = serde_json::from_slice(body).map_err(|e| {
        debug!("Request body is not valid JSON: {}", e);
        ApiError::BadRequest(INVALID_FORMAT_MESSAGE.to_string())
    })?;

    let Value::Object(mut fields) = data else {
        return Err(ApiError::BadRequest(INVALID_FORMAT_MESSAGE.to_string()));
    };

    match fields.remove("songs") {
        None => Err(ApiError::BadRequest(INVALID_FORMAT_MESSAGE.to_string())),
        Some(Value::Array(songs)) if !songs.is_empty() => Ok(songs),
        Some(_) => Err(ApiError::BadRequest(EMPTY_SONGS_MESSAGE.to_string())),
    }
}

/// POST /generate-summary
pub async fn generate_summary(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<SummaryResult>> {
    let values = song_values(&body)?;
    let songs = parse_songs(&values)?;

    let result = generate_mood_summary(&songs, state.selector.as_ref());
    info!(
        songs = songs.len(),
        genres = result.suggested_genres.len(),
        "Generated mood summary"
    );

    Ok(Json(result))
}

/// Build summary routes
pub fn summary_routes() -> Router<AppState> {
    Router::new().route("/generate-summary", post(generate_summary))
}
