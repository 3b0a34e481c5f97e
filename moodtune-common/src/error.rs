//! Common error types for MoodTune

use thiserror::Error;

/// Common result type for MoodTune operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning a song batch into a summary
#[derive(Error, Debug)]
pub enum Error {
    /// A song entry could not be read (wrong JSON shape or non-numeric score)
    #[error("song {index}: {reason}")]
    InvalidSong { index: usize, reason: String },
}
