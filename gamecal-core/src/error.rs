//! Error types for gamecal.

use thiserror::Error;

/// Errors that can occur in gamecal operations.
#[derive(Error, Debug)]
pub enum GamecalError {
    #[error("IGDB API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for gamecal operations.
pub type GamecalResult<T> = Result<T, GamecalError>;
