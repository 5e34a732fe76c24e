//! Error types for the game coordinator
//!
//! This module defines all error types using anyhow for consistent error
//! handling throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific coordinator scenarios
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("no active game for this player")]
    NoActiveGame,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("internal service error: {message}")]
    InternalError { message: String },
}
