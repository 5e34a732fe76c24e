//! Guess Center - Session and statistics coordinator for a number-guessing game
//!
//! This crate provides the sitewide game coordinator (`GameCenter`), the
//! per-session player controller (`PlayerServices`), and the guessing-game
//! model they mediate access to.

pub mod center;
pub mod config;
pub mod error;
pub mod game;
pub mod player;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{GameError, Result};
pub use types::*;

// Re-export key components
pub use center::GameCenter;
pub use game::GuessGame;
pub use player::PlayerServices;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
