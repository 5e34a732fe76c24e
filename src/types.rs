//! Common types used throughout the game coordinator

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for games
pub type GameId = Uuid;

/// Verdict for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessResult {
    /// The guess matched the secret number
    Won,
    /// The guess was wrong and it was the player's last one
    Lost,
    /// The guess was wrong but guesses remain
    Continue,
    /// The guess was out of range or the game is already over; no guess consumed
    Invalid,
}

impl std::fmt::Display for GuessResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuessResult::Won => write!(f, "Won"),
            GuessResult::Lost => write!(f, "Lost"),
            GuessResult::Continue => write!(f, "Continue"),
            GuessResult::Invalid => write!(f, "Invalid"),
        }
    }
}

/// Snapshot of the sitewide win/loss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteStats {
    /// All games finished sitewide
    pub total_games: u64,
    /// Subset of `total_games` that were wins
    pub games_won: u64,
}

/// Snapshot of one player's per-session win/loss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Games this player finished during the session
    pub total_games: u64,
    /// Subset of `total_games` that were wins
    pub games_won: u64,
}
