//! Guessing-game settings

use serde::{Deserialize, Serialize};

/// Settings for the guessing game itself
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameSettings {
    /// Secret numbers are drawn from `0..upper_bound`
    pub upper_bound: u32,
    /// Number of guesses a player gets per game
    pub max_guesses: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            upper_bound: 10,
            max_guesses: 3,
        }
    }
}
