//! Guessing-game model
//!
//! One `GuessGame` holds a secret number and a fixed budget of guesses.
//! Instances are handed out by the `GameCenter` and owned by exactly one
//! player at a time.

use crate::config::GameSettings;
use crate::types::{GameId, GuessResult};
use crate::utils::{current_timestamp, generate_game_id};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single guessing game in progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessGame {
    id: GameId,
    secret: u32,
    upper_bound: u32,
    max_guesses: u32,
    guesses_made: u32,
    won: bool,
    created_at: DateTime<Utc>,
}

impl GuessGame {
    /// Create a new game with a randomly drawn secret number
    pub fn new(settings: &GameSettings) -> Self {
        let secret = rand::thread_rng().gen_range(0..settings.upper_bound);
        Self::with_secret(settings, secret)
    }

    /// Create a game with a specific secret number (for deterministic tests)
    pub fn with_secret(settings: &GameSettings, secret: u32) -> Self {
        Self {
            id: generate_game_id(),
            secret,
            upper_bound: settings.upper_bound,
            max_guesses: settings.max_guesses,
            guesses_made: 0,
            won: false,
            created_at: current_timestamp(),
        }
    }

    /// Get the game ID
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Get the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Evaluate one guess against the secret number
    ///
    /// Out-of-range guesses and guesses on a finished game are rejected as
    /// `Invalid` and consume no guess.
    pub fn make_guess(&mut self, guess: u32) -> GuessResult {
        if self.is_finished() || guess >= self.upper_bound {
            return GuessResult::Invalid;
        }

        self.guesses_made += 1;
        if guess == self.secret {
            self.won = true;
            GuessResult::Won
        } else if self.guesses_made >= self.max_guesses {
            GuessResult::Lost
        } else {
            GuessResult::Continue
        }
    }

    /// Is this game over, either won or out of guesses?
    pub fn is_finished(&self) -> bool {
        self.won || self.guesses_made >= self.max_guesses
    }

    /// Has the game been won?
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Has no guess been made yet?
    pub fn is_game_beginning(&self) -> bool {
        self.guesses_made == 0
    }

    /// Does the player still have guesses left?
    pub fn has_more_guesses(&self) -> bool {
        self.guesses_left() > 0
    }

    /// How many guesses remain
    pub fn guesses_left(&self) -> u32 {
        self.max_guesses - self.guesses_made
    }

    /// The secret number, revealed to the player once the game is over
    pub fn secret_number(&self) -> u32 {
        self.secret
    }
}
