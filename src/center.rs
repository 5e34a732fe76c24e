//! Sitewide game coordinator
//!
//! This module provides the `GameCenter` that owns the aggregate win/loss
//! counters across all games, hands out new games, and creates the
//! per-session player controllers.

use crate::config::GameSettings;
use crate::error::{GameError, Result};
use crate::game::GuessGame;
use crate::player::PlayerServices;
use crate::types::SiteStats;
use std::sync::{Arc, Mutex, RwLock, Weak};
use tracing::debug;

// Output strings made public for unit test access
pub const NO_GAMES_MESSAGE: &str = "No games have been played so far.";

/// The sitewide coordinator, one shared instance per deployment
///
/// Holds a back-reference to the most recently created `PlayerServices`.
/// That single slot is a deliberate single-player simplification, not a
/// registry of active sessions.
pub struct GameCenter {
    /// Game factory configuration
    settings: GameSettings,
    /// Aggregate counters, updated and read under one lock
    stats: Mutex<SiteStats>,
    /// Most recently created player controller (observation only)
    player: RwLock<Weak<PlayerServices>>,
}

impl GameCenter {
    /// Create a new game center
    pub fn new(settings: GameSettings) -> Self {
        Self {
            settings,
            stats: Mutex::new(SiteStats::default()),
            player: RwLock::new(Weak::new()),
        }
    }

    /// Create a new `PlayerServices` bound to this center for a client
    /// session that just connected
    ///
    /// Overwrites the stored most-recent player.
    pub fn new_player_services(self: &Arc<Self>) -> Arc<PlayerServices> {
        debug!("New player services instance created.");
        let player = Arc::new(PlayerServices::new(Arc::clone(self)));

        let mut slot = self
            .player
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *slot = Arc::downgrade(&player);

        player
    }

    /// Get the most recently created player controller, if it is still alive
    pub fn player(&self) -> Option<Arc<PlayerServices>> {
        let slot = self
            .player
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        slot.upgrade()
    }

    /// Create a new guessing game; stateless factory
    pub fn new_game(&self) -> GuessGame {
        GuessGame::new(&self.settings)
    }

    /// Collect sitewide statistics when a game is finished
    ///
    /// The counter updates and the delegated per-player update happen inside
    /// one critical section so concurrent reports cannot tear them apart.
    pub fn game_finished(&self, won: bool) -> Result<()> {
        let mut stats = self.stats.lock().map_err(|_| GameError::InternalError {
            message: "Failed to acquire sitewide stats lock".to_string(),
        })?;

        if won {
            stats.games_won += 1;
        }
        stats.total_games += 1;
        debug_assert!(stats.games_won <= stats.total_games);

        // Forward the result to the session counters of the current player.
        // A detached or expired player is fine; the sitewide counters stand
        // on their own.
        match self.player() {
            Some(player) => player.update_games(won)?,
            None => debug!("Game finished with no player attached"),
        }

        Ok(())
    }

    /// Get a user message about the sitewide statistics
    pub fn game_stats_message(&self) -> Result<String> {
        let stats = self.stats()?;
        if stats.total_games == 0 {
            return Ok(NO_GAMES_MESSAGE.to_string());
        }

        let percent = (stats.games_won as f64 / stats.total_games as f64) * 100.0;
        Ok(format!(
            "Players have won {:.0}% of the games played this session",
            percent
        ))
    }

    /// Get a snapshot of the sitewide counters
    pub fn stats(&self) -> Result<SiteStats> {
        let stats = self.stats.lock().map_err(|_| GameError::InternalError {
            message: "Failed to acquire sitewide stats lock".to_string(),
        })?;
        Ok(*stats)
    }
}
