//! Per-session player controller
//!
//! This module provides the `PlayerServices` object that mediates access to
//! one player's single in-progress game and tracks that player's session
//! win/loss counters.

use crate::center::GameCenter;
use crate::error::{GameError, Result};
use crate::game::GuessGame;
use crate::types::{GuessResult, PlayerStats};
use std::sync::{Arc, Mutex};
use tracing::debug;

// Output strings made public for unit test access
pub const NO_GAMES_PLAYED_MESSAGE: &str = "You have nor played a game this session";
pub const NO_WINS_MESSAGE: &str = "You have nor won a game, yet. But I *feel* your luck changing.";

/// Client-specific services for one player session
///
/// There is only one game at a time allowed per player. The game slot and
/// the session counters sit behind separate locks; the slot lock is always
/// taken first, so the report path through the `GameCenter` cannot deadlock.
pub struct PlayerServices {
    /// Session counters, updated and read under one lock
    stats: Mutex<PlayerStats>,
    /// This player's game, absent between games
    game: Mutex<Option<GuessGame>>,
    /// The center provides sitewide features for all the games and players
    game_center: Arc<GameCenter>,
}

impl PlayerServices {
    /// Construct a new controller; the player has not started a game yet
    pub(crate) fn new(game_center: Arc<GameCenter>) -> Self {
        Self {
            stats: Mutex::new(PlayerStats::default()),
            game: Mutex::new(None),
            game_center,
        }
    }

    /// Get the current game the player is playing, creating one if no game
    /// has been started
    ///
    /// The check-then-create runs under the slot lock, so concurrent calls
    /// observe a single game. Returns a snapshot of the game state.
    pub fn current_game(&self) -> Result<GuessGame> {
        let mut slot = self.lock_game()?;
        let game = slot.get_or_insert_with(|| {
            debug!("Starting a new game for this session");
            self.game_center.new_game()
        });
        Ok(game.clone())
    }

    /// The player makes a guess of the secret number
    ///
    /// The guess evaluation, finish detection, and the sitewide report all
    /// happen inside one critical section, so two concurrent guesses cannot
    /// double-report a finished game.
    pub fn make_guess(&self, guess: u32) -> Result<GuessResult> {
        let mut slot = self.lock_game()?;
        let game = slot.as_mut().ok_or(GameError::NoActiveGame)?;

        let result = game.make_guess(guess);
        if result != GuessResult::Invalid && game.is_finished() {
            self.game_center.game_finished(result == GuessResult::Won)?;
        }

        Ok(result)
    }

    /// Indicates that the player is finished with this game
    pub fn finished_game(&self) -> Result<()> {
        let mut slot = self.lock_game()?;
        *slot = None;
        Ok(())
    }

    /// Cleanup when the session expires; the only cleanup is to drop the game
    pub fn end_session(&self) -> Result<()> {
        let mut slot = self.lock_game()?;
        *slot = None;
        Ok(())
    }

    /// Is the player starting a new game?
    pub fn is_starting_game(&self) -> Result<bool> {
        let slot = self.lock_game()?;
        let game = slot.as_ref().ok_or(GameError::NoActiveGame)?;
        Ok(game.is_game_beginning())
    }

    /// Does the player still have more guesses in the current game?
    pub fn has_more_guesses(&self) -> Result<bool> {
        let slot = self.lock_game()?;
        let game = slot.as_ref().ok_or(GameError::NoActiveGame)?;
        Ok(game.has_more_guesses())
    }

    /// How many guesses the player has left in this game
    pub fn guesses_left(&self) -> Result<u32> {
        let slot = self.lock_game()?;
        let game = slot.as_ref().ok_or(GameError::NoActiveGame)?;
        Ok(game.guesses_left())
    }

    /// Get a user message about this session's statistics
    pub fn player_stats_message(&self) -> Result<String> {
        let stats = self.stats()?;
        if stats.total_games == 0 {
            return Ok(NO_GAMES_PLAYED_MESSAGE.to_string());
        }
        if stats.games_won == 0 {
            return Ok(NO_WINS_MESSAGE.to_string());
        }

        let percent = (stats.games_won as f64 / stats.total_games as f64) * 100.0;
        Ok(format!(
            "You have won an average of {:.1}% of games this session.",
            percent
        ))
    }

    /// Record one finished game in the session counters
    ///
    /// Called by the `GameCenter` as part of its `game_finished` bookkeeping.
    pub fn update_games(&self, won: bool) -> Result<()> {
        let mut stats = self.stats.lock().map_err(|_| GameError::InternalError {
            message: "Failed to acquire player stats lock".to_string(),
        })?;

        if won {
            stats.games_won += 1;
        }
        stats.total_games += 1;
        debug_assert!(stats.games_won <= stats.total_games);
        Ok(())
    }

    /// Get a snapshot of the session counters
    pub fn stats(&self) -> Result<PlayerStats> {
        let stats = self.stats.lock().map_err(|_| GameError::InternalError {
            message: "Failed to acquire player stats lock".to_string(),
        })?;
        Ok(*stats)
    }

    fn lock_game(&self) -> Result<std::sync::MutexGuard<'_, Option<GuessGame>>> {
        self.game.lock().map_err(|_| {
            GameError::InternalError {
                message: "Failed to acquire game slot lock".to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameSettings;

    fn test_player() -> (Arc<GameCenter>, Arc<PlayerServices>) {
        let center = Arc::new(GameCenter::new(GameSettings::default()));
        let player = center.new_player_services();
        (center, player)
    }

    #[test]
    fn test_current_game_is_lazy_and_idempotent() {
        let (_center, player) = test_player();

        let first = player.current_game().unwrap();
        let second = player.current_game().unwrap();
        assert_eq!(first.id(), second.id());
    }

    #[test]
    fn test_fresh_game_after_finished_game() {
        let (_center, player) = test_player();

        let first = player.current_game().unwrap();
        player.finished_game().unwrap();
        let second = player.current_game().unwrap();
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_fresh_game_after_end_session() {
        let (_center, player) = test_player();

        let first = player.current_game().unwrap();
        player.end_session().unwrap();
        let second = player.current_game().unwrap();
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_guess_without_game_is_rejected() {
        let (_center, player) = test_player();

        let err = player.make_guess(3).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GameError>(),
            Some(GameError::NoActiveGame)
        ));
    }

    #[test]
    fn test_queries_without_game_are_rejected() {
        let (_center, player) = test_player();

        assert!(player.is_starting_game().is_err());
        assert!(player.has_more_guesses().is_err());
        assert!(player.guesses_left().is_err());
    }

    #[test]
    fn test_query_delegation() {
        let (_center, player) = test_player();
        let game = player.current_game().unwrap();

        assert!(player.is_starting_game().unwrap());
        assert!(player.has_more_guesses().unwrap());
        assert_eq!(player.guesses_left().unwrap(), 3);

        let wrong = (game.secret_number() + 1) % 10;
        assert_eq!(player.make_guess(wrong).unwrap(), GuessResult::Continue);
        assert!(!player.is_starting_game().unwrap());
        assert_eq!(player.guesses_left().unwrap(), 2);
    }

    #[test]
    fn test_won_game_reports_to_center() {
        let (center, player) = test_player();

        let secret = player.current_game().unwrap().secret_number();
        assert_eq!(player.make_guess(secret).unwrap(), GuessResult::Won);

        assert_eq!(player.stats().unwrap(), PlayerStats { total_games: 1, games_won: 1 });
        assert_eq!(center.stats().unwrap().total_games, 1);
        assert_eq!(center.stats().unwrap().games_won, 1);
    }

    #[test]
    fn test_lost_game_reports_to_center() {
        let (center, player) = test_player();

        let wrong = (player.current_game().unwrap().secret_number() + 1) % 10;
        assert_eq!(player.make_guess(wrong).unwrap(), GuessResult::Continue);
        assert_eq!(player.make_guess(wrong).unwrap(), GuessResult::Continue);
        assert_eq!(player.make_guess(wrong).unwrap(), GuessResult::Lost);

        assert_eq!(player.stats().unwrap(), PlayerStats { total_games: 1, games_won: 0 });
        assert_eq!(center.stats().unwrap().total_games, 1);
        assert_eq!(center.stats().unwrap().games_won, 0);
    }

    #[test]
    fn test_finished_game_is_reported_once() {
        let (center, player) = test_player();

        let secret = player.current_game().unwrap().secret_number();
        player.make_guess(secret).unwrap();
        // Guessing again on the finished game must not double-report
        assert_eq!(player.make_guess(secret).unwrap(), GuessResult::Invalid);

        assert_eq!(center.stats().unwrap().total_games, 1);
    }

    #[test]
    fn test_no_games_played_message() {
        let (_center, player) = test_player();
        assert_eq!(
            player.player_stats_message().unwrap(),
            NO_GAMES_PLAYED_MESSAGE
        );
    }

    #[test]
    fn test_no_wins_message() {
        let (_center, player) = test_player();
        player.update_games(false).unwrap();
        assert_eq!(player.player_stats_message().unwrap(), NO_WINS_MESSAGE);
    }

    #[test]
    fn test_win_percentage_message() {
        let (_center, player) = test_player();
        player.update_games(true).unwrap();
        player.update_games(false).unwrap();
        player.update_games(false).unwrap();
        assert_eq!(
            player.player_stats_message().unwrap(),
            "You have won an average of 33.3% of games this session."
        );
    }
}
