//! Configuration management for the guess-center service
//!
//! This module handles all configuration loading from environment variables,
//! validation, and default values for the game coordinator.

pub mod app;
pub mod game;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings};
pub use game::GameSettings;
