//! Console entry point for the guess-center game
//!
//! Plays the role of the session layer: it creates one `PlayerServices`
//! per run and drives the guessing game from stdin.

use anyhow::Result;
use clap::Parser;
use guess_center::config::AppConfig;
use guess_center::types::GuessResult;
use guess_center::{GameCenter, PlayerServices};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Guess Center - number-guessing game with session statistics
#[derive(Parser)]
#[command(
    name = "guess-center",
    version,
    about = "A number-guessing game with per-session and sitewide statistics"
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Upper bound override
    #[arg(long, value_name = "N", help = "Secret numbers are drawn from 0..N")]
    upper_bound: Option<u32>,

    /// Guess budget override
    #[arg(long, value_name = "N", help = "Number of guesses per game")]
    max_guesses: Option<u32>,

    /// Dry run mode (validate config and exit)
    #[arg(
        long,
        help = "Validate configuration and exit without starting a game"
    )]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }
    if let Some(upper_bound) = args.upper_bound {
        config.game.upper_bound = upper_bound;
    }
    if let Some(max_guesses) = args.max_guesses {
        config.game.max_guesses = max_guesses;
    }

    guess_center::config::validate_config(&config)?;
    Ok(config)
}

/// Print both statistics messages after a finished game
fn print_stats(player: &PlayerServices, center: &GameCenter) -> Result<()> {
    println!("{}", player.player_stats_message()?);
    println!("{}", center.game_stats_message()?);
    Ok(())
}

fn play(config: &AppConfig) -> Result<()> {
    let center = Arc::new(GameCenter::new(config.game));
    let player = center.new_player_services();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let game = player.current_game()?;
        if player.is_starting_game()? {
            println!(
                "I'm thinking of a number between 0 and {}. You have {} guesses. (q to quit)",
                config.game.upper_bound - 1,
                player.guesses_left()?
            );
        }

        print!("Your guess: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let input = line?.trim().to_string();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        let Ok(guess) = input.parse::<u32>() else {
            println!("That's not a number I can work with.");
            continue;
        };

        match player.make_guess(guess)? {
            GuessResult::Won => {
                println!("You got it!");
                player.finished_game()?;
                print_stats(&player, &center)?;
            }
            GuessResult::Lost => {
                println!("Out of guesses. The number was {}.", game.secret_number());
                player.finished_game()?;
                print_stats(&player, &center)?;
            }
            GuessResult::Continue => {
                println!("Nope. {} guesses left.", player.guesses_left()?);
            }
            GuessResult::Invalid => {
                println!(
                    "Guesses must be between 0 and {}.",
                    config.game.upper_bound - 1
                );
            }
        }
    }

    player.end_session()?;
    println!("Thanks for playing!");
    print_stats(&player, &center)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "Starting {} v{} (range 0..{}, {} guesses)",
        config.service.name,
        guess_center::VERSION,
        config.game.upper_bound,
        config.game.max_guesses
    );

    if args.dry_run {
        info!("Configuration validation successful");
        return Ok(());
    }

    play(&config)
}
