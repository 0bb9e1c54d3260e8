//! # hoop_core - Guess-the-NBA-Player Game Engine
//!
//! Compares a guessed player against a secret target and reports which
//! attributes line up (team, conference, division, position, height, weight),
//! with higher/lower hints for height and weight.
//!
//! ## Features
//! - Pure feedback engine (`engine::feedback`)
//! - Six-guess session state machine (`game::session`)
//! - Typed player records validated once at the data boundary
//! - Roster search, reveal ladder, career clue, daily streak

pub mod clue;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod game;
pub mod models;
pub mod reveal;
pub mod roster;
pub mod streak;

pub use clue::{career_clue, CareerAverages, CareerStats};
pub use config::{GameConfig, MAX_GUESSES};
pub use data::teams::{Conference, Division, TeamAlignment, TeamCode};
pub use engine::feedback::{
    check_win, compare, compare_with, Direction, FeedbackConfig, GuessFeedback,
};
pub use error::{CoreError, GameError, Result};
pub use game::session::{GameSession, GuessOutcome, Phase};
pub use models::player::{Height, PlayerAttributes, RawPlayerInfo};
pub use roster::Roster;
pub use streak::{StreakRecord, StreakStore};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
