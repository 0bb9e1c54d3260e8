//! Game session state machine
//!
//! `NoTarget → InProgress → {Won, Lost}`. Terminal phases accept no guesses;
//! `reset` (or `ensure_started`) returns to `NoTarget` and a fresh game.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::engine::feedback::{check_win, compare_with, GuessFeedback};
use crate::error::GameError;
use crate::models::player::PlayerAttributes;
use crate::roster::Roster;

pub type GameResult<T> = std::result::Result<T, GameError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    NoTarget,
    InProgress,
    Won,
    Lost,
}

impl Phase {
    pub fn is_finished(&self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

/// What a single accepted guess did to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Wrong guess, game continues
    Continue { feedback: GuessFeedback, remaining: usize },
    Won { feedback: GuessFeedback, guesses_used: usize },
    /// Last guess spent without finding the target
    Lost { feedback: GuessFeedback, target: PlayerAttributes },
}

impl GuessOutcome {
    pub fn feedback(&self) -> &GuessFeedback {
        match self {
            GuessOutcome::Continue { feedback, .. }
            | GuessOutcome::Won { feedback, .. }
            | GuessOutcome::Lost { feedback, .. } => feedback,
        }
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self, GuessOutcome::Continue { .. })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    config: GameConfig,
    phase: Phase,
    target: Option<PlayerAttributes>,
    /// Append-only within a game, never longer than `config.max_guesses`
    guesses: Vec<GuessFeedback>,
    /// Non-decreasing within a game
    reveal_level: u8,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameSession {
    /// Out-of-range limits in `config` are clamped, see [`GameConfig::clamped`]
    pub fn new(config: GameConfig) -> Self {
        let config = config.clamped();
        Self { config, phase: Phase::NoTarget, target: None, guesses: Vec::new(), reveal_level: 0 }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn target(&self) -> Option<&PlayerAttributes> {
        self.target.as_ref()
    }

    pub fn guesses(&self) -> &[GuessFeedback] {
        &self.guesses
    }

    pub fn reveal_level(&self) -> u8 {
        self.reveal_level
    }

    pub fn remaining_guesses(&self) -> usize {
        match self.phase {
            Phase::InProgress => self.config.max_guesses.saturating_sub(self.guesses.len()),
            _ => 0,
        }
    }

    /// Begin a game against `target`, discarding whatever came before
    pub fn start(&mut self, target: PlayerAttributes) {
        log::debug!("New game started (target id {})", target.person_id);
        self.target = Some(target);
        self.guesses.clear();
        self.reveal_level = 0;
        self.phase = Phase::InProgress;
    }

    /// Begin a game against a random roster player
    pub fn start_random<R: Rng + ?Sized>(
        &mut self,
        roster: &Roster,
        rng: &mut R,
    ) -> GameResult<&PlayerAttributes> {
        let target = roster.choose_random(rng).ok_or(GameError::EmptyRoster)?.clone();
        self.start(target);
        self.target.as_ref().ok_or(GameError::NoActiveGame)
    }

    /// Start a game unless one is already running.
    ///
    /// Returns `true` when a new game was started.
    pub fn ensure_started<R: Rng + ?Sized>(
        &mut self,
        roster: &Roster,
        rng: &mut R,
    ) -> GameResult<bool> {
        if self.phase == Phase::InProgress {
            return Ok(false);
        }
        self.reset();
        self.start_random(roster, rng)?;
        Ok(true)
    }

    /// Drop the current game in any phase
    pub fn reset(&mut self) {
        self.phase = Phase::NoTarget;
        self.target = None;
        self.guesses.clear();
        self.reveal_level = 0;
    }

    pub fn submit_guess(&mut self, guessed: &PlayerAttributes) -> GameResult<GuessOutcome> {
        match self.phase {
            Phase::NoTarget => return Err(GameError::NoActiveGame),
            Phase::Won | Phase::Lost => return Err(GameError::GameFinished),
            Phase::InProgress => {}
        }
        let target = self.target.as_ref().ok_or(GameError::NoActiveGame)?;

        let feedback = compare_with(guessed, target, &self.config.feedback);
        let won = check_win(guessed, target);
        self.guesses.push(feedback.clone());

        if won {
            self.phase = Phase::Won;
            self.reveal_level = self.config.max_reveal_level;
            log::info!("Game won in {} guess(es)", self.guesses.len());
            return Ok(GuessOutcome::Won { feedback, guesses_used: self.guesses.len() });
        }

        if self.guesses.len() >= self.config.max_guesses {
            self.phase = Phase::Lost;
            self.reveal_level = self.config.max_reveal_level;
            let target = target.clone();
            log::info!("Game lost; answer was {}", target.name);
            return Ok(GuessOutcome::Lost { feedback, target });
        }

        self.reveal_level = self.reveal_level.saturating_add(1).min(self.config.max_reveal_level);
        Ok(GuessOutcome::Continue { feedback, remaining: self.remaining_guesses() })
    }
}
