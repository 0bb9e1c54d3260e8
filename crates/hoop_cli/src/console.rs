//! Line-oriented game loop
//!
//! Reads one guess (or `:command`) per line. A finished game is replaced by a
//! fresh one before the next line is handled.

use anyhow::Result;
use cache_builder::PlayerIndex;
use chrono::NaiveDate;
use hoop_core::reveal::{full_headshot_url, headshot_url};
use hoop_core::{career_clue, GameConfig, GameSession, GuessOutcome, Roster, StreakStore};
use rand::Rng;
use std::io::{BufRead, Write};

use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaySummary {
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
}

pub struct Console<'a, R: Rng> {
    index: &'a PlayerIndex,
    roster: Roster,
    session: GameSession,
    rng: R,
    streak: Option<StreakStore>,
    today: NaiveDate,
    summary: PlaySummary,
}

impl<'a, R: Rng> Console<'a, R> {
    pub fn new(index: &'a PlayerIndex, config: GameConfig, rng: R, today: NaiveDate) -> Self {
        Self {
            index,
            roster: index.roster(),
            session: GameSession::new(config),
            rng,
            streak: None,
            today,
            summary: PlaySummary::default(),
        }
    }

    pub fn with_streak(mut self, streak: StreakStore) -> Self {
        self.streak = Some(streak);
        self
    }

    #[cfg(test)]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    #[cfg(test)]
    pub fn summary(&self) -> PlaySummary {
        self.summary
    }

    /// Start a new game if none is running, announcing it
    pub fn begin_if_idle<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.session.ensure_started(&self.roster, &mut self.rng)? {
            writeln!(
                out,
                "\nHoopMind - guess the NBA player in {} tries!",
                self.session.config().max_guesses
            )?;
        }
        Ok(())
    }

    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        if let Some(command) = line.strip_prefix(':') {
            return self.handle_command(command, out);
        }

        self.begin_if_idle(out)?;

        let Some(guessed) = self.roster.find_by_name(line).cloned() else {
            writeln!(out, "Player not found. Try again.")?;
            return Ok(Flow::Continue);
        };

        let outcome = self.session.submit_guess(&guessed)?;
        write!(out, "{}", render::history(self.session.guesses()))?;

        let target = self.session.target().cloned();
        let target_id = target.as_ref().map(|t| t.person_id);
        match outcome {
            GuessOutcome::Continue { remaining, .. } => {
                if let Some(id) = target_id {
                    if let Some(url) = headshot_url(id, self.session.reveal_level()) {
                        writeln!(out, "Headshot: {}", url)?;
                    }
                    writeln!(out, "Clue: {}", career_clue(self.index.stats_for(id)))?;
                }
                writeln!(out, "{} guess(es) left.", remaining)?;
            }
            GuessOutcome::Won { guesses_used, .. } => {
                let name = target.map(|t| t.name).unwrap_or(guessed.name);
                writeln!(out, "🎉 Correct! The player was {} ({} guesses).", name, guesses_used)?;
                self.finish(true, target_id, out)?;
            }
            GuessOutcome::Lost { target: answer, .. } => {
                writeln!(out, "❌ Game Over! The player was {}!", answer.name)?;
                self.finish(false, target_id, out)?;
            }
        }

        Ok(Flow::Continue)
    }

    fn handle_command<W: Write>(&mut self, command: &str, out: &mut W) -> Result<Flow> {
        let (name, arg) = command.split_once(' ').unwrap_or((command, ""));
        match name {
            "quit" | "q" => return Ok(Flow::Quit),
            "reset" => {
                tracing::debug!("Game reset by user");
                self.session.reset();
                self.begin_if_idle(out)?;
            }
            "suggest" => {
                let limit = self.session.config().suggestion_limit;
                let names = self.roster.suggestions(arg, limit);
                if names.is_empty() {
                    writeln!(out, "No suggestions.")?;
                }
                for name in names {
                    writeln!(out, "  {}", name)?;
                }
            }
            "streak" => match &self.streak {
                Some(store) => writeln!(out, "Streak: {}", store.streak())?,
                None => writeln!(out, "Streak tracking is off.")?,
            },
            _ => writeln!(out, "Commands: :suggest <name>, :reset, :streak, :quit")?,
        }
        Ok(Flow::Continue)
    }

    fn finish<W: Write>(&mut self, won: bool, target_id: Option<u32>, out: &mut W) -> Result<()> {
        self.summary.games += 1;
        if won {
            self.summary.wins += 1;
        } else {
            self.summary.losses += 1;
        }

        if let Some(id) = target_id {
            writeln!(out, "Headshot: {}", full_headshot_url(id))?;
        }

        if let Some(store) = self.streak.as_mut() {
            let streak = store.record_result(won, self.today);
            if let Err(err) = store.save() {
                tracing::warn!("Failed to save streak to {}: {}", store.path().display(), err);
            }
            writeln!(out, "Streak: {}", streak)?;
        }
        Ok(())
    }

    /// Play until `:quit` or end of input
    pub fn run<I: BufRead, W: Write>(mut self, input: I, mut out: W) -> Result<PlaySummary> {
        self.begin_if_idle(&mut out)?;
        for line in input.lines() {
            let line = line?;
            if self.handle_line(&line, &mut out)? == Flow::Quit {
                break;
            }
            // A finished game gives way to a fresh one before the next line
            if self.session.phase().is_finished() {
                self.begin_if_idle(&mut out)?;
            }
            out.flush()?;
        }
        Ok(self.summary)
    }
}
