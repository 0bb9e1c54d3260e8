pub mod session;

pub use session::{GameResult, GameSession, GuessOutcome, Phase};
