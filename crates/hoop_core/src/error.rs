use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid player record: {0}")]
    InvalidRecord(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Rejections from the game session state machine.
///
/// The feedback engine itself never fails; only session transitions can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("No active game - start a new game first")]
    NoActiveGame,

    #[error("Game is already finished - reset to play again")]
    GameFinished,

    #[error("Roster is empty - cannot pick a target player")]
    EmptyRoster,
}

impl GameError {
    /// A fresh game fixes the error.
    pub fn is_recoverable(&self) -> bool {
        match self {
            GameError::NoActiveGame | GameError::GameFinished => true,
            GameError::EmptyRoster => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
