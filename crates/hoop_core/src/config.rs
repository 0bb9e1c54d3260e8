//! # Game Configuration
//!
//! 게임 규칙 상수를 한 곳에서 관리.
//!
//! ```rust
//! use hoop_core::config::GameConfig;
//!
//! let config = GameConfig::default();
//! assert_eq!(config.max_guesses, 6);
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::engine::feedback::FeedbackConfig;
use crate::error::{CoreError, Result};
use crate::reveal::MAX_REVEAL_LEVEL;

/// Hard cap on guesses per game
pub const MAX_GUESSES: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Guesses allowed per game (기본: 6)
    pub max_guesses: usize,
    /// Highest reveal level reached before the answer is shown (기본: 5)
    pub max_reveal_level: u8,
    /// Autocomplete list length (기본: 10)
    pub suggestion_limit: usize,
    /// Weight tolerances
    pub feedback: FeedbackConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: MAX_GUESSES,
            max_reveal_level: MAX_REVEAL_LEVEL,
            suggestion_limit: 10,
            feedback: FeedbackConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load from a `.yaml`/`.yml` or `.json` file; missing keys take defaults
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let extension = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);

        let config: GameConfig = match extension.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&text)?,
            Some("json") => serde_json::from_str(&text)?,
            other => {
                return Err(CoreError::InvalidConfig(format!(
                    "unsupported config extension {:?} ({})",
                    other,
                    path.display()
                )))
            }
        };

        config.validate()?;
        log::debug!("Loaded game config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_guesses == 0 {
            return Err(CoreError::InvalidConfig("max_guesses must be at least 1".to_string()));
        }
        if self.max_guesses > MAX_GUESSES {
            return Err(CoreError::InvalidConfig(format!(
                "max_guesses {} exceeds the limit ({})",
                self.max_guesses, MAX_GUESSES
            )));
        }
        if self.max_reveal_level > MAX_REVEAL_LEVEL {
            return Err(CoreError::InvalidConfig(format!(
                "max_reveal_level {} exceeds the headshot ladder ({})",
                self.max_reveal_level, MAX_REVEAL_LEVEL
            )));
        }
        Ok(())
    }

    /// Same config with out-of-range limits pulled back into bounds
    pub fn clamped(mut self) -> Self {
        let max_guesses = self.max_guesses.clamp(1, MAX_GUESSES);
        let max_reveal_level = self.max_reveal_level.min(MAX_REVEAL_LEVEL);
        if max_guesses != self.max_guesses || max_reveal_level != self.max_reveal_level {
            log::warn!(
                "Game config out of range (max_guesses {}, max_reveal_level {}); clamped to {} and {}",
                self.max_guesses,
                self.max_reveal_level,
                max_guesses,
                max_reveal_level
            );
        }
        self.max_guesses = max_guesses;
        self.max_reveal_level = max_reveal_level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.max_guesses, 6);
        assert_eq!(cfg.max_reveal_level, 5);
        assert_eq!(cfg.suggestion_limit, 10);
        assert_eq!(cfg.feedback.weight_match_tolerance, 10);
        assert_eq!(cfg.feedback.weight_hint_tolerance, 10);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_yaml_partial_override() {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "max_guesses: 4\nfeedback:\n  weight_hint_tolerance: 15").unwrap();

        let cfg = GameConfig::from_path(file.path()).unwrap();
        assert_eq!(cfg.max_guesses, 4);
        assert_eq!(cfg.max_reveal_level, 5);
        assert_eq!(cfg.feedback.weight_match_tolerance, 10);
        assert_eq!(cfg.feedback.weight_hint_tolerance, 15);
    }

    #[test]
    fn test_json_config() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"suggestion_limit": 5}}"#).unwrap();

        let cfg = GameConfig::from_path(file.path()).unwrap();
        assert_eq!(cfg.suggestion_limit, 5);
        assert_eq!(cfg.max_guesses, 6);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let zero = GameConfig { max_guesses: 0, ..GameConfig::default() };
        assert!(matches!(zero.validate(), Err(CoreError::InvalidConfig(_))));

        let too_far = GameConfig { max_reveal_level: 9, ..GameConfig::default() };
        assert!(too_far.validate().is_err());

        let too_many = GameConfig { max_guesses: 7, ..GameConfig::default() };
        assert!(matches!(too_many.validate(), Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn test_guess_budget_over_limit_refused_from_file() {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "max_guesses: 7").unwrap();

        assert!(matches!(
            GameConfig::from_path(file.path()),
            Err(CoreError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_clamped() {
        let wild = GameConfig { max_guesses: 1000, max_reveal_level: u8::MAX, ..GameConfig::default() };
        let cfg = wild.clamped();
        assert_eq!(cfg.max_guesses, MAX_GUESSES);
        assert_eq!(cfg.max_reveal_level, MAX_REVEAL_LEVEL);
        assert!(cfg.validate().is_ok());

        let zero = GameConfig { max_guesses: 0, ..GameConfig::default() }.clamped();
        assert_eq!(zero.max_guesses, 1);

        let small = GameConfig { max_guesses: 3, max_reveal_level: 2, ..GameConfig::default() };
        assert_eq!(small.clone().clamped(), small);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = Builder::new().suffix(".toml").tempfile().unwrap();
        assert!(matches!(
            GameConfig::from_path(file.path()),
            Err(CoreError::InvalidConfig(_))
        ));
    }
}
