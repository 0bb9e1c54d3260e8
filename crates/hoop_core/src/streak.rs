//! Daily win streak
//!
//! Persisted as a small JSON file. A streak only survives within one
//! calendar day: loading on a later day starts from zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub const DEFAULT_STREAK_FILE: &str = "nba_streak.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakRecord {
    pub streak: u32,
    pub last_session: Option<NaiveDate>,
}

impl StreakRecord {
    /// Win extends the streak, loss clears it
    pub fn record(&mut self, won: bool, today: NaiveDate) -> u32 {
        if won {
            self.streak += 1;
        } else {
            self.streak = 0;
        }
        self.last_session = Some(today);
        self.streak
    }
}

#[derive(Debug, Clone)]
pub struct StreakStore {
    path: PathBuf,
    record: StreakRecord,
}

impl StreakStore {
    /// Load the streak file; missing or unreadable files start a fresh record
    pub fn load(path: impl Into<PathBuf>, today: NaiveDate) -> Self {
        let path = path.into();
        let mut record = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str::<StreakRecord>(&text).unwrap_or_else(|err| {
                log::warn!("Ignoring corrupt streak file {}: {}", path.display(), err);
                StreakRecord::default()
            }),
            Err(_) => StreakRecord::default(),
        };

        if record.last_session != Some(today) {
            record.streak = 0;
        }

        Self { path, record }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self) -> &StreakRecord {
        &self.record
    }

    pub fn streak(&self) -> u32 {
        self.record.streak
    }

    pub fn record_result(&mut self, won: bool, today: NaiveDate) -> u32 {
        self.record.record(won, today)
    }

    /// Atomic save: write temp file, then rename over the target
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string(&self.record)?;
        let temp_path = self.path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&temp_path, &self.path)?;

        log::debug!("Streak {} saved to {}", self.record.streak, self.path.display());
        Ok(())
    }
}
