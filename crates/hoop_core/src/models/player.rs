use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::data::teams::{conference_of, division_of, Conference, Division, TeamCode};
use crate::error::{CoreError, Result};

/// Player height, stored as total inches
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Height {
    inches: u16,
}

impl Height {
    pub fn from_inches(inches: u16) -> Self {
        Self { inches }
    }

    pub fn from_feet_inches(feet: u16, inches: u16) -> Self {
        Self { inches: feet * 12 + inches }
    }

    pub fn inches(&self) -> u16 {
        self.inches
    }

    /// Parse `"6-8"` (feet-inches) or `"80"` (inches).
    ///
    /// Returns `None` for blank, zero or malformed values.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let height = match raw.split_once('-') {
            Some((feet, inches)) => {
                let feet: u16 = feet.trim().parse().ok()?;
                let inches: u16 = inches.trim().parse().ok()?;
                if inches >= 12 {
                    return None;
                }
                Self::from_inches(feet.checked_mul(12)?.checked_add(inches)?)
            }
            None => Self::from_inches(raw.parse().ok()?),
        };

        (height.inches > 0).then_some(height)
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.inches / 12, self.inches % 12)
    }
}

/// Typed player record used by the feedback engine.
///
/// Optional fields are genuinely optional: a missing value never matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAttributes {
    pub person_id: u32,
    /// Display name ("First Last")
    pub name: String,
    /// Stable franchise id; free agents have none
    pub team_id: Option<u32>,
    pub team_code: TeamCode,
    pub position: Option<String>,
    pub height: Option<Height>,
    /// Pounds
    pub weight: Option<u16>,
}

impl PlayerAttributes {
    pub fn new(person_id: u32, name: impl Into<String>) -> Self {
        Self {
            person_id,
            name: name.into(),
            team_id: None,
            team_code: TeamCode::Unknown,
            position: None,
            height: None,
            weight: None,
        }
    }

    pub fn with_team(mut self, team_id: Option<u32>, team_code: TeamCode) -> Self {
        self.team_id = team_id;
        self.team_code = team_code;
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        let position = position.into();
        self.position = (!position.trim().is_empty()).then(|| position.trim().to_string());
        self
    }

    pub fn with_height(mut self, height: Height) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_weight(mut self, pounds: u16) -> Self {
        self.weight = Some(pounds);
        self
    }

    pub fn conference(&self) -> Conference {
        conference_of(self.team_code)
    }

    pub fn division(&self) -> Division {
        division_of(self.team_code)
    }
}

/// One `CommonPlayerInfo` row as exported by the stats API.
///
/// Numeric columns arrive as numbers or strings depending on the endpoint
/// version, so they are kept as raw JSON values until validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct RawPlayerInfo {
    pub person_id: Option<Value>,
    pub display_first_last: Option<String>,
    pub team_id: Option<Value>,
    pub team_abbreviation: Option<String>,
    pub position: Option<String>,
    pub height: Option<Value>,
    pub weight: Option<Value>,
}

impl RawPlayerInfo {
    /// An empty row (`{}`) is what the export writes for failed fetches
    pub fn is_empty(&self) -> bool {
        self.person_id.is_none() && self.display_first_last.is_none()
    }

    /// Validate into a typed record.
    ///
    /// Only a missing id or name rejects the row; every other malformed field
    /// degrades to `None` / `TeamCode::Unknown`.
    pub fn into_attributes(self) -> Result<PlayerAttributes> {
        let person_id = self
            .person_id
            .as_ref()
            .and_then(value_to_u32)
            .ok_or_else(|| CoreError::InvalidRecord("missing PERSON_ID".to_string()))?;

        let name = self
            .display_first_last
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| {
                CoreError::InvalidRecord(format!("missing DISPLAY_FIRST_LAST for {}", person_id))
            })?
            .to_string();

        let team_id = self.team_id.as_ref().and_then(value_to_u32).filter(|id| *id != 0);
        let team_code = TeamCode::parse(self.team_abbreviation.as_deref().unwrap_or(""));

        let position = self
            .position
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        let height = self.height.as_ref().and_then(|value| match value {
            Value::String(s) => Height::parse(s),
            other => value_to_u32(other)
                .and_then(|i| u16::try_from(i).ok())
                .filter(|i| *i > 0)
                .map(Height::from_inches),
        });

        let weight = self
            .weight
            .as_ref()
            .and_then(value_to_u32)
            .and_then(|w| u16::try_from(w).ok())
            .filter(|w| *w > 0);

        Ok(PlayerAttributes { person_id, name, team_id, team_code, position, height, weight })
    }
}

fn value_to_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f.round() as u64))
            .and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u32>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && *f >= 0.0 && *f <= u32::MAX as f64)
                    .map(|f| f.round() as u32)
            })
        }
        _ => None,
    }
}
