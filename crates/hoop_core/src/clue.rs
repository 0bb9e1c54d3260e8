//! Career-average clue shown after a wrong guess

use serde::{Deserialize, Serialize};

/// Career totals row (`CareerTotalsRegularSeason` / `CareerStats`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerStats {
    #[serde(rename = "GP")]
    pub games_played: Option<f64>,
    #[serde(rename = "PTS")]
    pub points: Option<f64>,
    #[serde(rename = "REB")]
    pub rebounds: Option<f64>,
    #[serde(rename = "AST")]
    pub assists: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CareerAverages {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
}

impl CareerStats {
    pub fn is_empty(&self) -> bool {
        self.games_played.is_none()
            && self.points.is_none()
            && self.rebounds.is_none()
            && self.assists.is_none()
    }

    /// Per-game averages; zero games played yields zeros
    pub fn averages(&self) -> CareerAverages {
        let games = self.games_played.unwrap_or(0.0);
        let per_game = |total: Option<f64>| {
            if games > 0.0 {
                total.unwrap_or(0.0) / games
            } else {
                0.0
            }
        };

        CareerAverages {
            points: per_game(self.points),
            rebounds: per_game(self.rebounds),
            assists: per_game(self.assists),
        }
    }
}

pub fn career_clue(stats: Option<&CareerStats>) -> String {
    match stats.filter(|s| !s.is_empty()) {
        Some(stats) => {
            let avg = stats.averages();
            format!(
                "Career averages - PPG: {:.1}, RPG: {:.1}, APG: {:.1}",
                avg.points, avg.rebounds, avg.assists
            )
        }
        None => "No stats available.".to_string(),
    }
}
