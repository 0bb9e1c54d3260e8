//! NBA team table
//!
//! Team code → (conference, division). Built once per process and read-only
//! afterwards.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Team abbreviation as reported by the stats API.
///
/// Anything outside the 30 current franchises (free agents, G-League
/// assignments, typos) is `Unknown`.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamCode {
    ATL,
    BOS,
    BKN,
    CHA,
    CHI,
    CLE,
    DAL,
    DEN,
    DET,
    GSW,
    HOU,
    IND,
    LAC,
    LAL,
    MEM,
    MIA,
    MIL,
    MIN,
    NOP,
    NYK,
    OKC,
    ORL,
    PHI,
    PHX,
    POR,
    SAC,
    SAS,
    TOR,
    UTA,
    WAS,
    Unknown,
}

impl TeamCode {
    /// All known franchises, alphabetical by code
    pub const ALL: [TeamCode; 30] = [
        TeamCode::ATL,
        TeamCode::BOS,
        TeamCode::BKN,
        TeamCode::CHA,
        TeamCode::CHI,
        TeamCode::CLE,
        TeamCode::DAL,
        TeamCode::DEN,
        TeamCode::DET,
        TeamCode::GSW,
        TeamCode::HOU,
        TeamCode::IND,
        TeamCode::LAC,
        TeamCode::LAL,
        TeamCode::MEM,
        TeamCode::MIA,
        TeamCode::MIL,
        TeamCode::MIN,
        TeamCode::NOP,
        TeamCode::NYK,
        TeamCode::OKC,
        TeamCode::ORL,
        TeamCode::PHI,
        TeamCode::PHX,
        TeamCode::POR,
        TeamCode::SAC,
        TeamCode::SAS,
        TeamCode::TOR,
        TeamCode::UTA,
        TeamCode::WAS,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TeamCode::ATL => "ATL",
            TeamCode::BOS => "BOS",
            TeamCode::BKN => "BKN",
            TeamCode::CHA => "CHA",
            TeamCode::CHI => "CHI",
            TeamCode::CLE => "CLE",
            TeamCode::DAL => "DAL",
            TeamCode::DEN => "DEN",
            TeamCode::DET => "DET",
            TeamCode::GSW => "GSW",
            TeamCode::HOU => "HOU",
            TeamCode::IND => "IND",
            TeamCode::LAC => "LAC",
            TeamCode::LAL => "LAL",
            TeamCode::MEM => "MEM",
            TeamCode::MIA => "MIA",
            TeamCode::MIL => "MIL",
            TeamCode::MIN => "MIN",
            TeamCode::NOP => "NOP",
            TeamCode::NYK => "NYK",
            TeamCode::OKC => "OKC",
            TeamCode::ORL => "ORL",
            TeamCode::PHI => "PHI",
            TeamCode::PHX => "PHX",
            TeamCode::POR => "POR",
            TeamCode::SAC => "SAC",
            TeamCode::SAS => "SAS",
            TeamCode::TOR => "TOR",
            TeamCode::UTA => "UTA",
            TeamCode::WAS => "WAS",
            TeamCode::Unknown => "N/A",
        }
    }

    /// Parse an abbreviation (case-insensitive, surrounding whitespace ignored)
    pub fn parse(raw: &str) -> Self {
        let code = raw.trim().to_uppercase();
        TeamCode::ALL
            .iter()
            .copied()
            .find(|team| team.as_str() == code)
            .unwrap_or(TeamCode::Unknown)
    }

    pub fn is_known(&self) -> bool {
        *self != TeamCode::Unknown
    }

    pub fn alignment(&self) -> Option<TeamAlignment> {
        team_alignment(*self)
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Conference {
    East,
    West,
    Unknown,
}

impl Conference {
    pub fn is_known(&self) -> bool {
        *self != Conference::Unknown
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Conference::East => "East",
            Conference::West => "West",
            Conference::Unknown => "N/A",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Division {
    Atlantic,
    Central,
    Southeast,
    Northwest,
    Pacific,
    Southwest,
    Unknown,
}

impl Division {
    pub fn is_known(&self) -> bool {
        *self != Division::Unknown
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Division::Atlantic => "Atlantic",
            Division::Central => "Central",
            Division::Southeast => "Southeast",
            Division::Northwest => "Northwest",
            Division::Pacific => "Pacific",
            Division::Southwest => "Southwest",
            Division::Unknown => "N/A",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamAlignment {
    pub conference: Conference,
    pub division: Division,
}

static TEAM_TABLE: Lazy<FxHashMap<TeamCode, TeamAlignment>> = Lazy::new(|| {
    use Conference::{East, West};
    use Division::*;

    let entries = [
        (TeamCode::ATL, East, Southeast),
        (TeamCode::BOS, East, Atlantic),
        (TeamCode::BKN, East, Atlantic),
        (TeamCode::CHA, East, Southeast),
        (TeamCode::CHI, East, Central),
        (TeamCode::CLE, East, Central),
        (TeamCode::DAL, West, Southwest),
        (TeamCode::DEN, West, Northwest),
        (TeamCode::DET, East, Central),
        (TeamCode::GSW, West, Pacific),
        (TeamCode::HOU, West, Southwest),
        (TeamCode::IND, East, Central),
        (TeamCode::LAC, West, Pacific),
        (TeamCode::LAL, West, Pacific),
        (TeamCode::MEM, West, Southwest),
        (TeamCode::MIA, East, Southeast),
        (TeamCode::MIL, East, Central),
        (TeamCode::MIN, West, Northwest),
        (TeamCode::NOP, West, Southwest),
        (TeamCode::NYK, East, Atlantic),
        (TeamCode::OKC, West, Northwest),
        (TeamCode::ORL, East, Southeast),
        (TeamCode::PHI, East, Atlantic),
        (TeamCode::PHX, West, Pacific),
        (TeamCode::POR, West, Northwest),
        (TeamCode::SAC, West, Pacific),
        (TeamCode::SAS, West, Southwest),
        (TeamCode::TOR, East, Atlantic),
        (TeamCode::UTA, West, Northwest),
        (TeamCode::WAS, East, Southeast),
    ];

    let mut table = FxHashMap::default();
    for (code, conference, division) in entries {
        table.insert(code, TeamAlignment { conference, division });
    }
    table
});

/// Conference/division for a team, `None` for `TeamCode::Unknown`
pub fn team_alignment(code: TeamCode) -> Option<TeamAlignment> {
    TEAM_TABLE.get(&code).copied()
}

pub fn conference_of(code: TeamCode) -> Conference {
    team_alignment(code).map(|a| a.conference).unwrap_or(Conference::Unknown)
}

pub fn division_of(code: TeamCode) -> Division {
    team_alignment(code).map(|a| a.division).unwrap_or(Division::Unknown)
}
