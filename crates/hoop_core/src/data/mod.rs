//! Static reference data

pub mod teams;

pub use teams::{
    conference_of, division_of, team_alignment, Conference, Division, TeamAlignment, TeamCode,
};
