//! Guess feedback
//!
//! Compares a guessed player against the target and reports, per attribute,
//! whether it matches plus a higher/lower hint for height and weight.
//! Pure functions: no state, no failure modes. Absent data never matches.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::data::teams::{Conference, Division, TeamCode};
use crate::models::player::{Height, PlayerAttributes};

/// Weight window (pounds) for both the match flag and the arrow
pub const DEFAULT_WEIGHT_TOLERANCE_LBS: u16 = 10;

/// Which way the target's value lies relative to the guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Higher,
    Lower,
}

impl Direction {
    /// `None` when the values are equal
    pub fn towards<T: Ord>(guessed: T, target: T) -> Option<Self> {
        match target.cmp(&guessed) {
            Ordering::Greater => Some(Direction::Higher),
            Ordering::Less => Some(Direction::Lower),
            Ordering::Equal => None,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::Higher => "↑",
            Direction::Lower => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// `|guess - target| <= this` counts as a weight match
    pub weight_match_tolerance: u16,
    /// `|guess - target| > this` emits a weight arrow
    pub weight_hint_tolerance: u16,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            weight_match_tolerance: DEFAULT_WEIGHT_TOLERANCE_LBS,
            weight_hint_tolerance: DEFAULT_WEIGHT_TOLERANCE_LBS,
        }
    }
}

/// Result of one guess, built fresh per guess and never mutated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessFeedback {
    // Guessed player's attributes, for display
    pub name: String,
    pub team: TeamCode,
    pub position: Option<String>,
    pub height: Option<Height>,
    pub weight: Option<u16>,
    pub conference: Conference,
    pub division: Division,

    pub team_match: bool,
    pub position_match: bool,
    pub height_match: bool,
    pub weight_match: bool,
    pub conference_match: bool,
    pub division_match: bool,

    pub height_hint: Option<Direction>,
    pub weight_hint: Option<Direction>,
}

impl GuessFeedback {
    pub fn all_match(&self) -> bool {
        self.team_match
            && self.position_match
            && self.height_match
            && self.weight_match
            && self.conference_match
            && self.division_match
    }

    pub fn match_count(&self) -> usize {
        [
            self.team_match,
            self.position_match,
            self.height_match,
            self.weight_match,
            self.conference_match,
            self.division_match,
        ]
        .iter()
        .filter(|m| **m)
        .count()
    }
}

/// Compare with the default tolerances
pub fn compare(guessed: &PlayerAttributes, target: &PlayerAttributes) -> GuessFeedback {
    compare_with(guessed, target, &FeedbackConfig::default())
}

pub fn compare_with(
    guessed: &PlayerAttributes,
    target: &PlayerAttributes,
    config: &FeedbackConfig,
) -> GuessFeedback {
    let (guessed_conf, guessed_div) = (guessed.conference(), guessed.division());
    let (target_conf, target_div) = (target.conference(), target.division());

    let height_match = matches!((guessed.height, target.height), (Some(g), Some(t)) if g == t);
    let height_hint = match (guessed.height, target.height) {
        (Some(g), Some(t)) => Direction::towards(g.inches(), t.inches()),
        _ => None,
    };

    // Match flag and arrow are separate checks with separate tolerances.
    let weight_match = match (guessed.weight, target.weight) {
        (Some(g), Some(t)) => g.abs_diff(t) <= config.weight_match_tolerance,
        _ => false,
    };
    let weight_hint = match (guessed.weight, target.weight) {
        (Some(g), Some(t)) if g.abs_diff(t) > config.weight_hint_tolerance => {
            Direction::towards(g, t)
        }
        _ => None,
    };

    GuessFeedback {
        name: guessed.name.clone(),
        team: guessed.team_code,
        position: guessed.position.clone(),
        height: guessed.height,
        weight: guessed.weight,
        conference: guessed_conf,
        division: guessed_div,

        team_match: same_team(guessed, target),
        position_match: same_position(guessed.position.as_deref(), target.position.as_deref()),
        height_match,
        weight_match,
        conference_match: guessed_conf.is_known() && guessed_conf == target_conf,
        division_match: guessed_div.is_known() && guessed_div == target_div,

        height_hint,
        weight_hint,
    }
}

/// Case-insensitive display-name equality
pub fn check_win(guessed: &PlayerAttributes, target: &PlayerAttributes) -> bool {
    guessed.name.to_lowercase() == target.name.to_lowercase()
}

fn same_team(guessed: &PlayerAttributes, target: &PlayerAttributes) -> bool {
    match (guessed.team_id, target.team_id) {
        (Some(g), Some(t)) => g == t,
        // No franchise id on one side: fall back to the abbreviation
        _ => guessed.team_code.is_known() && guessed.team_code == target.team_code,
    }
}

fn same_position(guessed: Option<&str>, target: Option<&str>) -> bool {
    match (guessed.map(str::trim), target.map(str::trim)) {
        (Some(g), Some(t)) if !g.is_empty() && !t.is_empty() => g.to_lowercase() == t.to_lowercase(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn player(name: &str, team: TeamCode) -> PlayerAttributes {
        PlayerAttributes::new(1, name).with_team(None, team)
    }

    fn full_player(name: &str, team_id: u32, team: TeamCode) -> PlayerAttributes {
        PlayerAttributes::new(team_id, name)
            .with_team(Some(team_id), team)
            .with_position("Forward")
            .with_height(Height::from_inches(80))
            .with_weight(250)
    }

    #[test]
    fn test_identical_player_matches_everything() {
        let lebron = full_player("LeBron James", 1610612747, TeamCode::LAL);
        let feedback = compare(&lebron, &lebron);

        assert!(feedback.all_match());
        assert_eq!(feedback.match_count(), 6);
        assert_eq!(feedback.height_hint, None);
        assert_eq!(feedback.weight_hint, None);
    }

    #[test]
    fn test_check_win_ignores_case() {
        let guess = player("LeBron James", TeamCode::LAL);
        let target = player("lebron james", TeamCode::LAL);
        assert!(check_win(&guess, &target));
        assert!(!check_win(&guess, &player("Bronny James", TeamCode::LAL)));
    }

    #[test]
    fn test_height_hint_points_to_target() {
        let guess = player("Short", TeamCode::GSW).with_height(Height::from_feet_inches(6, 2));
        let target = player("Tall", TeamCode::GSW).with_height(Height::from_feet_inches(6, 8));

        let feedback = compare(&guess, &target);
        assert!(!feedback.height_match);
        assert_eq!(feedback.height_hint, Some(Direction::Higher));

        let reversed = compare(&target, &guess);
        assert_eq!(reversed.height_hint, Some(Direction::Lower));
    }

    #[test]
    fn test_missing_height_never_matches() {
        let guess = player("No Height", TeamCode::GSW);
        let target = player("Has Height", TeamCode::GSW).with_height(Height::from_inches(80));

        let feedback = compare(&guess, &target);
        assert!(!feedback.height_match);
        assert_eq!(feedback.height_hint, None);

        let both_missing = compare(&guess, &guess);
        assert!(!both_missing.height_match);
    }

    #[test]
    fn test_missing_weight_never_matches() {
        let guess = player("Has Weight", TeamCode::GSW).with_weight(220);
        let target = player("No Weight", TeamCode::GSW);

        let feedback = compare(&guess, &target);
        assert!(!feedback.weight_match);
        assert_eq!(feedback.weight_hint, None);

        let both_missing = compare(&target, &target);
        assert!(!both_missing.weight_match);
        assert_eq!(both_missing.weight_hint, None);
    }

    #[test]
    fn test_weight_outside_tolerance() {
        let guess = player("Light", TeamCode::GSW).with_weight(200);
        let target = player("Heavy", TeamCode::GSW).with_weight(215);

        let feedback = compare(&guess, &target);
        assert!(!feedback.weight_match);
        assert_eq!(feedback.weight_hint, Some(Direction::Higher));
    }

    #[test]
    fn test_weight_within_tolerance() {
        let guess = player("A", TeamCode::GSW).with_weight(205);
        let target = player("B", TeamCode::GSW).with_weight(210);

        let feedback = compare(&guess, &target);
        assert!(feedback.weight_match);
        assert_eq!(feedback.weight_hint, None);
    }

    #[test]
    fn test_weight_on_tolerance_boundary() {
        let guess = player("A", TeamCode::GSW).with_weight(200);
        let target = player("B", TeamCode::GSW).with_weight(210);

        let feedback = compare(&guess, &target);
        assert!(feedback.weight_match);
        assert_eq!(feedback.weight_hint, None);

        let target = player("C", TeamCode::GSW).with_weight(189);
        let feedback = compare(&guess, &target);
        assert!(!feedback.weight_match);
        assert_eq!(feedback.weight_hint, Some(Direction::Lower));
    }

    #[test]
    fn test_weight_tolerances_are_independent() {
        let config = FeedbackConfig { weight_match_tolerance: 5, weight_hint_tolerance: 20 };
        let guess = player("A", TeamCode::GSW).with_weight(200);
        let target = player("B", TeamCode::GSW).with_weight(215);

        // Outside the match window but inside the arrow window
        let feedback = compare_with(&guess, &target, &config);
        assert!(!feedback.weight_match);
        assert_eq!(feedback.weight_hint, None);
    }

    #[test]
    fn test_same_conference_different_division() {
        let feedback = compare(&player("Warrior", TeamCode::GSW), &player("Nugget", TeamCode::DEN));
        assert!(feedback.conference_match);
        assert!(!feedback.division_match);
        assert!(!feedback.team_match);
    }

    #[test]
    fn test_same_division_different_team() {
        let feedback = compare(&player("Warrior", TeamCode::GSW), &player("Laker", TeamCode::LAL));
        assert!(feedback.conference_match);
        assert!(feedback.division_match);
        assert!(!feedback.team_match);
    }

    #[test]
    fn test_unknown_team_never_matches() {
        let unknown = player("Free Agent", TeamCode::Unknown);
        let known = player("Celtic", TeamCode::BOS);

        for (guess, target) in [(&unknown, &known), (&known, &unknown), (&unknown, &unknown)] {
            let feedback = compare(guess, target);
            assert!(!feedback.conference_match);
            assert!(!feedback.division_match);
            assert!(!feedback.team_match);
        }

        let feedback = compare(&unknown, &unknown);
        assert_eq!(feedback.conference, Conference::Unknown);
        assert_eq!(feedback.division, Division::Unknown);
    }

    #[test]
    fn test_team_match_prefers_team_id() {
        let guess = PlayerAttributes::new(1, "A").with_team(Some(10), TeamCode::LAL);
        let target = PlayerAttributes::new(2, "B").with_team(Some(11), TeamCode::LAL);
        assert!(!compare(&guess, &target).team_match);

        let target = PlayerAttributes::new(3, "C").with_team(Some(10), TeamCode::LAL);
        assert!(compare(&guess, &target).team_match);

        let no_id = PlayerAttributes::new(4, "D").with_team(None, TeamCode::LAL);
        assert!(compare(&guess, &no_id).team_match);
    }

    #[test]
    fn test_position_match_ignores_case() {
        let guess = player("A", TeamCode::GSW).with_position("guard");
        let target = player("B", TeamCode::GSW).with_position("Guard");
        assert!(compare(&guess, &target).position_match);

        let missing = player("C", TeamCode::GSW);
        assert!(!compare(&missing, &missing).position_match);
        assert!(!compare(&guess, &missing).position_match);
    }

    #[test]
    fn test_feedback_carries_guessed_attributes() {
        let guess = full_player("Guess", 1610612743, TeamCode::DEN);
        let target = full_player("Target", 1610612744, TeamCode::GSW);

        let feedback = compare(&guess, &target);
        assert_eq!(feedback.name, "Guess");
        assert_eq!(feedback.team, TeamCode::DEN);
        assert_eq!(feedback.division, Division::Northwest);
        assert_eq!(feedback.weight, Some(250));
    }

    fn arb_player() -> impl Strategy<Value = PlayerAttributes> {
        (
            1u32..2_000_000,
            "[A-Za-z]{2,12} [A-Za-z]{2,12}",
            0usize..30,
            prop::sample::select(vec!["Guard", "Forward", "Center", "Guard-Forward"]),
            60u16..96,
            150u16..330,
        )
            .prop_map(|(id, name, team, position, height, weight)| {
                PlayerAttributes::new(id, name)
                    .with_team(Some(1_610_612_737 + team as u32), TeamCode::ALL[team])
                    .with_position(position)
                    .with_height(Height::from_inches(height))
                    .with_weight(weight)
            })
    }

    proptest! {
        /// A fully populated player always matches itself
        #[test]
        fn prop_self_comparison_matches_all(p in arb_player()) {
            let feedback = compare(&p, &p);
            prop_assert!(feedback.all_match());
            prop_assert!(feedback.height_hint.is_none());
            prop_assert!(feedback.weight_hint.is_none());
            prop_assert!(check_win(&p, &p));
        }

        /// Arrows always point from the guess toward the target
        #[test]
        fn prop_hints_point_at_target(a in arb_player(), b in arb_player()) {
            let feedback = compare(&a, &b);
            let (ga, gb) = (a.height.unwrap().inches(), b.height.unwrap().inches());
            match feedback.height_hint {
                Some(Direction::Higher) => prop_assert!(gb > ga),
                Some(Direction::Lower) => prop_assert!(gb < ga),
                None => prop_assert_eq!(ga, gb),
            }
            let (wa, wb) = (a.weight.unwrap(), b.weight.unwrap());
            prop_assert_eq!(feedback.weight_match, wa.abs_diff(wb) <= 10);
            prop_assert_eq!(feedback.weight_hint.is_some(), wa.abs_diff(wb) > 10);
        }
    }
}
