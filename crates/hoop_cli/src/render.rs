//! Plain-text rendering of guess feedback

use hoop_core::{Direction, GuessFeedback};

const HIT: &str = "✓";
const MISS: &str = "✗";

fn mark(matched: bool) -> &'static str {
    if matched {
        HIT
    } else {
        MISS
    }
}

fn hint(direction: Option<Direction>) -> String {
    direction.map(|d| format!(" {}", d.arrow())).unwrap_or_default()
}

/// `1. Stephen Curry | Team: ✗ GSW | Pos: ✓ Guard | Ht: ✗ 6-2 ↑ | ...`
pub fn feedback_row(number: usize, feedback: &GuessFeedback) -> String {
    let na = || "N/A".to_string();
    format!(
        "{}. {} | Team: {} {} | Pos: {} {} | Ht: {} {}{} | Wt: {} {}{} | Conf: {} {} | Div: {} {}",
        number,
        feedback.name,
        mark(feedback.team_match),
        feedback.team,
        mark(feedback.position_match),
        feedback.position.clone().unwrap_or_else(na),
        mark(feedback.height_match),
        feedback.height.map(|h| h.to_string()).unwrap_or_else(na),
        hint(feedback.height_hint),
        mark(feedback.weight_match),
        feedback.weight.map(|w| w.to_string()).unwrap_or_else(na),
        hint(feedback.weight_hint),
        mark(feedback.conference_match),
        feedback.conference,
        mark(feedback.division_match),
        feedback.division,
    )
}

pub fn history(guesses: &[GuessFeedback]) -> String {
    let rows: String = guesses
        .iter()
        .enumerate()
        .map(|(i, feedback)| format!("{}\n", feedback_row(i + 1, feedback)))
        .collect();
    format!("Guesses:\n{}", rows)
}
