//! Player pool
//!
//! Lookup by id, fuzzy name search for guesses, autocomplete suggestions and
//! random target selection.

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::models::player::PlayerAttributes;

/// Minimum query length before suggestions are offered
pub const MIN_SUGGESTION_QUERY: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct Roster {
    /// Sorted by display name (case-insensitive)
    players: Vec<PlayerAttributes>,
    by_id: FxHashMap<u32, usize>,
}

impl Roster {
    /// Build a roster; duplicate ids keep the first record seen
    pub fn from_players(players: impl IntoIterator<Item = PlayerAttributes>) -> Self {
        let mut seen = FxHashSet::default();
        let mut unique = Vec::new();
        for player in players {
            if seen.insert(player.person_id) {
                unique.push(player);
            } else {
                log::debug!("Duplicate player id {} ignored", player.person_id);
            }
        }

        unique.sort_by_cached_key(|p| p.name.to_lowercase());

        let by_id = unique.iter().enumerate().map(|(idx, p)| (p.person_id, idx)).collect();
        Self { players: unique, by_id }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerAttributes> {
        self.players.iter()
    }

    pub fn get(&self, person_id: u32) -> Option<&PlayerAttributes> {
        self.by_id.get(&person_id).map(|&idx| &self.players[idx])
    }

    /// Resolve a typed guess to one player.
    ///
    /// An exact (case-insensitive) name wins; otherwise the first name that
    /// contains the query.
    pub fn find_by_name(&self, query: &str) -> Option<&PlayerAttributes> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        let mut first_partial = None;
        for player in &self.players {
            let name = player.name.to_lowercase();
            if name == query {
                return Some(player);
            }
            if first_partial.is_none() && name.contains(&query) {
                first_partial = Some(player);
            }
        }
        first_partial
    }

    /// Names containing the query, at most `limit`
    pub fn suggestions(&self, query: &str, limit: usize) -> Vec<&str> {
        let query = query.trim().to_lowercase();
        if query.chars().count() < MIN_SUGGESTION_QUERY {
            return Vec::new();
        }

        self.players
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&query))
            .take(limit)
            .map(|p| p.name.as_str())
            .collect()
    }

    pub fn choose_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&PlayerAttributes> {
        self.players.choose(rng)
    }
}

impl FromIterator<PlayerAttributes> for Roster {
    fn from_iter<I: IntoIterator<Item = PlayerAttributes>>(iter: I) -> Self {
        Self::from_players(iter)
    }
}
