//! Player Cache Builder - Stats API exports → Binary Cache Pipeline
//!
//! Inputs are the three JSON files written by the offline fetch script:
//!
//! - `players.json` - `[{ "id", "full_name", "is_active", ... }]`
//! - `player_details.json` - `{ "<id>": CommonPlayerInfo row, or {} on fetch failure }`
//! - `player_stats.json` - `{ "<id>": career totals row, or {} }` (optional)
//!
//! Active players → validated `PlayerAttributes` → FxHashMap<u32, CachedPlayer>
//! → MessagePack → LZ4

use anyhow::{Context, Result};
use hoop_core::{CareerStats, PlayerAttributes, RawPlayerInfo, Roster};
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{checksum_hex, human_bytes, write_output, CacheMetadata};

/// One cached player: validated attributes plus career totals for clues
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedPlayer {
    pub attributes: PlayerAttributes,
    pub career: Option<CareerStats>,
}

/// Runtime index for player lookup by person id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerIndex {
    /// Player lookup by person id
    pub players: FxHashMap<u32, CachedPlayer>,
    /// Total player count
    pub count: u32,
    /// Schema version
    pub schema_version: String,
}

impl PlayerIndex {
    /// Create new empty index
    pub fn new(schema_version: String) -> Self {
        Self { players: FxHashMap::default(), count: 0, schema_version }
    }

    /// Add player to index (same id replaces)
    pub fn insert(&mut self, player: CachedPlayer) {
        self.players.insert(player.attributes.person_id, player);
        self.count = self.players.len() as u32;
    }

    pub fn get(&self, person_id: u32) -> Option<&CachedPlayer> {
        self.players.get(&person_id)
    }

    pub fn stats_for(&self, person_id: u32) -> Option<&CareerStats> {
        self.get(person_id).and_then(|p| p.career.as_ref())
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Player pool for the game session
    pub fn roster(&self) -> Roster {
        Roster::from_players(self.players.values().map(|p| p.attributes.clone()))
    }
}

/// Entry of `players.json`
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerListing {
    pub id: u32,
    pub full_name: String,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct ExportPaths {
    pub players: PathBuf,
    pub details: PathBuf,
    pub stats: Option<PathBuf>,
}

/// Export parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub total: u32,
    pub cached: u32,
    pub inactive: u32,
    pub missing_details: u32,
    pub invalid: u32,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse JSON: {}", path.display()))
}

/// Parse the exports into a PlayerIndex.
///
/// Inactive players and players whose details fetch failed are skipped and
/// counted, never fatal.
pub fn parse_exports(paths: &ExportPaths, schema_version: &str) -> Result<(PlayerIndex, ParseStats)> {
    let listings: Vec<PlayerListing> = read_json(&paths.players)?;
    let mut details: FxHashMap<String, RawPlayerInfo> = read_json(&paths.details)?;
    let mut careers: FxHashMap<String, CareerStats> = match &paths.stats {
        Some(path) => read_json(path)?,
        None => FxHashMap::default(),
    };

    let mut index = PlayerIndex::new(schema_version.to_string());
    let mut stats = ParseStats::default();

    for listing in listings {
        stats.total += 1;
        if !listing.is_active {
            stats.inactive += 1;
            continue;
        }

        let key = listing.id.to_string();
        let Some(mut raw) = details.remove(&key).filter(|raw| !raw.is_empty()) else {
            log::warn!("No details for {} ({}), skipping", listing.full_name, listing.id);
            stats.missing_details += 1;
            continue;
        };

        // players.json is authoritative for identity
        raw.person_id.get_or_insert_with(|| listing.id.into());
        if raw.display_first_last.as_deref().map_or(true, |n| n.trim().is_empty()) {
            raw.display_first_last = Some(listing.full_name.clone());
        }

        match raw.into_attributes() {
            Ok(attributes) => {
                let career = careers.remove(&key).filter(|c| !c.is_empty());
                index.insert(CachedPlayer { attributes, career });
                stats.cached += 1;
            }
            Err(err) => {
                log::warn!("Invalid record for {} ({}): {}", listing.full_name, listing.id, err);
                stats.invalid += 1;
            }
        }
    }

    Ok((index, stats))
}

/// Build binary player cache from the exports
///
/// # Arguments
///
/// * `paths` - players / details / stats JSON exports
/// * `output_msgpack_lz4` - Output binary cache file path
/// * `schema_version` - Schema version (e.g., "v1")
///
/// # Returns
///
/// Cache metadata including checksum, sizes, compression ratio
pub fn build_player_cache(
    paths: &ExportPaths,
    output_msgpack_lz4: &Path,
    schema_version: &str,
) -> Result<CacheMetadata> {
    // 1. Parse exports → PlayerIndex
    log::info!("Parsing exports: {}", paths.players.display());
    let (index, stats) = parse_exports(paths, schema_version)?;

    log::info!(
        "Cached {} players (inactive: {}, missing details: {}, invalid: {}, total: {})",
        stats.cached,
        stats.inactive,
        stats.missing_details,
        stats.invalid,
        stats.total
    );

    // 2. Serialize to MessagePack
    let msgpack_bytes = rmp_serde::to_vec_named(&index)
        .context("Failed to serialize PlayerIndex to MessagePack")?;
    let original_size = msgpack_bytes.len() as u64;

    // 3. LZ4 compression
    let compressed = lz4_flex::compress_prepend_size(&msgpack_bytes);
    let compressed_size = compressed.len() as u64;

    // 4. Checksum + write
    let checksum = checksum_hex(&compressed);
    write_output(output_msgpack_lz4, &compressed)?;

    let compression_ratio = compressed_size as f64 / original_size.max(1) as f64;

    log::info!(
        "Cache built: {} → {} (ratio: {:.2}%)",
        human_bytes(original_size),
        human_bytes(compressed_size),
        compression_ratio * 100.0
    );

    Ok(CacheMetadata {
        schema_version: schema_version.to_string(),
        checksum,
        created_at: chrono::Utc::now().to_rfc3339(),
        player_count: index.count,
        original_size,
        compressed_size,
        compression_ratio,
    })
}

/// Load binary cache into PlayerIndex
///
/// Pipeline: Binary file → LZ4 decompress → MessagePack deserialize → PlayerIndex
pub fn load_player_cache(cache_file: &Path) -> Result<PlayerIndex> {
    let compressed = fs::read(cache_file)
        .with_context(|| format!("Failed to read cache file: {}", cache_file.display()))?;

    let msgpack_bytes =
        lz4_flex::decompress_size_prepended(&compressed).context("Failed to decompress LZ4")?;

    let index: PlayerIndex = rmp_serde::from_slice(&msgpack_bytes)
        .context("Failed to deserialize PlayerIndex from MessagePack")?;

    log::debug!(
        "Loaded {} players (schema {}) from {}",
        index.len(),
        index.schema_version,
        cache_file.display()
    );
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoop_core::{Height, TeamCode};
    use serde_json::json;
    use tempfile::TempDir;

    fn write_exports(dir: &Path) -> ExportPaths {
        let players = json!([
            { "id": 2544, "full_name": "LeBron James", "is_active": true },
            { "id": 201939, "full_name": "Stephen Curry", "is_active": true },
            { "id": 76003, "full_name": "Kareem Abdul-Jabbar", "is_active": false },
            { "id": 1630000, "full_name": "Fetch Failed", "is_active": true },
            { "id": 1630001, "full_name": "No Details Entry", "is_active": true }
        ]);
        let details = json!({
            "2544": {
                "PERSON_ID": 2544,
                "DISPLAY_FIRST_LAST": "LeBron James",
                "TEAM_ID": 1610612747,
                "TEAM_ABBREVIATION": "LAL",
                "POSITION": "Forward",
                "HEIGHT": "6-9",
                "WEIGHT": "250"
            },
            "201939": {
                "PERSON_ID": 201939,
                "DISPLAY_FIRST_LAST": "Stephen Curry",
                "TEAM_ID": 1610612744,
                "TEAM_ABBREVIATION": "GSW",
                "POSITION": "Guard",
                "HEIGHT": "6-2",
                "WEIGHT": "185"
            },
            "1630000": {}
        });
        let stats = json!({
            "2544": { "GP": 1492, "PTS": 40474, "REB": 11185, "AST": 11009 },
            "201939": {}
        });

        let paths = ExportPaths {
            players: dir.join("players.json"),
            details: dir.join("player_details.json"),
            stats: Some(dir.join("player_stats.json")),
        };
        fs::write(&paths.players, players.to_string()).unwrap();
        fs::write(&paths.details, details.to_string()).unwrap();
        fs::write(paths.stats.as_ref().unwrap(), stats.to_string()).unwrap();
        paths
    }

    #[test]
    fn test_parse_exports_counts() -> Result<()> {
        let dir = TempDir::new()?;
        let paths = write_exports(dir.path());

        let (index, stats) = parse_exports(&paths, "v1")?;
        assert_eq!(
            stats,
            ParseStats { total: 5, cached: 2, inactive: 1, missing_details: 2, invalid: 0 }
        );
        assert_eq!(index.len(), 2);
        assert_eq!(index.count, 2);

        let lebron = &index.get(2544).unwrap().attributes;
        assert_eq!(lebron.team_code, TeamCode::LAL);
        assert_eq!(lebron.height, Some(Height::from_inches(81)));
        assert!(index.stats_for(2544).is_some());
        assert!(index.stats_for(201939).is_none());
        Ok(())
    }

    #[test]
    fn test_build_verify_load() -> Result<()> {
        let dir = TempDir::new()?;
        let paths = write_exports(dir.path());
        let output = dir.path().join("out").join("players.v1.msgpack.lz4");

        let metadata = build_player_cache(&paths, &output, "v1")?;
        assert_eq!(metadata.schema_version, "v1");
        assert_eq!(metadata.player_count, 2);
        assert!(crate::verify_cache(&output, &metadata.checksum)?);

        let loaded = load_player_cache(&output)?;
        assert_eq!(loaded.schema_version, "v1");
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.get(201939).unwrap().attributes.name, "Stephen Curry");

        let roster = loaded.roster();
        assert_eq!(roster.find_by_name("curry").unwrap().person_id, 201939);
        Ok(())
    }

    #[test]
    fn test_stats_file_is_optional() -> Result<()> {
        let dir = TempDir::new()?;
        let mut paths = write_exports(dir.path());
        paths.stats = None;

        let (index, _) = parse_exports(&paths, "v1")?;
        assert!(index.stats_for(2544).is_none());
        Ok(())
    }

    #[test]
    fn test_name_falls_back_to_listing() -> Result<()> {
        let dir = TempDir::new()?;
        let paths = ExportPaths {
            players: dir.path().join("players.json"),
            details: dir.path().join("details.json"),
            stats: None,
        };
        let players = json!([{ "id": 7, "full_name": "Listing Name", "is_active": true }]);
        let details = json!({ "7": { "PERSON_ID": 7, "TEAM_ABBREVIATION": "BOS" } });
        fs::write(&paths.players, players.to_string())?;
        fs::write(&paths.details, details.to_string())?;

        let (index, stats) = parse_exports(&paths, "v1")?;
        assert_eq!(stats.cached, 1);
        let player = &index.get(7).unwrap().attributes;
        assert_eq!(player.name, "Listing Name");
        assert_eq!(player.team_code, TeamCode::BOS);
        Ok(())
    }

    #[test]
    fn test_corrupt_cache_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.lz4");

        // Truncated size header
        fs::write(&path, [0x01u8]).unwrap();
        assert!(load_player_cache(&path).is_err());

        // Valid LZ4 frame around bytes that are not MessagePack
        fs::write(&path, lz4_flex::compress_prepend_size(&[0xc1])).unwrap();
        assert!(load_player_cache(&path).is_err());
    }
}
