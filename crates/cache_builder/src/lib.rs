//! Cache Builder Library
//!
//! Stats API JSON exports → PlayerIndex → MessagePack → LZ4 압축 → SHA256 체크섬

pub mod player_cache;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

// Re-export player_cache types
pub use player_cache::{
    build_player_cache, load_player_cache, parse_exports, CachedPlayer, ExportPaths, ParseStats,
    PlayerIndex,
};

/// 캐시 메타데이터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheMetadata {
    /// 스키마 버전 (예: "v1")
    pub schema_version: String,
    /// SHA256 체크섬 (hex 문자열)
    pub checksum: String,
    /// 생성 시각 (RFC3339 형식)
    pub created_at: String,
    /// 캐시된 선수 수
    pub player_count: u32,
    /// 압축 전 MessagePack 크기 (bytes)
    pub original_size: u64,
    /// 압축 후 크기 (bytes)
    pub compressed_size: u64,
    /// 압축률 (압축 후 / 원본)
    pub compression_ratio: f64,
}

/// SHA256 hex digest
pub fn checksum_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// 출력 파일 쓰기 (상위 디렉터리 생성 포함)
pub(crate) fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    fs::write(path, bytes)
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}

/// 캐시 파일의 무결성 검증
///
/// # Arguments
///
/// * `cache_file` - 캐시 파일 경로
/// * `expected_checksum` - 예상되는 SHA256 체크섬
///
/// # Returns
///
/// 체크섬 일치 여부
pub fn verify_cache(cache_file: &Path, expected_checksum: &str) -> Result<bool> {
    let bytes = fs::read(cache_file)
        .with_context(|| format!("Failed to read cache file: {}", cache_file.display()))?;

    Ok(checksum_hex(&bytes).eq_ignore_ascii_case(expected_checksum.trim()))
}

/// Human-readable byte size formatting
pub fn human_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_idx])
}
