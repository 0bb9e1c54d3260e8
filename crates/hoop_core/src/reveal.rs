//! Headshot reveal ladder
//!
//! Each wrong guess raises the reveal level; the level selects how sharp a
//! headshot the front-end may show. Level 0 shows nothing. Turning the image
//! into a silhouette is the front-end's job.

pub const MAX_REVEAL_LEVEL: u8 = 5;

const HEADSHOT_CDN: &str = "https://cdn.nba.com/headshots/nba/latest";

/// Resolution per reveal level, blurriest first
const RESOLUTIONS: [Option<&str>; MAX_REVEAL_LEVEL as usize + 1] = [
    None,
    Some("52x40"),
    Some("104x76"),
    Some("260x190"),
    Some("520x380"),
    Some("1040x760"),
];

/// Levels above the ladder clamp to full resolution
pub fn headshot_resolution(level: u8) -> Option<&'static str> {
    RESOLUTIONS[level.min(MAX_REVEAL_LEVEL) as usize]
}

pub fn headshot_url(person_id: u32, level: u8) -> Option<String> {
    headshot_resolution(level).map(|res| format!("{}/{}/{}.png", HEADSHOT_CDN, res, person_id))
}

/// Full-resolution headshot, shown once the game is over
pub fn full_headshot_url(person_id: u32) -> String {
    format!("{}/{}/{}.png", HEADSHOT_CDN, "1040x760", person_id)
}
