pub mod player;

pub use player::{Height, PlayerAttributes, RawPlayerInfo};
