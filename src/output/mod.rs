//! Output records, projection and export.
//!
//! - `format`: select, round and rank rows into [`FantasyAverage`] records
//! - `export`: write the ranked records as CSV and JSON

pub mod export;
pub mod format;

use serde::{Deserialize, Serialize};

use crate::cli::types::PlayerId;

pub use export::{write_csv, write_json};
pub use format::{project, round2};

/// Column order of both output files.
pub const OUTPUT_HEADERS: [&str; 17] = [
    "player_id", "player", "team", "pos", "gp", "min", "pts", "reb", "ast", "stl", "blk", "fgm",
    "fga", "fg3m", "ftm", "tov", "fpts",
];

/// One ranked player in the exported files.
///
/// Field order matches [`OUTPUT_HEADERS`]. An unresolved position is an
/// empty CSV field and `null` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FantasyAverage {
    pub player_id: PlayerId,
    pub player: String,
    pub team: String,
    pub pos: Option<String>,
    pub gp: u32,
    pub min: f64,
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
    pub stl: f64,
    pub blk: f64,
    pub fgm: f64,
    pub fga: f64,
    pub fg3m: f64,
    pub ftm: f64,
    pub tov: f64,
    pub fpts: f64,
}
