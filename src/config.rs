//! Pipeline configuration and its compile-time defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::types::{Season, SeasonType};

/// Start year of the default target season (`2024-25`).
pub const DEFAULT_SEASON_START_YEAR: u16 = 2024;

/// A triple-double earns the double-double bonus plus an equal extra bonus.
pub const STACK_TRIPLE_DOUBLE: bool = true;

pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Pacing between per-player info lookups on the fallback position path.
pub const DEFAULT_LOOKUP_INTERVAL_MS: u64 = 500;

/// Base path for the NBA stats API.
pub const NBA_STATS_BASE_URL: &str = "https://stats.nba.com/stats";

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub season: Season,
    pub season_type: SeasonType,
    pub stack_triple_double: bool,
    pub output_dir: PathBuf,
    pub lookup_interval: Duration,
    pub base_url: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            season: Season::new(DEFAULT_SEASON_START_YEAR),
            season_type: SeasonType::RegularSeason,
            stack_triple_double: STACK_TRIPLE_DOUBLE,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            lookup_interval: Duration::from_millis(DEFAULT_LOOKUP_INTERVAL_MS),
            base_url: NBA_STATS_BASE_URL.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Path: {output_dir}/fantasy_averages_{season}.csv
    pub fn csv_path(&self) -> PathBuf {
        output_path(&self.output_dir, &self.season, "csv")
    }

    /// Path: {output_dir}/fantasy_averages_{season}.json
    pub fn json_path(&self) -> PathBuf {
        output_path(&self.output_dir, &self.season, "json")
    }
}

fn output_path(dir: &Path, season: &Season, ext: &str) -> PathBuf {
    dir.join(format!("fantasy_averages_{}.{}", season.file_stem(), ext))
}
