//! NBA Fantasy Averages Library
//!
//! Builds a season-long fantasy-points average for every NBA player from the
//! stats.nba.com per-game table and exports the ranked result as CSV and JSON.
//!
//! ## Pipeline
//!
//! 1. **Fetch**: one `leaguedashplayerstats` request for the season (per-game mode)
//! 2. **Score**: weighted box-score sum plus a double-double/triple-double bonus per game
//! 3. **Positions**: copied from the table, or looked up once per player when absent
//! 4. **Format**: select, rename, round to 2 decimals, rank by fantasy points
//! 5. **Export**: `fantasy_averages_<season>.csv` and `.json` with identical rows
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_fantasy::{commands::build_averages::handle_build_averages, PipelineConfig};
//!
//! # async fn example() -> nba_fantasy::Result<()> {
//! let summary = handle_build_averages(&PipelineConfig::default()).await?;
//! println!("wrote {} players to {}", summary.rows, summary.csv_path.display());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod nba;
pub mod output;
pub mod positions;
pub mod scoring;

// Re-export commonly used types
pub use cli::types::{PlayerId, Season, SeasonType};
pub use config::PipelineConfig;
pub use error::{Result, StatsError};
pub use output::FantasyAverage;
pub use scoring::ScoringRules;
