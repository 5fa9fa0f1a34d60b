//! Season fantasy-average build.
//!
//! Runs the whole batch: fetch the season table, score every player, resolve
//! positions, rank, and write the CSV and JSON files.

use std::path::PathBuf;

use tracing::info;

use crate::{
    config::PipelineConfig,
    nba::{RateLimiter, StatsClient, TableSchema},
    output::{project, write_csv, write_json, FantasyAverage},
    positions::resolve_positions,
    scoring::{score_rows, ScoringRules},
    Result,
};

/// What a build produced.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub rows: usize,
    pub lookups: usize,
    pub csv_path: PathBuf,
    pub json_path: PathBuf,
    pub records: Vec<FantasyAverage>,
}

/// Build and write the fantasy averages described by `config`.
pub async fn handle_build_averages(config: &PipelineConfig) -> Result<BuildSummary> {
    let client = StatsClient::new(config.base_url.clone())?;

    info!(
        season = %config.season,
        season_type = %config.season_type,
        "fetching league per-game stats"
    );
    let table = client
        .fetch_league_player_stats(&config.season, config.season_type)
        .await?;
    info!(players = table.len(), "stats table received");

    let schema = TableSchema::resolve(&table)?;
    let rows = schema.player_rows(&table)?;

    let rules = ScoringRules::new(config.stack_triple_double);
    let fpts = score_rows(&rows, &rules);

    let mut limiter = RateLimiter::new(config.lookup_interval);
    let resolved = resolve_positions(&rows, &schema, &client, &mut limiter).await;

    let records = project(&rows, &resolved.positions, &fpts);

    let csv_path = config.csv_path();
    let json_path = config.json_path();
    write_csv(&csv_path, &records)?;
    write_json(&json_path, &records)?;
    info!(
        rows = records.len(),
        csv = %csv_path.display(),
        json = %json_path.display(),
        "fantasy averages written"
    );

    Ok(BuildSummary {
        rows: records.len(),
        lookups: resolved.lookups,
        csv_path,
        json_path,
        records,
    })
}
