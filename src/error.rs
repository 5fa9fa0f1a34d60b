//! Error types for the NBA fantasy averages pipeline

use thiserror::Error;


pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid season {season:?}: expected the form YYYY-YY (e.g. 2024-25)")]
    InvalidSeason { season: String },

    #[error("Invalid season type: {season_type:?}")]
    InvalidSeasonType { season_type: String },

    #[error("Stats provider response has no result set named {name:?}")]
    MissingResultSet { name: String },

    #[error("Stats table is missing required column {column}")]
    MissingColumn { column: String },

    #[error("Invalid value in column {column} at row {row}")]
    InvalidCell { column: String, row: usize },
}
