//! NBA stats provider integration
//!
//! - `http`: client for the season table and per-player info endpoints
//! - `types`: wire envelopes and the typed season row
//! - `schema`: capability check of table headers against known column names
//! - `rate_limit`: pacing for per-player lookups

pub mod http;
pub mod rate_limit;
pub mod schema;
pub mod types;

pub use http::StatsClient;
pub use rate_limit::RateLimiter;
pub use schema::{StatColumn, TableSchema};
pub use types::{PlayerSeasonRow, StatTable};
