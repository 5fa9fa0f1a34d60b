use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{cli::types::PlayerId, error::StatsError, Result};


/// Result set name returned by `leaguedashplayerstats`.
pub const LEAGUE_DASH_PLAYER_STATS: &str = "LeagueDashPlayerStats";

/// Result set name returned by `commonplayerinfo`.
pub const COMMON_PLAYER_INFO: &str = "CommonPlayerInfo";

/// Top-level envelope shared by stats.nba.com endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsResponse {
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

/// One named table inside a provider response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub row_set: Vec<Vec<Value>>,
}

impl StatsResponse {
    /// Take the result set called `name` out of the response.
    pub fn into_table(self, name: &str) -> Result<StatTable> {
        self.result_sets
            .into_iter()
            .find(|rs| rs.name == name)
            .map(StatTable::from)
            .ok_or_else(|| StatsError::MissingResultSet {
                name: name.to_string(),
            })
    }
}

/// Column-addressable table of raw provider cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl From<ResultSet> for StatTable {
    fn from(rs: ResultSet) -> Self {
        Self {
            headers: rs.headers,
            rows: rs.row_set,
        }
    }
}

impl StatTable {
    /// Index of the header named `name` (exact match).
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One player's season line as read from the provider table.
///
/// Stat fields are per-game averages except `dd2`/`td3`, which are season counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerSeasonRow {
    pub player_id: PlayerId,
    pub player_name: String,
    pub team: String,
    pub position: Option<String>,
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
    pub dd2: f64,
    pub td3: f64,
}
