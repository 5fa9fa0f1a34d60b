//! HTTP client for the NBA stats API (`stats.nba.com/stats`).

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER},
    Client,
};
use tracing::debug;

use crate::{
    cli::types::{PlayerId, Season, SeasonType},
    nba::{
        schema::{value_as_text, PLAYER_INFO_POSITION},
        types::{StatTable, StatsResponse, COMMON_PLAYER_INFO, LEAGUE_DASH_PLAYER_STATS},
    },
    Result,
};


/// stats.nba.com rejects requests that don't look like they come from nba.com.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const NBA_ORIGIN: &str = "https://www.nba.com";
const NBA_REFERER: &str = "https://www.nba.com/";

/// `LeagueID` for the NBA (as opposed to WNBA/G League).
const NBA_LEAGUE_ID: &str = "00";

/// Headers the stats API expects on every request.
pub fn get_common_headers() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    h.insert(ORIGIN, HeaderValue::from_static(NBA_ORIGIN));
    h.insert(REFERER, HeaderValue::from_static(NBA_REFERER));
    h.insert("x-nba-stats-origin", HeaderValue::from_str("stats")?);
    h.insert("x-nba-stats-token", HeaderValue::from_str("true")?);
    Ok(h)
}

/// Query for the season-wide per-game player table.
///
/// The endpoint requires every filter parameter to be present, even when empty.
pub fn league_dash_params(season: &Season, season_type: SeasonType) -> Vec<(&'static str, String)> {
    let fixed: &[(&'static str, &str)] = &[
        ("College", ""),
        ("Conference", ""),
        ("Country", ""),
        ("DateFrom", ""),
        ("DateTo", ""),
        ("Division", ""),
        ("DraftPick", ""),
        ("DraftYear", ""),
        ("GameScope", ""),
        ("GameSegment", ""),
        ("Height", ""),
        ("LastNGames", "0"),
        ("LeagueID", NBA_LEAGUE_ID),
        ("Location", ""),
        ("MeasureType", "Base"),
        ("Month", "0"),
        ("OpponentTeamID", "0"),
        ("Outcome", ""),
        ("PORound", "0"),
        ("PaceAdjust", "N"),
        ("PerMode", "PerGame"),
        ("Period", "0"),
        ("PlayerExperience", ""),
        ("PlayerPosition", ""),
        ("PlusMinus", "N"),
        ("Rank", "N"),
        ("SeasonSegment", ""),
        ("ShotClockRange", ""),
        ("StarterBench", ""),
        ("TeamID", "0"),
        ("TwoWay", "0"),
        ("VsConference", ""),
        ("VsDivision", ""),
        ("Weight", ""),
    ];

    let mut params: Vec<(&'static str, String)> =
        fixed.iter().map(|(k, v)| (*k, v.to_string())).collect();
    params.push(("Season", season.as_str().to_string()));
    params.push(("SeasonType", season_type.as_param().to_string()));
    params
}

/// Thin client over the two stats endpoints the pipeline uses.
#[derive(Debug, Clone)]
pub struct StatsClient {
    http: Client,
    base_url: String,
    headers: HeaderMap,
}

impl StatsClient {
    /// Client against `base_url` (no trailing slash), e.g. [`crate::config::NBA_STATS_BASE_URL`].
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            headers: get_common_headers()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(&self, endpoint: &str, params: &[(&str, String)]) -> Result<StatsResponse> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let builder = self
            .http
            .get(&url)
            .headers(self.headers.clone())
            .query(params);

        if let Some(req) = builder.try_clone().and_then(|b| b.build().ok()) {
            debug!(url = %req.url(), "stats request");
        }

        let res = builder
            .send()
            .await?
            .error_for_status()?
            .json::<StatsResponse>()
            .await?;
        Ok(res)
    }

    /// Fetch per-game stats for every player in `season`.
    pub async fn fetch_league_player_stats(
        &self,
        season: &Season,
        season_type: SeasonType,
    ) -> Result<StatTable> {
        let params = league_dash_params(season, season_type);
        self.get_json("leaguedashplayerstats", &params)
            .await?
            .into_table(LEAGUE_DASH_PLAYER_STATS)
    }

    /// Look up one player's listed position.
    ///
    /// Returns `Ok(None)` when the player has no position on file.
    pub async fn fetch_player_position(&self, player_id: PlayerId) -> Result<Option<String>> {
        let params = [
            ("LeagueID", NBA_LEAGUE_ID.to_string()),
            ("PlayerID", player_id.to_string()),
        ];
        let table = self
            .get_json("commonplayerinfo", &params)
            .await?
            .into_table(COMMON_PLAYER_INFO)?;

        let Some(idx) = PLAYER_INFO_POSITION
            .iter()
            .find_map(|name| table.column_index(name))
        else {
            return Ok(None);
        };

        Ok(table
            .rows
            .first()
            .and_then(|row| row.get(idx))
            .and_then(value_as_text))
    }
}
