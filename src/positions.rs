//! Player position resolution.
//!
//! Positions come straight from the season table when it carries a position
//! column. Otherwise each distinct player is looked up once against the
//! player-info endpoint, paced by a [`RateLimiter`].

use std::collections::HashMap;

use tracing::{info, warn};

use crate::{
    cli::types::PlayerId,
    nba::{
        http::StatsClient,
        rate_limit::RateLimiter,
        schema::{StatColumn, TableSchema},
        types::PlayerSeasonRow,
    },
};

/// Positions aligned with the input rows, plus how many lookups were issued.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedPositions {
    pub positions: Vec<Option<String>>,
    pub lookups: usize,
}

/// Distinct player ids in first-seen order.
pub fn unique_player_ids(rows: &[PlayerSeasonRow]) -> Vec<PlayerId> {
    let mut seen = std::collections::HashSet::new();
    rows.iter()
        .map(|r| r.player_id)
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Resolve a position for every row.
///
/// A failed lookup leaves that player's position unresolved; it never aborts
/// the run.
pub async fn resolve_positions(
    rows: &[PlayerSeasonRow],
    schema: &TableSchema,
    client: &StatsClient,
    limiter: &mut RateLimiter,
) -> ResolvedPositions {
    if schema.has(StatColumn::Position) {
        return ResolvedPositions {
            positions: rows.iter().map(|r| r.position.clone()).collect(),
            lookups: 0,
        };
    }

    let ids = unique_player_ids(rows);
    info!(
        players = ids.len(),
        interval_ms = limiter.interval().as_millis() as u64,
        "stats table has no position column, looking up positions one player at a time"
    );

    let mut by_id: HashMap<PlayerId, Option<String>> = HashMap::with_capacity(ids.len());
    for id in &ids {
        limiter.acquire().await;
        let position = match client.fetch_player_position(*id).await {
            Ok(position) => position,
            Err(e) => {
                warn!(player_id = %id, error = %e, "position lookup failed");
                None
            }
        };
        by_id.insert(*id, position);
    }

    ResolvedPositions {
        positions: rows
            .iter()
            .map(|r| by_id.get(&r.player_id).cloned().flatten())
            .collect(),
        lookups: ids.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nba::types::StatTable;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn row(id: u64) -> PlayerSeasonRow {
        PlayerSeasonRow {
            player_id: PlayerId::new(id),
            player_name: format!("Player {id}"),
            ..Default::default()
        }
    }

    fn schema_for(headers: &[&str]) -> TableSchema {
        let table = StatTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: vec![],
        };
        TableSchema::resolve(&table).unwrap()
    }

    fn info_body(position: &str) -> serde_json::Value {
        json!({
            "resultSets": [{
                "name": "CommonPlayerInfo",
                "headers": ["PERSON_ID", "POSITION"],
                "rowSet": [[0, position]]
            }]
        })
    }

    const BASE: &[&str] = &["PLAYER_ID", "PLAYER_NAME", "TEAM_ABBREVIATION"];

    #[test]
    fn test_unique_player_ids_first_seen_order() {
        let rows = vec![row(3), row(1), row(3), row(2), row(1)];
        assert_eq!(
            unique_player_ids(&rows),
            vec![PlayerId::new(3), PlayerId::new(1), PlayerId::new(2)]
        );
    }

    #[tokio::test]
    async fn test_fast_path_makes_no_calls() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(info_body("G")))
            .expect(0)
            .mount(&mock_server)
            .await;

        let mut headers = BASE.to_vec();
        headers.push("PLAYER_POSITION");
        let schema = schema_for(&headers);
        let rows = vec![
            PlayerSeasonRow {
                position: Some("C".to_string()),
                ..row(1)
            },
            row(2),
        ];

        let client = StatsClient::new(mock_server.uri()).unwrap();
        let mut limiter = RateLimiter::new(Duration::ZERO);
        let resolved = resolve_positions(&rows, &schema, &client, &mut limiter).await;

        assert_eq!(resolved.lookups, 0);
        assert_eq!(resolved.positions, vec![Some("C".to_string()), None]);
    }

    #[tokio::test]
    async fn test_fallback_one_lookup_per_unique_id() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/commonplayerinfo"))
            .and(query_param("PlayerID", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(info_body("Guard")))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/commonplayerinfo"))
            .and(query_param("PlayerID", "8"))
            .respond_with(ResponseTemplate::new(200).set_body_json(info_body("Center")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let schema = schema_for(BASE);
        let rows = vec![row(7), row(8), row(7)];

        let client = StatsClient::new(mock_server.uri()).unwrap();
        let mut limiter = RateLimiter::new(Duration::ZERO);
        let resolved = resolve_positions(&rows, &schema, &client, &mut limiter).await;

        assert_eq!(resolved.lookups, 2);
        assert_eq!(
            resolved.positions,
            vec![
                Some("Guard".to_string()),
                Some("Center".to_string()),
                Some("Guard".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_fallback_failure_is_unresolved_and_continues() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/commonplayerinfo"))
            .and(query_param("PlayerID", "1"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/commonplayerinfo"))
            .and(query_param("PlayerID", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(info_body("Forward")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let schema = schema_for(BASE);
        let rows = vec![row(1), row(2)];

        let client = StatsClient::new(mock_server.uri()).unwrap();
        let mut limiter = RateLimiter::new(Duration::ZERO);
        let resolved = resolve_positions(&rows, &schema, &client, &mut limiter).await;

        assert_eq!(resolved.lookups, 2);
        assert_eq!(resolved.positions, vec![None, Some("Forward".to_string())]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fallback_lookups_are_paced() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/commonplayerinfo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(info_body("Guard")))
            .expect(3)
            .mount(&mock_server)
            .await;

        let schema = schema_for(BASE);
        let rows = vec![row(1), row(2), row(3), row(2)];

        let client = StatsClient::new(mock_server.uri()).unwrap();
        let mut limiter = RateLimiter::new(Duration::from_millis(500));
        let start = tokio::time::Instant::now();
        let resolved = resolve_positions(&rows, &schema, &client, &mut limiter).await;

        // First lookup is immediate, the other two wait 500 ms each.
        assert!(
            start.elapsed() >= Duration::from_millis(1000),
            "lookups finished after {:?}",
            start.elapsed()
        );
        assert_eq!(resolved.lookups, 3);
        assert!(resolved.positions.iter().all(|p| p.as_deref() == Some("Guard")));
    }

    #[tokio::test]
    async fn test_fallback_with_no_rows() {
        let mock_server = MockServer::start().await;
        let client = StatsClient::new(mock_server.uri()).unwrap();
        let mut limiter = RateLimiter::new(Duration::from_millis(500));

        let resolved = resolve_positions(&[], &schema_for(BASE), &client, &mut limiter).await;

        assert_eq!(resolved, ResolvedPositions::default());
    }
}
