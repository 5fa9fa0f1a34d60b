use crate::nba::types::PlayerSeasonRow;

use super::FantasyAverage;

/// Round to 2 decimal places; exact halves go to the even neighbor.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round_ties_even() / 100.0
}

/// Build ranked output records.
///
/// `positions` and `fpts` are aligned with `rows`. Numeric fields are rounded
/// first; rows are then ordered by rounded `fpts` descending, and equal
/// values keep their input order.
pub fn project(
    rows: &[PlayerSeasonRow],
    positions: &[Option<String>],
    fpts: &[f64],
) -> Vec<FantasyAverage> {
    let mut out: Vec<FantasyAverage> = rows
        .iter()
        .zip(positions)
        .zip(fpts)
        .map(|((row, pos), fpts)| FantasyAverage {
            player_id: row.player_id,
            player: row.player_name.clone(),
            team: row.team.clone(),
            pos: pos.clone(),
            gp: row.gp,
            min: round2(row.min),
            pts: round2(row.pts),
            reb: round2(row.reb),
            ast: round2(row.ast),
            stl: round2(row.stl),
            blk: round2(row.blk),
            fgm: round2(row.fgm),
            fga: round2(row.fga),
            fg3m: round2(row.fg3m),
            ftm: round2(row.ftm),
            tov: round2(row.tov),
            fpts: round2(*fpts),
        })
        .collect();

    // `sort_by` is stable.
    out.sort_by(|a, b| b.fpts.total_cmp(&a.fpts));
    out
}
