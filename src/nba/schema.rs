//! Capability check of a provider table against the columns the pipeline reads.
//!
//! The provider has shipped the same field under different header names
//! across seasons (`PLAYER_POSITION` vs `POSITION`) and omits some columns
//! (`DD2`, `TD3`) entirely on older endpoints. Every accepted header name and
//! the fallback for an absent column live in [`LEAGUE_DASH_COLUMNS`]; adding a
//! variant is an edit to that table.

use std::collections::HashMap;

use serde_json::Value;
use tracing::warn;

use crate::{
    cli::types::PlayerId,
    error::StatsError,
    nba::types::{PlayerSeasonRow, StatTable},
    Result,
};

/// Every field the pipeline reads from the season table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatColumn {
    PlayerId,
    PlayerName,
    Team,
    Position,
    Gp,
    Min,
    Pts,
    Reb,
    Ast,
    Stl,
    Blk,
    Fgm,
    Fga,
    Fg3m,
    Ftm,
    Tov,
    Dd2,
    Td3,
}

/// What happens when none of a column's header names are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absent {
    /// The table is unusable without it.
    Fail,
    /// Left unresolved; the caller decides how to fill it.
    Unresolved,
    /// Every row reads as zero.
    Zero,
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub column: StatColumn,
    /// Accepted header names, in order of preference.
    pub names: &'static [&'static str],
    pub absent: Absent,
}

const fn spec(column: StatColumn, names: &'static [&'static str], absent: Absent) -> ColumnSpec {
    ColumnSpec {
        column,
        names,
        absent,
    }
}

/// Known layout of the `LeagueDashPlayerStats` result set.
pub const LEAGUE_DASH_COLUMNS: &[ColumnSpec] = &[
    spec(StatColumn::PlayerId, &["PLAYER_ID"], Absent::Fail),
    spec(StatColumn::PlayerName, &["PLAYER_NAME"], Absent::Fail),
    spec(StatColumn::Team, &["TEAM_ABBREVIATION"], Absent::Fail),
    spec(
        StatColumn::Position,
        &["PLAYER_POSITION", "POSITION"],
        Absent::Unresolved,
    ),
    // A missing GP reads as 0 and is then floored to 1 as a divisor.
    spec(StatColumn::Gp, &["GP"], Absent::Zero),
    spec(StatColumn::Min, &["MIN"], Absent::Zero),
    spec(StatColumn::Pts, &["PTS"], Absent::Zero),
    spec(StatColumn::Reb, &["REB"], Absent::Zero),
    spec(StatColumn::Ast, &["AST"], Absent::Zero),
    spec(StatColumn::Stl, &["STL"], Absent::Zero),
    spec(StatColumn::Blk, &["BLK"], Absent::Zero),
    spec(StatColumn::Fgm, &["FGM"], Absent::Zero),
    spec(StatColumn::Fga, &["FGA"], Absent::Zero),
    spec(StatColumn::Fg3m, &["FG3M"], Absent::Zero),
    spec(StatColumn::Ftm, &["FTM"], Absent::Zero),
    spec(StatColumn::Tov, &["TOV"], Absent::Zero),
    spec(StatColumn::Dd2, &["DD2"], Absent::Zero),
    spec(StatColumn::Td3, &["TD3"], Absent::Zero),
];

/// Header names accepted for a player's position in `CommonPlayerInfo`.
pub const PLAYER_INFO_POSITION: &[&str] = &["POSITION"];

/// Result of checking a table's headers against a column layout.
#[derive(Debug, Clone, Default)]
pub struct TableSchema {
    indices: HashMap<StatColumn, usize>,
    names: HashMap<StatColumn, &'static str>,
    defaulted: Vec<StatColumn>,
}

impl TableSchema {
    /// Check `table` against [`LEAGUE_DASH_COLUMNS`].
    pub fn resolve(table: &StatTable) -> Result<Self> {
        Self::resolve_with(LEAGUE_DASH_COLUMNS, table)
    }

    pub fn resolve_with(specs: &[ColumnSpec], table: &StatTable) -> Result<Self> {
        let mut schema = TableSchema::default();

        for spec in specs {
            let found = spec
                .names
                .iter()
                .find_map(|name| table.column_index(name).map(|idx| (*name, idx)));

            match (found, spec.absent) {
                (Some((name, idx)), _) => {
                    schema.indices.insert(spec.column, idx);
                    schema.names.insert(spec.column, name);
                }
                (None, Absent::Fail) => {
                    return Err(StatsError::MissingColumn {
                        column: spec.names.join("|"),
                    })
                }
                (None, Absent::Unresolved) => {}
                (None, Absent::Zero) => {
                    warn!(
                        column = %spec.names.join("|"),
                        "column absent from stats table, defaulting to 0"
                    );
                    schema.defaulted.push(spec.column);
                }
            }
        }

        Ok(schema)
    }

    /// Column index for `column`, if the table carries it.
    pub fn index(&self, column: StatColumn) -> Option<usize> {
        self.indices.get(&column).copied()
    }

    pub fn has(&self, column: StatColumn) -> bool {
        self.indices.contains_key(&column)
    }

    /// Header name `column` was matched under.
    pub fn header_name(&self, column: StatColumn) -> Option<&'static str> {
        self.names.get(&column).copied()
    }

    /// Columns that were absent and read as zero.
    pub fn defaulted(&self) -> &[StatColumn] {
        &self.defaulted
    }

    /// Convert every table row into a typed season line.
    ///
    /// `position` is filled only when the table carries a position column.
    pub fn player_rows(&self, table: &StatTable) -> Result<Vec<PlayerSeasonRow>> {
        table
            .rows
            .iter()
            .enumerate()
            .map(|(row_idx, row)| self.player_row(row_idx, row))
            .collect()
    }

    fn player_row(&self, row_idx: usize, row: &[Value]) -> Result<PlayerSeasonRow> {
        let num = |column: StatColumn| self.number(row_idx, row, column);

        Ok(PlayerSeasonRow {
            player_id: self.player_id(row_idx, row)?,
            player_name: self.text(row, StatColumn::PlayerName).unwrap_or_default(),
            team: self.text(row, StatColumn::Team).unwrap_or_default(),
            position: self.text(row, StatColumn::Position),
            gp: num(StatColumn::Gp)?.max(0.0).round() as u32,
            min: num(StatColumn::Min)?,
            pts: num(StatColumn::Pts)?,
            reb: num(StatColumn::Reb)?,
            ast: num(StatColumn::Ast)?,
            stl: num(StatColumn::Stl)?,
            blk: num(StatColumn::Blk)?,
            fgm: num(StatColumn::Fgm)?,
            fga: num(StatColumn::Fga)?,
            fg3m: num(StatColumn::Fg3m)?,
            ftm: num(StatColumn::Ftm)?,
            tov: num(StatColumn::Tov)?,
            dd2: num(StatColumn::Dd2)?,
            td3: num(StatColumn::Td3)?,
        })
    }

    fn cell<'a>(&self, row: &'a [Value], column: StatColumn) -> Option<&'a Value> {
        self.index(column).and_then(|idx| row.get(idx))
    }

    fn invalid(&self, row_idx: usize, column: StatColumn) -> StatsError {
        StatsError::InvalidCell {
            column: self
                .header_name(column)
                .map(str::to_string)
                .unwrap_or_else(|| format!("{column:?}")),
            row: row_idx,
        }
    }

    fn player_id(&self, row_idx: usize, row: &[Value]) -> Result<PlayerId> {
        let cell = self.cell(row, StatColumn::PlayerId);
        cell.and_then(value_as_u64)
            .map(PlayerId::new)
            .ok_or_else(|| self.invalid(row_idx, StatColumn::PlayerId))
    }

    fn number(&self, row_idx: usize, row: &[Value], column: StatColumn) -> Result<f64> {
        match self.cell(row, column) {
            None | Some(Value::Null) => Ok(0.0),
            Some(v) => value_as_f64(v).ok_or_else(|| self.invalid(row_idx, column)),
        }
    }

    fn text(&self, row: &[Value], column: StatColumn) -> Option<String> {
        value_as_text(self.cell(row, column)?)
    }
}

/// Finite numeric cell value; the provider sometimes sends numbers as strings.
pub fn value_as_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

fn value_as_u64(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Non-empty text cell value.
pub fn value_as_text(v: &Value) -> Option<String> {
    let s = match v {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!s.is_empty()).then_some(s)
}
