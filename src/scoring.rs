//! Fantasy-points formula for a player's per-game season line.
//!
//! ```text
//! fpts = pts + 1.5*reb + 1.5*ast + 3*stl + 3*blk + fgm + ftm + 2*fg3m
//!        - 0.2*fga - 1.5*tov + bonus_per_game
//! ```
//!
//! `bonus_per_game` spreads the season's double-double and triple-double
//! bonuses over games played.

use crate::nba::types::PlayerSeasonRow;


pub const PTS_WEIGHT: f64 = 1.0;
pub const REB_WEIGHT: f64 = 1.5;
pub const AST_WEIGHT: f64 = 1.5;
pub const STL_WEIGHT: f64 = 3.0;
pub const BLK_WEIGHT: f64 = 3.0;
pub const FGM_WEIGHT: f64 = 1.0;
pub const FTM_WEIGHT: f64 = 1.0;
pub const FG3M_WEIGHT: f64 = 2.0;
pub const FGA_WEIGHT: f64 = -0.2;
pub const TOV_WEIGHT: f64 = -1.5;

/// Bonus for each double-double.
pub const DOUBLE_DOUBLE_BONUS: f64 = 7.5;

/// Scoring options that are not derived from data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    /// When set, a triple-double earns the double-double bonus again on top
    /// (15 total); otherwise it earns the flat 7.5.
    pub stack_triple_double: bool,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            stack_triple_double: crate::config::STACK_TRIPLE_DOUBLE,
        }
    }
}

impl ScoringRules {
    pub fn new(stack_triple_double: bool) -> Self {
        Self {
            stack_triple_double,
        }
    }

    /// Points per triple-double.
    pub fn triple_double_weight(&self) -> f64 {
        if self.stack_triple_double {
            DOUBLE_DOUBLE_BONUS * 2.0
        } else {
            DOUBLE_DOUBLE_BONUS
        }
    }

    /// Season bonus spread per game.
    ///
    /// A `gp` of 0 divides by 1, so a player without games still gets the
    /// full season bonus as a per-game value.
    pub fn bonus_per_game(&self, dd2: f64, td3: f64, gp: u32) -> f64 {
        let games = f64::from(gp.max(1));
        (dd2 * DOUBLE_DOUBLE_BONUS + td3 * self.triple_double_weight()) / games
    }

    /// Unrounded fantasy points per game.
    pub fn fantasy_points(&self, row: &PlayerSeasonRow) -> f64 {
        row.pts * PTS_WEIGHT
            + row.reb * REB_WEIGHT
            + row.ast * AST_WEIGHT
            + row.stl * STL_WEIGHT
            + row.blk * BLK_WEIGHT
            + row.fgm * FGM_WEIGHT
            + row.ftm * FTM_WEIGHT
            + row.fg3m * FG3M_WEIGHT
            + row.fga * FGA_WEIGHT
            + row.tov * TOV_WEIGHT
            + self.bonus_per_game(row.dd2, row.td3, row.gp)
    }
}

/// Score every row, keeping input order.
pub fn score_rows(rows: &[PlayerSeasonRow], rules: &ScoringRules) -> Vec<f64> {
    rows.iter().map(|row| rules.fantasy_points(row)).collect()
}
