//! CLI definition.
//!
//! The build takes no configuration arguments: season, season type and
//! triple-double stacking are the compile-time constants in
//! [`crate::config`]. Only `--help` and `--version` are accepted.

pub mod types;

use clap::Parser;

use crate::config::PipelineConfig;

#[derive(Debug, Parser)]
#[clap(
    name = "nba-fantasy",
    version,
    about = "Build season fantasy-point averages for every NBA player",
    long_about = "Fetches the 2024-25 regular-season per-game table from stats.nba.com, \
                  scores every player and writes fantasy_averages_2024_25.csv and .json \
                  to the current directory."
)]
pub struct NbaFantasy {}

impl NbaFantasy {
    /// The fixed pipeline configuration.
    pub fn into_config(self) -> PipelineConfig {
        PipelineConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_matches_default_config() {
        let args = NbaFantasy::try_parse_from(["nba-fantasy"]).unwrap();
        let cfg = args.into_config();
        let default = PipelineConfig::default();

        assert_eq!(cfg.season, default.season);
        assert_eq!(cfg.season_type, default.season_type);
        assert_eq!(cfg.stack_triple_double, default.stack_triple_double);
        assert_eq!(cfg.output_dir, default.output_dir);
        assert_eq!(cfg.lookup_interval, default.lookup_interval);
        assert_eq!(cfg.base_url, default.base_url);
    }

    #[test]
    fn test_rejects_configuration_arguments() {
        for args in [
            vec!["nba-fantasy", "--season", "2023-24"],
            vec!["nba-fantasy", "--season-type", "playoffs"],
            vec!["nba-fantasy", "--no-stack-triple-double"],
            vec!["nba-fantasy", "-o", "out"],
            vec!["nba-fantasy", "--lookup-interval-ms", "250"],
            vec!["nba-fantasy", "2024-25"],
        ] {
            assert!(
                NbaFantasy::try_parse_from(&args).is_err(),
                "accepted {args:?}"
            );
        }
    }

    #[test]
    fn test_help_and_version_exit_early() {
        let help = NbaFantasy::try_parse_from(["nba-fantasy", "--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);

        let version = NbaFantasy::try_parse_from(["nba-fantasy", "--version"]).unwrap_err();
        assert_eq!(version.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
