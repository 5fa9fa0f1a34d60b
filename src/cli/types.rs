//! Type-safe wrappers and enums for NBA stats provider parameters.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for NBA player IDs.
///
/// # Examples
///
/// ```rust
/// use nba_fantasy::PlayerId;
///
/// let id = PlayerId::new(2544);
/// assert_eq!(id.as_u64(), 2544);
/// assert_eq!(id.to_string(), "2544");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NBA season identifier in the provider's `YYYY-YY` form.
///
/// The trailing two digits must be the year following the start year,
/// so `2024-25` is accepted and `2024-26` is not.
///
/// # Examples
///
/// ```rust
/// use nba_fantasy::Season;
///
/// let season: Season = "2024-25".parse().unwrap();
/// assert_eq!(season.start_year(), 2024);
/// assert_eq!(season.file_stem(), "2024_25");
/// assert!("2024".parse::<Season>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(String);

impl Season {
    pub fn new(start_year: u16) -> Self {
        Self(format!("{}-{:02}", start_year, (start_year % 100 + 1) % 100))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn start_year(&self) -> u16 {
        self.0
            .split_once('-')
            .and_then(|(start, _)| start.parse().ok())
            .unwrap_or_default()
    }

    /// Season rendered for file names (`2024-25` -> `2024_25`).
    pub fn file_stem(&self) -> String {
        self.0.replace('-', "_")
    }
}

impl Default for Season {
    fn default() -> Self {
        Self::new(2024)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || StatsError::InvalidSeason {
            season: s.to_string(),
        };

        let (start, end) = s.trim().split_once('-').ok_or_else(invalid)?;
        let digits = |part: &str, len: usize| {
            part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
        };
        if !digits(start, 4) || !digits(end, 2) {
            return Err(invalid());
        }
        let start: u16 = start.parse().map_err(|_| invalid())?;
        let end: u16 = end.parse().map_err(|_| invalid())?;
        if (start + 1) % 100 != end {
            return Err(invalid());
        }

        Ok(Self::new(start))
    }
}

/// Season segment selector passed to the provider as `SeasonType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeasonType {
    /// Regular season games
    #[default]
    RegularSeason,
    /// Postseason games
    Playoffs,
    /// Play-in tournament games
    PlayIn,
    /// Preseason games
    PreSeason,
}

impl SeasonType {
    /// Value the provider expects for the `SeasonType` query parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            SeasonType::RegularSeason => "Regular Season",
            SeasonType::Playoffs => "Playoffs",
            SeasonType::PlayIn => "PlayIn",
            SeasonType::PreSeason => "Pre Season",
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_param())
    }
}

impl FromStr for SeasonType {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "regular season" | "regular" => Ok(SeasonType::RegularSeason),
            "playoffs" | "postseason" => Ok(SeasonType::Playoffs),
            "playin" | "play-in" => Ok(SeasonType::PlayIn),
            "pre season" | "preseason" => Ok(SeasonType::PreSeason),
            _ => Err(StatsError::InvalidSeasonType {
                season_type: s.to_string(),
            }),
        }
    }
}
