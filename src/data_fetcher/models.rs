use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level response of the schedule endpoint. Only the fields the
/// aggregation needs are modeled; the API ships many more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub dates: Vec<ScheduleDate>,
    #[serde(rename = "totalGames", default)]
    pub total_games: u32,
}

/// One calendar date and the games scheduled on it. The API returns these
/// date-ascending, with intra-date game order as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDate {
    pub date: String,
    #[serde(default)]
    pub games: Vec<ScheduleGame>,
}

/// A single scheduled game. `gameType`, and both team identifiers are
/// required; their absence is a structural error surfaced at parse time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleGame {
    #[serde(rename = "gamePk")]
    pub game_pk: i64,
    #[serde(rename = "gameType")]
    pub game_type: String,
    #[serde(rename = "gameDate", default)]
    pub game_date: Option<String>,
    pub teams: GameTeams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameTeams {
    pub home: GameSide,
    pub away: GameSide,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSide {
    pub team: TeamRef,
    #[serde(default)]
    pub score: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: i32,
    #[serde(default)]
    pub name: Option<String>,
}

/// Whether a team's recorded game was played as home or away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Home,
    Away,
}

/// One game seen from a single team's perspective. A game always yields
/// exactly two of these: the home record and the mirrored away record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamGameRecord {
    pub date: String,
    pub against: i32,
    pub location: Location,
    #[serde(rename = "type")]
    pub game_type: String,
}

/// Per-team aggregation result for one queried window. Rebuilt from
/// scratch on every query; never persisted.
pub type ScheduleIndex = HashMap<i32, Vec<TeamGameRecord>>;

/// Game-type selector driving both the CLI flag and the interactive
/// filter. Matches the provider's type codes exactly; `All` passes
/// everything through, including codes outside the three known types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum GameTypeFilter {
    All,
    #[value(name = "pr")]
    Preseason,
    #[default]
    #[value(name = "r")]
    Regular,
    #[value(name = "p")]
    Postseason,
}

impl GameTypeFilter {
    /// The provider's type code for this filter, or `None` for `All`.
    pub fn code(self) -> Option<&'static str> {
        match self {
            GameTypeFilter::All => None,
            GameTypeFilter::Preseason => Some("PR"),
            GameTypeFilter::Regular => Some("R"),
            GameTypeFilter::Postseason => Some("P"),
        }
    }

    /// Whether a game with the given type code passes this filter.
    pub fn matches(self, game_type: &str) -> bool {
        match self.code() {
            None => true,
            Some(code) => code == game_type,
        }
    }

    /// Human-readable label shown in the dashboard subheader.
    pub fn label(self) -> &'static str {
        match self {
            GameTypeFilter::All => "ALL GAMES",
            GameTypeFilter::Preseason => "PRE-SEASON",
            GameTypeFilter::Regular => "REGULAR SEASON",
            GameTypeFilter::Postseason => "POST-SEASON",
        }
    }

    /// Next filter in the interactive cycle order.
    pub fn next(self) -> Self {
        match self {
            GameTypeFilter::All => GameTypeFilter::Preseason,
            GameTypeFilter::Preseason => GameTypeFilter::Regular,
            GameTypeFilter::Regular => GameTypeFilter::Postseason,
            GameTypeFilter::Postseason => GameTypeFilter::All,
        }
    }
}

impl std::fmt::Display for GameTypeFilter {
    // Renders the CLI value name, so clap can show the default
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameTypeFilter::All => "all",
            GameTypeFilter::Preseason => "pr",
            GameTypeFilter::Regular => "r",
            GameTypeFilter::Postseason => "p",
        };
        write!(f, "{name}")
    }
}
