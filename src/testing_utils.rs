use crate::data_fetcher::models::{
    GameSide, GameTeams, ScheduleDate, ScheduleGame, ScheduleResponse, TeamRef,
};

/// Test utilities for creating canned schedule payloads.
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a team reference without a name, the minimal shape the
    /// aggregation needs.
    pub fn team_ref(team_id: i32) -> TeamRef {
        TeamRef {
            id: team_id,
            name: None,
        }
    }

    /// Creates a single scheduled game.
    pub fn game(game_pk: i64, game_type: &str, home_id: i32, away_id: i32) -> ScheduleGame {
        ScheduleGame {
            game_pk,
            game_type: game_type.to_string(),
            game_date: None,
            teams: GameTeams {
                home: GameSide {
                    team: Self::team_ref(home_id),
                    score: None,
                },
                away: GameSide {
                    team: Self::team_ref(away_id),
                    score: None,
                },
            },
        }
    }

    /// Creates one date group holding the given games.
    pub fn date_group(date: &str, games: Vec<ScheduleGame>) -> ScheduleDate {
        ScheduleDate {
            date: date.to_string(),
            games,
        }
    }

    /// Creates a date group with exactly one game.
    pub fn single_game_day(
        date: &str,
        game_type: &str,
        home_id: i32,
        away_id: i32,
    ) -> ScheduleDate {
        Self::date_group(date, vec![Self::game(2022020001, game_type, home_id, away_id)])
    }

    /// Serializes date groups into the wire shape the schedule endpoint
    /// returns, for mock-server tests.
    pub fn schedule_body(dates: Vec<ScheduleDate>) -> String {
        let total_games = dates.iter().map(|d| d.games.len() as u32).sum();
        let response = ScheduleResponse { dates, total_games };
        serde_json::to_string(&response).expect("canned schedule serializes")
    }
}
