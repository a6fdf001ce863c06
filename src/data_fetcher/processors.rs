//! Aggregation of per-date game groups into the per-team index.

use crate::data_fetcher::models::{
    GameTypeFilter, Location, ScheduleDate, ScheduleIndex, TeamGameRecord,
};
use tracing::debug;

/// Builds the per-team index from the fetched date groups.
///
/// Walks every game in every date group in input order. A game that passes
/// the filter contributes one record to the home team's list and one
/// mirrored record (opponent swapped, location flipped) to the away team's
/// list. Nothing is deduplicated, and team identifiers outside the league
/// directory aggregate like any other; restricting display to league teams
/// is the presentation layer's job.
///
/// A filter that matches nothing and a window with no games both produce an
/// empty index; callers cannot distinguish the two.
pub fn games_per_team(dates: &[ScheduleDate], filter: GameTypeFilter) -> ScheduleIndex {
    let mut index = ScheduleIndex::new();

    for group in dates {
        for game in &group.games {
            if !filter.matches(&game.game_type) {
                continue;
            }

            let home = game.teams.home.team.id;
            let away = game.teams.away.team.id;

            index.entry(home).or_default().push(TeamGameRecord {
                date: group.date.clone(),
                against: away,
                location: Location::Home,
                game_type: game.game_type.clone(),
            });
            index.entry(away).or_default().push(TeamGameRecord {
                date: group.date.clone(),
                against: home,
                location: Location::Away,
                game_type: game.game_type.clone(),
            });
        }
    }

    debug!(
        "Aggregated {} team(s) across {} date group(s)",
        index.len(),
        dates.len()
    );
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_single_game_yields_mirrored_records() {
        let dates = vec![TestDataBuilder::single_game_day("2022-10-12", "R", 6, 15)];
        let index = games_per_team(&dates, GameTypeFilter::Regular);

        assert_eq!(index.len(), 2);
        assert_eq!(
            index[&6],
            vec![TeamGameRecord {
                date: "2022-10-12".to_string(),
                against: 15,
                location: Location::Home,
                game_type: "R".to_string(),
            }]
        );
        assert_eq!(
            index[&15],
            vec![TeamGameRecord {
                date: "2022-10-12".to_string(),
                against: 6,
                location: Location::Away,
                game_type: "R".to_string(),
            }]
        );
    }

    #[test]
    fn test_filter_mismatch_yields_empty_index() {
        let dates = vec![TestDataBuilder::single_game_day("2022-10-12", "R", 6, 15)];
        let index = games_per_team(&dates, GameTypeFilter::Postseason);
        assert!(index.is_empty());
    }

    #[test]
    fn test_all_filter_passes_every_type() {
        let dates = vec![TestDataBuilder::date_group(
            "2022-09-26",
            vec![
                TestDataBuilder::game(2022010001, "PR", 1, 2),
                TestDataBuilder::game(2022020001, "R", 3, 4),
                TestDataBuilder::game(2022030001, "P", 5, 6),
            ],
        )];
        let index = games_per_team(&dates, GameTypeFilter::All);
        assert_eq!(index.len(), 6);
        assert_eq!(index[&1][0].game_type, "PR");
        assert_eq!(index[&3][0].game_type, "R");
        assert_eq!(index[&5][0].game_type, "P");
    }

    #[test]
    fn test_record_count_is_twice_matching_games() {
        let dates = vec![
            TestDataBuilder::date_group(
                "2022-10-12",
                vec![
                    TestDataBuilder::game(2022020005, "R", 6, 15),
                    TestDataBuilder::game(2022020006, "R", 3, 4),
                ],
            ),
            TestDataBuilder::date_group(
                "2022-10-13",
                vec![
                    TestDataBuilder::game(2022020007, "R", 6, 3),
                    TestDataBuilder::game(2022010099, "PR", 1, 2),
                ],
            ),
        ];
        let index = games_per_team(&dates, GameTypeFilter::Regular);
        let total_records: usize = index.values().map(Vec::len).sum();
        assert_eq!(total_records, 2 * 3);
    }

    #[test]
    fn test_team_playing_twice_keeps_both_records_in_order() {
        let dates = vec![
            TestDataBuilder::single_game_day("2022-10-12", "R", 6, 15),
            TestDataBuilder::single_game_day("2022-10-13", "R", 3, 6),
        ];
        let index = games_per_team(&dates, GameTypeFilter::Regular);

        let boston = &index[&6];
        assert_eq!(boston.len(), 2);
        assert_eq!(boston[0].date, "2022-10-12");
        assert_eq!(boston[0].location, Location::Home);
        assert_eq!(boston[0].against, 15);
        assert_eq!(boston[1].date, "2022-10-13");
        assert_eq!(boston[1].location, Location::Away);
        assert_eq!(boston[1].against, 3);
    }

    #[test]
    fn test_non_league_team_is_aggregated() {
        let dates = vec![TestDataBuilder::single_game_day("2022-09-24", "PR", 99, 8)];
        let index = games_per_team(&dates, GameTypeFilter::All);
        assert!(index.contains_key(&99));
        assert_eq!(index[&99][0].against, 8);
    }

    #[test]
    fn test_empty_dates_yield_empty_index() {
        let index = games_per_team(&[], GameTypeFilter::All);
        assert!(index.is_empty());
    }
}
