use hockey_game_counter::data_fetcher::models::{GameTypeFilter, Location, TeamGameRecord};
use hockey_game_counter::data_fetcher::games_per_team;
use hockey_game_counter::teams::is_league_team;
use hockey_game_counter::teletext_ui::build_team_rows;
use hockey_game_counter::testing_utils::TestDataBuilder;

#[test]
fn test_boston_home_against_washington() {
    let dates = vec![TestDataBuilder::date_group(
        "2022-10-12",
        vec![TestDataBuilder::game(2022020005, "R", 6, 15)],
    )];

    let index = games_per_team(&dates, GameTypeFilter::Regular);

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
fn test_postseason_filter_on_regular_games_yields_empty_mapping() {
    let dates = vec![TestDataBuilder::date_group(
        "2022-10-12",
        vec![
            TestDataBuilder::game(2022020005, "R", 6, 15),
            TestDataBuilder::game(2022020006, "R", 3, 4),
        ],
    )];

    let index = games_per_team(&dates, GameTypeFilter::Postseason);
    assert!(index.is_empty());
}

#[test]
fn test_empty_dates_yield_empty_mapping() {
    let index = games_per_team(&[], GameTypeFilter::Regular);
    assert!(index.is_empty());
}

#[test]
fn test_every_record_matches_a_specific_filter() {
    let dates = vec![
        TestDataBuilder::date_group(
            "2022-09-26",
            vec![
                TestDataBuilder::game(2022010001, "PR", 1, 2),
                TestDataBuilder::game(2022020001, "R", 3, 4),
            ],
        ),
        TestDataBuilder::date_group(
            "2022-09-27",
            vec![
                TestDataBuilder::game(2022010002, "PR", 5, 6),
                TestDataBuilder::game(2022030001, "P", 7, 8),
            ],
        ),
    ];

    for filter in [
        GameTypeFilter::Preseason,
        GameTypeFilter::Regular,
        GameTypeFilter::Postseason,
    ] {
        let index = games_per_team(&dates, filter);
        let code = filter.code().unwrap();
        for records in index.values() {
            for record in records {
                assert_eq!(record.game_type, code);
            }
        }
    }
}

#[test]
fn test_every_game_produces_exactly_one_home_and_one_away_record() {
    let dates = vec![
        TestDataBuilder::date_group(
            "2022-10-12",
            vec![
                TestDataBuilder::game(2022020005, "R", 6, 15),
                TestDataBuilder::game(2022020006, "R", 10, 8),
            ],
        ),
        TestDataBuilder::date_group(
            "2022-10-13",
            vec![TestDataBuilder::game(2022020007, "R", 15, 10)],
        ),
    ];

    let index = games_per_team(&dates, GameTypeFilter::Regular);

    for group in &dates {
        for game in &group.games {
            let home = game.teams.home.team.id;
            let away = game.teams.away.team.id;

            let home_records: Vec<_> = index[&home]
                .iter()
                .filter(|r| r.date == group.date && r.against == away)
                .collect();
            assert_eq!(home_records.len(), 1);
            assert_eq!(home_records[0].location, Location::Home);

            let away_records: Vec<_> = index[&away]
                .iter()
                .filter(|r| r.date == group.date && r.against == home)
                .collect();
            assert_eq!(away_records.len(), 1);
            assert_eq!(away_records[0].location, Location::Away);
        }
    }
}

#[test]
fn test_record_total_is_twice_the_matching_game_count() {
    let dates = vec![
        TestDataBuilder::date_group(
            "2022-10-12",
            vec![
                TestDataBuilder::game(2022020005, "R", 6, 15),
                TestDataBuilder::game(2022010099, "PR", 3, 4),
                TestDataBuilder::game(2022020006, "R", 10, 8),
            ],
        ),
        TestDataBuilder::date_group(
            "2022-10-13",
            vec![TestDataBuilder::game(2022020007, "R", 15, 10)],
        ),
    ];

    let regular_games = 3;
    let index = games_per_team(&dates, GameTypeFilter::Regular);
    let total_records: usize = index.values().map(Vec::len).sum();
    assert_eq!(total_records, 2 * regular_games);

    let all_index = games_per_team(&dates, GameTypeFilter::All);
    let all_records: usize = all_index.values().map(Vec::len).sum();
    assert_eq!(all_records, 2 * 4);
}

#[test]
fn test_non_league_team_aggregated_but_not_displayed() {
    // Exhibition opponent with id 99 is not in the directory
    let dates = vec![TestDataBuilder::date_group(
        "2022-09-24",
        vec![
            TestDataBuilder::game(2022010010, "PR", 99, 8),
            TestDataBuilder::game(2022010011, "PR", 6, 15),
        ],
    )];

    let index = games_per_team(&dates, GameTypeFilter::All);
    assert!(index.contains_key(&99));
    assert!(!is_league_team(99));

    let rows = build_team_rows(&index);
    assert!(rows.iter().all(|row| row.abbreviation != "99"));
    // MTL, BOS, WSH survive; the non-league side is dropped from display
    assert_eq!(rows.len(), 3);
}

#[test]
fn test_rows_sorted_descending_and_non_increasing() {
    let dates = vec![
        TestDataBuilder::single_game_day("2022-10-12", "R", 6, 15),
        TestDataBuilder::single_game_day("2022-10-13", "R", 6, 10),
        TestDataBuilder::single_game_day("2022-10-14", "R", 8, 6),
    ];

    let index = games_per_team(&dates, GameTypeFilter::Regular);
    let rows = build_team_rows(&index);

    assert_eq!(rows[0].abbreviation, "BOS");
    assert_eq!(rows[0].game_count, 3);
    for pair in rows.windows(2) {
        assert!(pair[0].game_count >= pair[1].game_count);
    }
}
