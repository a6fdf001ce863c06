//! Static directory of NHL franchises.
//!
//! Maps the team identifiers assigned by the schedule provider to the
//! 3-letter abbreviations used in the rendered table. Identifiers outside
//! this table are treated as non-league (prospect tournaments, all-star
//! squads) and excluded from display, but not from aggregation.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Identifier-to-abbreviation table for the 32 league franchises.
/// Constructed once at first use and never mutated.
pub static TEAM_ABBREVIATIONS: Lazy<HashMap<i32, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (1, "NJD"),
        (2, "NYI"),
        (3, "NYR"),
        (4, "PHI"),
        (5, "PIT"),
        (6, "BOS"),
        (7, "BUF"),
        (8, "MTL"),
        (9, "OTT"),
        (10, "TOR"),
        (12, "CAR"),
        (13, "FLA"),
        (14, "TBL"),
        (15, "WSH"),
        (16, "CHI"),
        (17, "DET"),
        (18, "NSH"),
        (19, "STL"),
        (20, "CGY"),
        (21, "COL"),
        (22, "EDM"),
        (23, "VAN"),
        (24, "ANA"),
        (25, "DAL"),
        (26, "LAK"),
        (28, "SJS"),
        (29, "CBJ"),
        (30, "MIN"),
        (52, "WPG"),
        (53, "ARI"),
        (54, "VGK"),
        (55, "SEA"),
    ])
});

/// Returns the 3-letter abbreviation for a league team identifier,
/// or `None` for identifiers outside the directory.
pub fn team_abbreviation(team_id: i32) -> Option<&'static str> {
    TEAM_ABBREVIATIONS.get(&team_id).copied()
}

/// Whether the identifier belongs to a league franchise.
pub fn is_league_team(team_id: i32) -> bool {
    TEAM_ABBREVIATIONS.contains_key(&team_id)
}
