//! Table rows derived from the per-team index.

use crate::data_fetcher::models::ScheduleIndex;
use crate::teams::team_abbreviation;

/// One displayable table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRow {
    pub abbreviation: String,
    pub game_count: usize,
}

/// Visual emphasis applied to a row's count cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountHighlight {
    Highest,
    Lowest,
    Plain,
}

/// Builds display rows from the index: identifiers outside the team
/// directory are dropped, counts are the record list lengths, and rows are
/// sorted descending by count. The sort is stable; ties are ordered by
/// abbreviation so output does not depend on map iteration order.
pub fn build_team_rows(index: &ScheduleIndex) -> Vec<TeamRow> {
    let mut rows: Vec<TeamRow> = index
        .iter()
        .filter_map(|(team_id, records)| {
            team_abbreviation(*team_id).map(|abbreviation| TeamRow {
                abbreviation: abbreviation.to_string(),
                game_count: records.len(),
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        b.game_count
            .cmp(&a.game_count)
            .then_with(|| a.abbreviation.cmp(&b.abbreviation))
    });
    rows
}

/// Emphasis for a row given the sorted rows it belongs to. Every row whose
/// count equals the top value is flagged highest, every row equal to the
/// bottom value lowest; with a single distinct value the highest flag wins.
pub fn count_highlight(rows: &[TeamRow], game_count: usize) -> CountHighlight {
    let highest = rows.first().map(|r| r.game_count);
    let lowest = rows.last().map(|r| r.game_count);
    if Some(game_count) == highest {
        CountHighlight::Highest
    } else if Some(game_count) == lowest {
        CountHighlight::Lowest
    } else {
        CountHighlight::Plain
    }
}
