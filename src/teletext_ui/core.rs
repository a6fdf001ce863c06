//! Teletext-style page model for the game-count table.

use super::rows::{CountHighlight, TeamRow, count_highlight};
use chrono::NaiveDate;

/// Placeholder shown instead of a table when the queried window produced
/// no displayable rows.
pub const NO_DATA_PLACEHOLDER: &str = "No data retrieved...";

#[derive(Debug)]
pub struct TeletextPage {
    pub(super) title: String,
    pub(super) subheader: String,
    pub(super) content_rows: Vec<TeletextRow>,
    pub(super) date_range: Option<(NaiveDate, NaiveDate)>,
    pub(super) current_page: usize,
    pub(super) screen_height: u16,
    pub(super) show_footer: bool,
    pub(super) ignore_height_limit: bool,
}

#[derive(Debug)]
pub enum TeletextRow {
    TeamCount {
        abbreviation: String,
        game_count: usize,
        highlight: CountHighlight,
    },
    ErrorMessage(String),
}

impl TeletextPage {
    /// Creates a new page.
    ///
    /// # Arguments
    /// * `title` - The title displayed at the top of the page
    /// * `subheader` - The subtitle displayed below the title
    /// * `show_footer` - Whether to show the control footer
    /// * `ignore_height_limit` - Whether to ignore terminal height limits
    ///   (used in `--once` mode so the whole table lands in scrollback)
    pub fn new(title: String, subheader: String, show_footer: bool, ignore_height_limit: bool) -> Self {
        // Get terminal size, fallback to a reasonable default if unavailable
        let (_, screen_height) = if ignore_height_limit {
            (80u16, 24u16)
        } else {
            crossterm::terminal::size().unwrap_or((80, 24))
        };

        TeletextPage {
            title,
            subheader,
            content_rows: Vec::new(),
            date_range: None,
            current_page: 0,
            screen_height,
            show_footer,
            ignore_height_limit,
        }
    }

    /// Sets the inclusive date window shown in the page header.
    pub fn set_date_range(&mut self, start: NaiveDate, end: NaiveDate) {
        self.date_range = Some((start, end));
    }

    /// Replaces the subheader text (used when the filter changes).
    pub fn set_subheader(&mut self, subheader: String) {
        self.subheader = subheader;
    }

    /// Fills the page from pre-sorted display rows, computing the count
    /// emphasis per row. Empty input yields the no-data placeholder.
    pub fn set_team_rows(&mut self, rows: &[TeamRow]) {
        self.content_rows.clear();
        self.current_page = 0;

        if rows.is_empty() {
            self.add_error_message(NO_DATA_PLACEHOLDER);
            return;
        }

        for row in rows {
            self.content_rows.push(TeletextRow::TeamCount {
                abbreviation: row.abbreviation.clone(),
                game_count: row.game_count,
                highlight: count_highlight(rows, row.game_count),
            });
        }
    }

    /// Adds a message to be displayed on the page in place of table rows.
    pub fn add_error_message(&mut self, message: &str) {
        let formatted_message = message
            .lines()
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("\n");
        self.content_rows
            .push(TeletextRow::ErrorMessage(formatted_message));
    }

    /// Whether the page carries any message rows.
    pub fn has_error_messages(&self) -> bool {
        self.content_rows
            .iter()
            .any(|row| matches!(row, TeletextRow::ErrorMessage(_)))
    }

    /// Number of table rows on the page.
    pub fn team_row_count(&self) -> usize {
        self.content_rows
            .iter()
            .filter(|row| matches!(row, TeletextRow::TeamCount { .. }))
            .count()
    }

    /// Overrides the detected screen height (used by tests and resize
    /// handling).
    pub fn set_screen_height(&mut self, height: u16) {
        self.screen_height = height;
        let pages = self.total_pages();
        if self.current_page >= pages {
            self.current_page = pages.saturating_sub(1);
        }
    }

    /// Rows that fit between header and footer on one screen.
    pub(super) fn rows_per_page(&self) -> usize {
        if self.ignore_height_limit {
            return self.content_rows.len().max(1);
        }
        let reserved =
            crate::constants::ui::HEADER_LINES + crate::constants::ui::FOOTER_LINES;
        (self.screen_height as usize).saturating_sub(reserved).max(1)
    }

    /// Total number of screen pages for the current content.
    pub fn total_pages(&self) -> usize {
        self.content_rows.len().div_ceil(self.rows_per_page()).max(1)
    }

    /// Moves to the next screen page, wrapping around.
    pub fn next_page(&mut self) {
        let pages = self.total_pages();
        self.current_page = (self.current_page + 1) % pages;
    }

    /// Moves to the previous screen page, wrapping around.
    pub fn previous_page(&mut self) {
        let pages = self.total_pages();
        self.current_page = (self.current_page + pages - 1) % pages;
    }

    /// Content rows visible on the current screen page.
    pub(super) fn get_page_content(&self) -> Vec<&TeletextRow> {
        let per_page = self.rows_per_page();
        self.content_rows
            .iter()
            .skip(self.current_page * per_page)
            .take(per_page)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(counts: &[(&str, usize)]) -> Vec<TeamRow> {
        counts
            .iter()
            .map(|(abbreviation, game_count)| TeamRow {
                abbreviation: abbreviation.to_string(),
                game_count: *game_count,
            })
            .collect()
    }

    fn test_page() -> TeletextPage {
        TeletextPage::new(
            "NHL HOCKEY".to_string(),
            "REGULAR SEASON".to_string(),
            true,
            true,
        )
    }

    #[test]
    fn test_empty_rows_produce_placeholder() {
        let mut page = test_page();
        page.set_team_rows(&[]);
        assert!(page.has_error_messages());
        assert_eq!(page.team_row_count(), 0);
    }

    #[test]
    fn test_team_rows_replace_placeholder() {
        let mut page = test_page();
        page.set_team_rows(&[]);
        page.set_team_rows(&rows(&[("BOS", 2), ("WSH", 1)]));
        assert!(!page.has_error_messages());
        assert_eq!(page.team_row_count(), 2);
    }

    #[test]
    fn test_highlights_assigned_by_value() {
        let mut page = test_page();
        page.set_team_rows(&rows(&[("BOS", 3), ("TOR", 2), ("WSH", 1)]));

        let highlights: Vec<CountHighlight> = page
            .content_rows
            .iter()
            .filter_map(|row| match row {
                TeletextRow::TeamCount { highlight, .. } => Some(*highlight),
                _ => None,
            })
            .collect();
        assert_eq!(
            highlights,
            vec![
                CountHighlight::Highest,
                CountHighlight::Plain,
                CountHighlight::Lowest
            ]
        );
    }

    #[test]
    fn test_pagination_on_short_terminal() {
        let mut page = TeletextPage::new(
            "NHL HOCKEY".to_string(),
            "REGULAR SEASON".to_string(),
            true,
            false,
        );
        page.set_screen_height(10); // 4 rows of content per screen
        let many: Vec<TeamRow> = (0..9)
            .map(|i| TeamRow {
                abbreviation: format!("T{i:02}"),
                game_count: 9 - i,
            })
            .collect();
        page.set_team_rows(&many);

        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.get_page_content().len(), 4);

        page.next_page();
        assert_eq!(page.get_page_content().len(), 4);
        page.next_page();
        assert_eq!(page.get_page_content().len(), 1);
        page.next_page(); // wraps
        assert_eq!(page.current_page, 0);

        page.previous_page();
        assert_eq!(page.current_page, 2);
    }

    #[test]
    fn test_ignore_height_limit_keeps_one_page() {
        let mut page = test_page();
        let many: Vec<TeamRow> = (0..32)
            .map(|i| TeamRow {
                abbreviation: format!("T{i:02}"),
                game_count: 1,
            })
            .collect();
        page.set_team_rows(&many);
        assert_eq!(page.total_pages(), 1);
        assert_eq!(page.get_page_content().len(), 32);
    }
}
