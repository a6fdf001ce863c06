//! Interactive dashboard loop.
//!
//! One keypress produces at most one sequential fetch, aggregate, and
//! render cycle. A refresh triggered while a previous request is still
//! being answered is not cancelled; the last completed cycle wins. Known
//! limitation, not mitigated here.

use crate::constants::ui::EVENT_POLL_MS;
use crate::data_fetcher::models::{GameTypeFilter, ScheduleIndex};
use crate::data_fetcher::{ScheduleSource, games_per_team};
use crate::error::AppError;
use crate::teletext_ui::{TeletextPage, build_team_rows};
use chrono::{Duration as ChronoDuration, Local, NaiveDate};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::stdout;
use std::time::Duration;
use tracing::{error, info};

/// Title block shown at the top-left of every page.
pub const PAGE_TITLE: &str = "NHL HOCKEY";

/// The dashboard's query controls: the inclusive date window and the
/// game-type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardState {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub filter: GameTypeFilter,
}

impl DashboardState {
    /// Builds the initial state; unspecified dates default to today, so
    /// the dashboard opens on a single-day window.
    pub fn new(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        filter: GameTypeFilter,
    ) -> Self {
        let today = Local::now().date_naive();
        DashboardState {
            start: start.unwrap_or(today),
            end: end.unwrap_or(today),
            filter,
        }
    }

    /// Length of the window in days (end inclusive). An inverted window
    /// still reports at least one day so shifting keeps working.
    pub fn span_days(&self) -> i64 {
        ((self.end - self.start).num_days() + 1).max(1)
    }

    fn shift(&mut self, days: i64) {
        self.start = self.start + ChronoDuration::days(days);
        self.end = self.end + ChronoDuration::days(days);
    }
}

/// What a keypress asks the loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Refetch,
    PreviousPage,
    NextPage,
    Ignored,
}

/// Applies one keypress to the query state and reports the follow-up
/// action. Window moves and filter changes each trigger a refetch.
pub fn apply_key(state: &mut DashboardState, key: &KeyEvent) -> KeyAction {
    let shifted = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Refetch,
        KeyCode::Char('t') | KeyCode::Char('T') => {
            state.filter = state.filter.next();
            KeyAction::Refetch
        }
        KeyCode::Left => {
            let days = if shifted { 1 } else { state.span_days() };
            state.shift(-days);
            KeyAction::Refetch
        }
        KeyCode::Right => {
            let days = if shifted { 1 } else { state.span_days() };
            state.shift(days);
            KeyAction::Refetch
        }
        KeyCode::Up => KeyAction::PreviousPage,
        KeyCode::Down => KeyAction::NextPage,
        _ => KeyAction::Ignored,
    }
}

/// Builds the results page for an aggregated index.
pub fn build_results_page(
    state: &DashboardState,
    index: &ScheduleIndex,
    show_footer: bool,
    ignore_height_limit: bool,
) -> TeletextPage {
    let mut page = TeletextPage::new(
        PAGE_TITLE.to_string(),
        state.filter.label().to_string(),
        show_footer,
        ignore_height_limit,
    );
    page.set_date_range(state.start, state.end);
    page.set_team_rows(&build_team_rows(index));
    page
}

/// Builds a page carrying a failed-update message.
pub fn build_error_page(
    state: &DashboardState,
    error: &AppError,
    show_footer: bool,
    ignore_height_limit: bool,
) -> TeletextPage {
    let mut page = TeletextPage::new(
        PAGE_TITLE.to_string(),
        state.filter.label().to_string(),
        show_footer,
        ignore_height_limit,
    );
    page.set_date_range(state.start, state.end);
    page.add_error_message(&format!("Failed to update schedule:\n{error}"));
    page
}

/// Runs one fetch and aggregate cycle and returns the page to display.
/// Transport and parse failures become an error page; they never abort the
/// interactive session.
async fn update_page<S: ScheduleSource>(source: &S, state: &DashboardState) -> TeletextPage {
    info!(
        "Updating window {} - {} with filter {:?}",
        state.start, state.end, state.filter
    );
    match source.schedule(state.start, state.end).await {
        Ok(dates) => {
            let index = games_per_team(&dates, state.filter);
            build_results_page(state, &index, true, false)
        }
        Err(e) => {
            error!("Schedule update failed: {e}");
            build_error_page(state, &e, true, false)
        }
    }
}

/// Runs the interactive dashboard until the user quits.
///
/// The caller owns terminal setup and teardown (raw mode, alternate
/// screen); this loop only reads key events and renders pages.
pub async fn run_interactive_ui<S: ScheduleSource>(
    source: &S,
    mut state: DashboardState,
) -> Result<(), AppError> {
    let mut out = stdout();

    let mut page = update_page(source, &state).await;
    page.render_buffered(&mut out)?;

    loop {
        if !event::poll(Duration::from_millis(EVENT_POLL_MS))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match apply_key(&mut state, &key) {
                    KeyAction::Quit => break,
                    KeyAction::Refetch => {
                        page = update_page(source, &state).await;
                        page.render_buffered(&mut out)?;
                    }
                    KeyAction::PreviousPage => {
                        page.previous_page();
                        page.render_buffered(&mut out)?;
                    }
                    KeyAction::NextPage => {
                        page.next_page();
                        page.render_buffered(&mut out)?;
                    }
                    KeyAction::Ignored => {}
                }
            }
            Event::Resize(_, height) => {
                page.set_screen_height(height);
                page.render_buffered(&mut out)?;
            }
            _ => {}
        }
    }

    Ok(())
}
