use crate::cli::Args;
use crate::config::Config;
use crate::data_fetcher::NhlScheduleApi;
use crate::error::AppError;
use crate::ui::{self, DashboardState};
use crossterm::{
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use std::io::stdout;

/// Run the interactive application flow.
///
/// - Sets up terminal raw mode and alternate screen
/// - Runs the interactive dashboard
/// - Cleans up terminal state
pub async fn run_interactive(args: &Args) -> Result<(), AppError> {
    let config = Config::load().await?;
    let source = NhlScheduleApi::new(&config)?;
    let state = DashboardState::new(args.start_date, args.end_date, args.game_type);

    enable_raw_mode()?;
    let mut out = stdout();

    execute!(out, SetTitle("HOCKEY GAME COUNTER"))?;
    execute!(out, EnterAlternateScreen)?;

    let result = ui::run_interactive_ui(&source, state).await;

    // Clean up terminal
    execute!(out, LeaveAlternateScreen)?;
    disable_raw_mode()?;

    result
}
