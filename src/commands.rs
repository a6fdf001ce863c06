use crate::cli::Args;
use crate::config::Config;
use crate::data_fetcher::{NhlScheduleApi, ScheduleSource, games_per_team};
use crate::error::AppError;
use crate::ui::{DashboardState, build_error_page, build_results_page};
use crossterm::{execute, terminal::SetTitle};
use std::io::stdout;

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--config, --set-log-file,
/// --clear-log-file). Updates the stored configuration and exits.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = new_domain.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Handles the --once command (quick view mode).
///
/// Fetches and renders the table once, then exits. A failed update is
/// rendered as an error page rather than returned, so the snapshot always
/// leaves something readable in scrollback.
pub async fn handle_once_command(args: &Args) -> Result<(), AppError> {
    let config = Config::load().await?;
    let source = NhlScheduleApi::new(&config)?;
    let state = DashboardState::new(args.start_date, args.end_date, args.game_type);

    let page = match source.schedule(state.start, state.end).await {
        Ok(dates) => {
            let index = games_per_team(&dates, state.filter);
            // No footer in quick view mode, and no height limit so the
            // whole league fits in scrollback
            build_results_page(&state, &index, false, true)
        }
        Err(e) => build_error_page(&state, &e, false, true),
    };

    execute!(stdout(), SetTitle("HOCKEY GAME COUNTER"))?;
    page.render_buffered(&mut stdout())?;
    println!(); // Leave the shell prompt on its own line

    Ok(())
}
