use crate::data_fetcher::models::GameTypeFilter;
use chrono::NaiveDate;
use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application should run in non-interactive mode.
/// Non-interactive mode is used when any of these conditions are met:
/// - --once flag is set (render the table once and exit)
/// - config operations are requested
/// - --debug mode is enabled
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.once
        || args.new_api_domain.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
        || args.debug
}

/// NHL Game Counter
///
/// A teletext-style dashboard counting the games played by each NHL team
/// over a chosen time period, grouped by game type.
///
/// In interactive mode (default):
/// - Use arrow keys (←/→) to shift the date window by its own length
/// - Use Shift+←/→ to shift the window by one day
/// - Press 't' to cycle the game-type filter
/// - Press 'r' to refresh data
/// - Use ↑/↓ to page through the table on short terminals
/// - Press 'q' to quit
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// First day of the queried window in YYYY-MM-DD format.
    /// Defaults to today.
    #[arg(long = "start-date", short = 's', help_heading = "Query")]
    pub start_date: Option<NaiveDate>,

    /// Last day of the queried window in YYYY-MM-DD format, inclusive.
    /// Defaults to today.
    #[arg(long = "end-date", short = 'e', help_heading = "Query")]
    pub end_date: Option<NaiveDate>,

    /// Game-type filter: all, pr (pre-season), r (regular season), p (post-season).
    #[arg(
        long = "game-type",
        short = 'g',
        value_enum,
        default_value_t = GameTypeFilter::Regular,
        help_heading = "Query"
    )]
    pub game_type: GameTypeFilter,

    /// Render the table once and exit immediately. Useful for scripts.
    /// The output stays visible in terminal history.
    #[arg(short, long)]
    pub once: bool,

    /// Update API domain in config.
    #[arg(long = "config", help_heading = "Configuration", value_name = "API_DOMAIN")]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config and revert to the default location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode. Info logs are mirrored to stdout in --once mode.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path for this run only.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
