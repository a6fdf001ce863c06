use clap::Parser;
use hockey_game_counter::cli::Args;
use hockey_game_counter::error::AppError;
use hockey_game_counter::{app, commands, logging};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Set up logging to file (and stdout in debug non-interactive modes).
    // The guard must stay alive for the duration of the program so logs
    // are flushed properly.
    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Configuration operations exit without touching the network
    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if args.new_api_domain.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path
    {
        return commands::handle_config_update_command(&args).await;
    }

    if args.once {
        // Quick view mode - render the table once and exit
        return commands::handle_once_command(&args).await;
    }

    app::run_interactive(&args).await
}
