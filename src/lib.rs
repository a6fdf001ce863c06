//! NHL Game Counter Library
//!
//! This library fetches NHL schedule data for a date range, aggregates it
//! into per-team game lists, and renders the counts as a teletext-style
//! table.
//!
//! # Examples
//!
//! ```rust,no_run
//! use hockey_game_counter::config::Config;
//! use hockey_game_counter::data_fetcher::{
//!     GameTypeFilter, NhlScheduleApi, ScheduleSource, games_per_team,
//! };
//! use hockey_game_counter::error::AppError;
//! use hockey_game_counter::teletext_ui::build_team_rows;
//! use chrono::NaiveDate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let source = NhlScheduleApi::new(&config)?;
//!
//!     let start = NaiveDate::from_ymd_opt(2022, 10, 12).unwrap();
//!     let end = NaiveDate::from_ymd_opt(2022, 10, 13).unwrap();
//!
//!     // Fetch, aggregate, and count
//!     let dates = source.schedule(start, end).await?;
//!     let index = games_per_team(&dates, GameTypeFilter::Regular);
//!     for row in build_team_rows(&index) {
//!         println!("{} {}", row.abbreviation, row.game_count);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod teams;
pub mod teletext_ui;
pub mod testing_utils;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{
    GameTypeFilter, NhlScheduleApi, ScheduleIndex, ScheduleSource, TeamGameRecord, games_per_team,
};
pub use error::AppError;
pub use teams::team_abbreviation;
pub use teletext_ui::{TeletextPage, build_team_rows};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
