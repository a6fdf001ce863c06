pub mod colors;
mod core;
mod rendering;
pub mod rows;

pub use core::{NO_DATA_PLACEHOLDER, TeletextPage, TeletextRow};
pub use rows::{CountHighlight, TeamRow, build_team_rows, count_highlight};
