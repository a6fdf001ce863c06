pub mod api;
pub mod models;
pub mod processors;

pub use api::{NhlScheduleApi, ScheduleSource};
pub use models::{GameTypeFilter, Location, ScheduleIndex, TeamGameRecord};
pub use processors::games_per_team;
