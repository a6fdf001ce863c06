//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Default domain of the public NHL stats API
pub const DEFAULT_API_DOMAIN: &str = "https://statsapi.web.nhl.com";

/// Path of the schedule endpoint below the API domain
pub const SCHEDULE_ENDPOINT: &str = "/api/v1/schedule";

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "HGC_API_DOMAIN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "HGC_LOG_FILE";

    /// Environment variable for HTTP timeout in seconds (default: 30)
    pub const HTTP_TIMEOUT: &str = "HGC_HTTP_TIMEOUT";
}

/// UI layout constants
pub mod ui {
    /// Content margin from terminal border
    pub const CONTENT_MARGIN: usize = 2;

    /// Width of the team abbreviation column
    pub const TEAM_COLUMN_WIDTH: usize = 10;

    /// Width of the game count column
    pub const COUNT_COLUMN_WIDTH: usize = 5;

    /// Polling interval for keyboard events (milliseconds)
    pub const EVENT_POLL_MS: u64 = 100;

    /// Lines reserved above the row area (header, subheader, blank, captions)
    pub const HEADER_LINES: usize = 4;

    /// Lines reserved below the row area for the footer
    pub const FOOTER_LINES: usize = 2;
}

/// League-wide facts about the NHL
pub mod league {
    /// Number of franchises in the team directory
    pub const TEAM_COUNT: usize = 32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_constants_are_well_formed() {
        assert!(DEFAULT_API_DOMAIN.starts_with("https://"));
        assert!(SCHEDULE_ENDPOINT.starts_with('/'));
        assert!(!SCHEDULE_ENDPOINT.ends_with('/'));
        assert!(DEFAULT_HTTP_TIMEOUT_SECONDS > 0);
    }

    #[test]
    fn test_ui_constants_are_reasonable() {
        let margin = ui::CONTENT_MARGIN;
        let team_width = ui::TEAM_COLUMN_WIDTH;
        let count_width = ui::COUNT_COLUMN_WIDTH;

        assert!(margin > 0);
        assert!(team_width >= 4); // 3-letter abbreviation plus padding
        assert!(count_width >= 3);
        assert!(ui::HEADER_LINES > 0);
    }

    #[test]
    fn test_env_var_names_are_not_empty() {
        assert!(!env_vars::API_DOMAIN.is_empty());
        assert!(!env_vars::LOG_FILE.is_empty());
        assert!(!env_vars::HTTP_TIMEOUT.is_empty());
    }
}
