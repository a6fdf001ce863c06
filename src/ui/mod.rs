pub mod interactive;

pub use interactive::{
    DashboardState, KeyAction, PAGE_TITLE, apply_key, build_error_page, build_results_page,
    run_interactive_ui,
};
