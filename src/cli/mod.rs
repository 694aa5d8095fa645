//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, and the
//! subcommand handlers.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod history_cmd;
pub mod presenter;
pub mod share_cmd;

// Re-export commonly used types
pub use app::{run_autofill, run_render, run_styles, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{AutofillArgs, Cli, Commands, ConfigAction, HistoryAction, ShareAction};
pub use presenter::Presenter;
