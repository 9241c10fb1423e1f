//! CLI layer - Command-line interface
//!
//! Exposes each backend operation as a subcommand, plus config management
//! and output formatting.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;

// Re-export commonly used types
pub use app::{run, EXIT_ERROR, EXIT_SUCCESS};
pub use args::{BackendArg, Cli, Commands, ConfigAction, ShowArgs};
pub use presenter::Presenter;
