//! Presentation layer for math-duel
//!
//! This crate contains the CLI definition, the dashboard server,
//! console output formatting and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;
pub mod web;

// Re-export commonly used types
pub use cli::commands::{Cli, ModeArg, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{LogProgress, ProgressReporter};
pub use web::{DashboardServer, ServerError};
