//! Presentation layer for courtwatch
//!
//! This crate contains CLI definitions, output formatters, progress
//! reporters, the interactive case tracker, and the live board watcher.

pub mod board;
pub mod cli;
pub mod output;
pub mod progress;
pub mod tracker;

// Re-export commonly used types
pub use board::BoardWatcher;
pub use cli::commands::{BoardArgs, Cli, Command, FirmArgs, OutputFormat, TrackArgs};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressMode, ProgressReporter, SimpleProgress};
pub use tracker::TrackerRepl;
