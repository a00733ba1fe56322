//! Live display board watch mode

pub mod watch;

pub use watch::{BoardInput, BoardWatcher};
