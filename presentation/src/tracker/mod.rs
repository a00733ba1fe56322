//! Interactive single-case tracker

pub mod repl;

pub use repl::{ReplStep, TrackerCommand, TrackerRepl};
