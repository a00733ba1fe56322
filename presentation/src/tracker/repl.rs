//! REPL (Read-Eval-Print Loop) for interactive case tracking
//!
//! Each input line is validated and looked up. A failed lookup keeps its
//! query so `/retry` re-issues exactly that query, whatever was typed since.

use crate::ConsoleFormatter;
use crate::ProgressReporter;
use colored::Colorize;
use courtwatch_application::TrackCaseUseCase;
use courtwatch_domain::{CaseQuery, CaseStatusReport, OutputFormat};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 500;

/// Slash commands understood by the tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerCommand {
    Retry,
    Clear,
    Help,
    Quit,
    Unknown(String),
}

impl TrackerCommand {
    /// `None` when the line is a query rather than a command
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with('/') {
            return None;
        }
        Some(match line {
            "/retry" | "/r" => Self::Retry,
            "/clear" | "/c" => Self::Clear,
            "/help" | "/h" | "/?" => Self::Help,
            "/quit" | "/exit" | "/q" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        })
    }
}

/// Whether the loop keeps reading after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplStep {
    Continue,
    Exit,
}

/// Interactive case tracker
pub struct TrackerRepl {
    use_case: TrackCaseUseCase,
    format: OutputFormat,
    show_progress: bool,
    last: Option<CaseStatusReport>,
}

impl TrackerRepl {
    pub fn new(use_case: TrackCaseUseCase, format: OutputFormat) -> Self {
        Self {
            use_case,
            format,
            show_progress: true,
            last: None,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Result currently on screen, if any
    pub fn last_report(&self) -> Option<&CaseStatusReport> {
        self.last.as_ref()
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = Reedline::create();
        if let Some(path) = Self::history_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => warn!("History unavailable: {}", e),
            }
        }
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("courtwatch".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    if self.handle_line(&line).await == ReplStep::Exit {
                        break;
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                _ => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("courtwatch").join("history.txt"))
    }

    /// Process one input line
    pub async fn handle_line(&mut self, line: &str) -> ReplStep {
        let line = line.trim();
        if line.is_empty() {
            return ReplStep::Continue;
        }

        if let Some(command) = TrackerCommand::parse(line) {
            return self.handle_command(command).await;
        }

        match CaseQuery::parse(line) {
            Ok(query) => self.lookup(query).await,
            Err(e) => {
                // Blocked before dispatch; the current result stays
                println!("{}", e.to_string().red());
            }
        }
        ReplStep::Continue
    }

    async fn handle_command(&mut self, command: TrackerCommand) -> ReplStep {
        match command {
            TrackerCommand::Quit => {
                println!("Bye!");
                return ReplStep::Exit;
            }
            TrackerCommand::Retry => match &self.last {
                Some(report) if report.is_error() => {
                    let query = report.query.clone();
                    debug!(query = %query, "retrying failed lookup");
                    self.lookup(query).await;
                }
                Some(_) => println!("Last lookup succeeded; nothing to retry."),
                None => println!("Nothing to retry."),
            },
            TrackerCommand::Clear => {
                self.last = None;
                println!("Cleared.");
            }
            TrackerCommand::Help => Self::print_help(),
            TrackerCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        ReplStep::Continue
    }

    async fn lookup(&mut self, query: CaseQuery) {
        println!();
        let report = if self.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.execute_with_progress(&query, &progress).await
        } else {
            self.use_case.execute(&query).await
        };

        println!("{}", ConsoleFormatter::format_report(&report, self.format));
        if report.is_error() {
            println!("{}", "Type /retry to try again or /clear to reset.".dimmed());
        }
        println!();
        self.last = Some(report);
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        courtwatch - Case Tracker            │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Enter a case number, party name, or CNR.");
        Self::print_help();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /retry, /r        - Re-run the last failed lookup");
        println!("  /clear, /c        - Discard the current result");
        println!("  /help, /h, /?     - Show this help");
        println!("  /quit, /exit, /q  - Exit");
        println!();
    }
}
