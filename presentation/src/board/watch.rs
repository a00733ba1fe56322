//! Watch loop for the live display board
//!
//! Prints every refresh from a [`BoardPoller`]. Typing a court code switches
//! jurisdiction, which cancels the previous poll before the new one starts.

use crate::ConsoleFormatter;
use colored::Colorize;
use courtwatch_application::BoardPoller;
use courtwatch_domain::{CourtCode, OutputFormat};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// One line typed while watching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardInput {
    Switch(CourtCode),
    Quit,
    Ignore,
    Unknown,
}

impl BoardInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Ignore;
        }
        if matches!(line.to_ascii_lowercase().as_str(), "q" | "quit" | "exit") {
            return Self::Quit;
        }
        match line.parse::<CourtCode>() {
            Ok(court) => Self::Switch(court),
            Err(_) => Self::Unknown,
        }
    }
}

pub struct BoardWatcher {
    poller: BoardPoller,
    format: OutputFormat,
}

impl BoardWatcher {
    pub fn new(poller: BoardPoller, format: OutputFormat) -> Self {
        Self { poller, format }
    }

    /// Watch `court` until `q`, Ctrl-C, or the poll ends
    pub async fn run(mut self, court: CourtCode) -> std::io::Result<()> {
        let mut updates = self.poller.watch(court);
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdin_open = true;

        self.print_hint();

        loop {
            tokio::select! {
                update = updates.recv() => match update {
                    Some(state) => {
                        println!("{}", ConsoleFormatter::format_board(&state, self.format));
                    }
                    None => break,
                },
                line = lines.next_line(), if stdin_open => match line? {
                    Some(line) => match BoardInput::parse(&line) {
                        BoardInput::Switch(next) => {
                            if self.poller.current_court() != Some(next) {
                                info!(court = %next, "switching live board");
                                updates = self.poller.watch(next);
                            }
                        }
                        BoardInput::Quit => break,
                        BoardInput::Ignore => {}
                        BoardInput::Unknown => self.print_hint(),
                    },
                    None => stdin_open = false,
                },
                _ = tokio::signal::ctrl_c() => {
                    println!();
                    break;
                }
            }
        }

        self.poller.stop();
        Ok(())
    }

    fn print_hint(&self) {
        if self.format == OutputFormat::Json {
            return;
        }
        eprintln!(
            "{}",
            format!(
                "Refreshing every {}s. Type tg or ap to switch court, q to quit.",
                self.poller.interval().as_secs()
            )
            .dimmed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_input_parse() {
        assert_eq!(BoardInput::parse("tg"), BoardInput::Switch(CourtCode::Tg));
        assert_eq!(BoardInput::parse(" AP "), BoardInput::Switch(CourtCode::Ap));
        assert_eq!(BoardInput::parse("q"), BoardInput::Quit);
        assert_eq!(BoardInput::parse("QUIT"), BoardInput::Quit);
        assert_eq!(BoardInput::parse(""), BoardInput::Ignore);
        assert_eq!(BoardInput::parse("ka"), BoardInput::Unknown);
    }
}
