//! Progress reporting for lookups

use colored::Colorize;
use courtwatch_application::ports::progress::{LookupProgressNotifier, NoProgress};
use courtwatch_domain::UseCase;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while a lookup is in flight. Draws to stderr.
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn activity(use_case: UseCase) -> &'static str {
        match use_case {
            UseCase::SingleCase => "Searching e-Courts...",
            UseCase::FirmList => "Running firm-wide deep search...",
            UseCase::LiveBoard => "Reading live display board...",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupProgressNotifier for ProgressReporter {
    fn on_lookup_start(&self, use_case: UseCase) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(Self::activity(use_case));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(previous) = slot.replace(pb) {
                previous.finish_and_clear();
            }
        }
    }

    fn on_lookup_complete(&self, _use_case: UseCase, success: bool) {
        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };
        if let Some(pb) = slot.take() {
            if success {
                pb.finish_and_clear();
            } else {
                pb.finish_with_message(format!("{}", "lookup failed".red()));
            }
        }
    }
}

/// Line-per-event progress for stderr that is not a terminal (CI logs, `2> file`)
pub struct SimpleProgress;

impl SimpleProgress {
    fn start_line(use_case: UseCase) -> String {
        format!("{} {}", "->".cyan(), ProgressReporter::activity(use_case))
    }

    fn complete_line(use_case: UseCase, success: bool) -> String {
        if success {
            format!("  {} {}", "v".green(), use_case)
        } else {
            format!("  {} {} (failed)", "x".red(), use_case)
        }
    }
}

impl LookupProgressNotifier for SimpleProgress {
    fn on_lookup_start(&self, use_case: UseCase) {
        eprintln!("{}", Self::start_line(use_case));
    }

    fn on_lookup_complete(&self, use_case: UseCase, success: bool) {
        eprintln!("{}", Self::complete_line(use_case, success));
    }
}

/// Which progress notifier a one-shot command gets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    /// `--quiet`: nothing on stderr
    Silent,
    /// Animated spinner on an interactive terminal
    Spinner,
    /// One plain line per event when stderr is redirected
    Plain,
}

impl ProgressMode {
    pub fn detect(quiet: bool, stderr_is_terminal: bool) -> Self {
        match (quiet, stderr_is_terminal) {
            (true, _) => ProgressMode::Silent,
            (false, true) => ProgressMode::Spinner,
            (false, false) => ProgressMode::Plain,
        }
    }

    pub fn into_notifier(self) -> Box<dyn LookupProgressNotifier> {
        match self {
            ProgressMode::Silent => Box::new(NoProgress),
            ProgressMode::Spinner => Box::new(ProgressReporter::new()),
            ProgressMode::Plain => Box::new(SimpleProgress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_lookup_start(UseCase::SingleCase);
        assert!(reporter.spinner.lock().unwrap().is_some());
        reporter.on_lookup_complete(UseCase::SingleCase, true);
        assert!(reporter.spinner.lock().unwrap().is_none());
        // Completing twice is harmless
        reporter.on_lookup_complete(UseCase::SingleCase, false);
    }

    #[test]
    fn test_mode_detection() {
        assert_eq!(ProgressMode::detect(true, true), ProgressMode::Silent);
        assert_eq!(ProgressMode::detect(true, false), ProgressMode::Silent);
        assert_eq!(ProgressMode::detect(false, true), ProgressMode::Spinner);
        assert_eq!(ProgressMode::detect(false, false), ProgressMode::Plain);
    }

    #[test]
    fn test_plain_lines() {
        colored::control::set_override(false);
        assert_eq!(
            SimpleProgress::start_line(UseCase::FirmList),
            "-> Running firm-wide deep search..."
        );
        assert_eq!(
            SimpleProgress::complete_line(UseCase::LiveBoard, true),
            format!("  v {}", UseCase::LiveBoard)
        );
        assert!(SimpleProgress::complete_line(UseCase::SingleCase, false).ends_with("(failed)"));

        let notifier = ProgressMode::Plain.into_notifier();
        notifier.on_lookup_start(UseCase::SingleCase);
        notifier.on_lookup_complete(UseCase::SingleCase, true);
    }
}
