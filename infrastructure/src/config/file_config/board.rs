//! Live board configuration from TOML (`[board]` section)

use courtwatch_application::DEFAULT_BOARD_REFRESH;
use courtwatch_domain::{ConfigIssue, ConfigIssueCode, CourtCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw live board configuration from TOML
///
/// # Example
///
/// ```toml
/// [board]
/// refresh_secs = 60
/// default_court = "tg"   # tg | ap
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBoardConfig {
    /// Seconds between refreshes in watch mode
    pub refresh_secs: u64,
    /// Jurisdiction shown when none is given on the command line
    pub default_court: String,
}

impl Default for FileBoardConfig {
    fn default() -> Self {
        Self {
            refresh_secs: DEFAULT_BOARD_REFRESH.as_secs(),
            default_court: CourtCode::default().as_str().to_string(),
        }
    }
}

impl FileBoardConfig {
    pub fn refresh_interval(&self) -> (Duration, Vec<ConfigIssue>) {
        if self.refresh_secs == 0 {
            return (
                DEFAULT_BOARD_REFRESH,
                vec![ConfigIssue::error(
                    ConfigIssueCode::ZeroRefreshInterval,
                    "board.refresh_secs cannot be 0",
                )],
            );
        }
        (Duration::from_secs(self.refresh_secs), Vec::new())
    }

    pub fn parse_default_court(&self) -> (CourtCode, Vec<ConfigIssue>) {
        match self.default_court.parse::<CourtCode>() {
            Ok(court) => (court, Vec::new()),
            Err(_) => (
                CourtCode::default(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "board.default_court".to_string(),
                        value: self.default_court.clone(),
                        valid_values: CourtCode::all()
                            .iter()
                            .map(|c| c.as_str().to_lowercase())
                            .collect(),
                    },
                    format!(
                        "board.default_court: unknown value '{}', falling back to '{}'",
                        self.default_court,
                        CourtCode::default()
                    ),
                )],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileBoardConfig::default();
        assert_eq!(config.refresh_interval().0, Duration::from_secs(60));
        assert_eq!(config.parse_default_court().0, CourtCode::Tg);
    }

    #[test]
    fn test_unknown_court_warns() {
        let config = FileBoardConfig {
            default_court: "ka".to_string(),
            ..Default::default()
        };
        let (court, issues) = config.parse_default_court();
        assert_eq!(court, CourtCode::Tg);
        assert!(!issues[0].is_error());
        assert!(matches!(
            &issues[0].code,
            ConfigIssueCode::InvalidEnumValue { valid_values, .. } if valid_values.len() == 2
        ));
    }
}
