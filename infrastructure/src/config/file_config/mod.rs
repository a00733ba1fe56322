//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain and application
//! types at startup.

mod board;
mod firm;
mod gemini;
mod models;
mod output;

pub use board::FileBoardConfig;
pub use firm::FileFirmConfig;
pub use gemini::FileGeminiConfig;
pub use models::FileModelsConfig;
pub use output::FileOutputConfig;

use courtwatch_application::LookupParams;
use courtwatch_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend credentials and endpoint
    pub gemini: FileGeminiConfig,
    /// Model tier selection
    pub models: FileModelsConfig,
    /// Firm name and advocate roster
    pub firm: FileFirmConfig,
    /// Live display board settings
    pub board: FileBoardConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks empty model names, an advocate roster with no usable names,
    /// a zero refresh interval, and unknown court codes.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.models.parse_lookup().1);
        issues.extend(self.models.parse_deep_search().1);
        issues.extend(self.firm.to_profile().1);
        issues.extend(self.board.refresh_interval().1);
        issues.extend(self.board.parse_default_court().1);

        issues
    }

    /// Lookup parameters with configured models and refresh interval applied.
    ///
    /// Invalid values fall back to defaults; see [`validate`](Self::validate).
    pub fn to_lookup_params(&self) -> LookupParams {
        let mut params = LookupParams::default();
        if let Some(model) = self.models.parse_lookup().0 {
            params = params.with_lookup_model(model);
        }
        if let Some(model) = self.models.parse_deep_search().0 {
            params = params.with_deep_search_model(model);
        }
        params.with_board_refresh(self.board.refresh_interval().0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtwatch_domain::{ConfigIssueCode, CourtCode, Model, OutputFormat};
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gemini]
api_key_env = "COURT_KEY"
base_url = "http://localhost:8080"
timeout_secs = 30

[models]
lookup = "gemini-3-flash-preview"
deep_search = "gemini-2.5-pro"

[firm]
name = "Rao Associates"
advocates = ["A RAO", "B DEVI"]

[board]
refresh_secs = 15
default_court = "ap"

[output]
format = "summary"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.api_key_env, "COURT_KEY");
        assert_eq!(config.gemini.timeout_secs, Some(30));
        assert_eq!(config.firm.name.as_deref(), Some("Rao Associates"));
        assert_eq!(config.output.format, Some(OutputFormat::Summary));
        assert!(!config.output.color);
        assert!(config.validate().is_empty());

        let params = config.to_lookup_params();
        assert_eq!(params.lookup_model, Model::Gemini3Flash);
        assert_eq!(params.deep_search_model.as_str(), "gemini-2.5-pro");
        assert_eq!(params.board_refresh, Duration::from_secs(15));
        assert_eq!(config.board.parse_default_court().0, CourtCode::Ap);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[models]
deep_search = "gemini-3-flash-preview"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let params = config.to_lookup_params();
        assert_eq!(params.deep_search_model, Model::Gemini3Flash);
        // Defaults should apply
        assert_eq!(params.lookup_model, Model::Gemini3Flash);
        assert_eq!(params.board_refresh, Duration::from_secs(60));
        assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[models]
lookup = ""

[firm]
advocates = ["  ", ""]

[board]
refresh_secs = 0
default_court = "ka"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        let codes: Vec<_> = issues.iter().map(|i| i.code.clone()).collect();

        assert_eq!(issues.len(), 4);
        assert!(codes.contains(&ConfigIssueCode::EmptyModelName {
            field: "lookup".to_string()
        }));
        assert!(codes.contains(&ConfigIssueCode::EmptyRoster));
        assert!(codes.contains(&ConfigIssueCode::ZeroRefreshInterval));
        assert!(issues.iter().filter(|i| i.is_error()).count() == 2);

        // Fallbacks still produce usable params
        let params = config.to_lookup_params();
        assert_eq!(params.lookup_model, Model::Gemini3Flash);
        assert_eq!(params.board_refresh, Duration::from_secs(60));
    }
}
