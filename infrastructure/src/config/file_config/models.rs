//! Model tier configuration from TOML (`[models]` section)

use courtwatch_domain::{ConfigIssue, ConfigIssueCode, Model};
use serde::{Deserialize, Serialize};

/// Model tier configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// lookup = "gemini-3-flash-preview"     # Single case + live board
/// deep_search = "gemini-3-pro-preview"  # Firm-wide search
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model for single-case and live-board lookups
    pub lookup: Option<String>,
    /// Model for the firm-wide deep search
    pub deep_search: Option<String>,
}

impl FileModelsConfig {
    /// Parse a single model string, collecting issues for empty names.
    fn parse_single_model(field: &str, value: Option<&String>) -> (Option<Model>, Vec<ConfigIssue>) {
        match value {
            None => (None, Vec::new()),
            Some(s) if s.trim().is_empty() => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: field.to_string(),
                    },
                    format!("models.{}: model name cannot be empty", field),
                )],
            ),
            Some(s) => (Some(Model::from_name(s.trim())), Vec::new()),
        }
    }

    pub fn parse_lookup(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("lookup", self.lookup.as_ref())
    }

    pub fn parse_deep_search(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("deep_search", self.deep_search.as_ref())
    }
}
