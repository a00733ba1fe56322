//! Firm configuration from TOML (`[firm]` section)

use courtwatch_domain::{AdvocateRoster, ConfigIssue, ConfigIssueCode, FirmProfile};
use serde::{Deserialize, Serialize};

/// Raw firm configuration from TOML
///
/// # Example
///
/// ```toml
/// [firm]
/// name = "Jajula & Seniors Legal Office"
/// advocates = ["NARESH KUMAR JAJULA", "NAGESWARA RAO DEVARAPALLI"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFirmConfig {
    /// Display name of the practice
    pub name: Option<String>,
    /// Advocate names searched by the firm-wide lookup
    pub advocates: Option<Vec<String>>,
}

impl FileFirmConfig {
    /// Build the firm profile, falling back to the built-in roster when the
    /// configured one has no usable names.
    pub fn to_profile(&self) -> (FirmProfile, Vec<ConfigIssue>) {
        let mut profile = FirmProfile::default();
        let mut issues = Vec::new();

        if let Some(name) = self.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            profile.firm_name = name.to_string();
        }

        if let Some(names) = &self.advocates {
            match AdvocateRoster::new(names) {
                Ok(roster) => profile.advocates = roster,
                Err(_) => issues.push(ConfigIssue::warning(
                    ConfigIssueCode::EmptyRoster,
                    "firm.advocates: no non-blank names, using the built-in roster",
                )),
            }
        }

        (profile, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtwatch_domain::firm::DEFAULT_ADVOCATES;

    #[test]
    fn test_defaults_when_unset() {
        let (profile, issues) = FileFirmConfig::default().to_profile();
        assert!(issues.is_empty());
        assert_eq!(profile, FirmProfile::default());
        assert_eq!(profile.advocates.len(), DEFAULT_ADVOCATES.len());
    }

    #[test]
    fn test_configured_roster() {
        let config = FileFirmConfig {
            name: Some("Rao Associates".to_string()),
            advocates: Some(vec!["A RAO".to_string(), " ".to_string()]),
        };
        let (profile, issues) = config.to_profile();
        assert!(issues.is_empty());
        assert_eq!(profile.firm_name, "Rao Associates");
        assert_eq!(profile.advocates.joined(), "A RAO");
    }

    #[test]
    fn test_blank_roster_warns() {
        let config = FileFirmConfig {
            name: None,
            advocates: Some(vec![]),
        };
        let (profile, issues) = config.to_profile();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
        assert_eq!(profile.advocates, AdvocateRoster::default());
    }
}
