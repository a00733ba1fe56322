//! Firm profile: the practice name and the advocates whose cases are tracked.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Advocate names tracked by default when no roster is configured.
pub const DEFAULT_ADVOCATES: [&str; 4] = [
    "NARESH KUMAR JAJULA (NKJ)",
    "N DURGA PRASAD (NDP)",
    "ANKINEEDU PRASAD KOTHAPALLI (KAP)",
    "RAMESH BABU VISHWANATHULA",
];

/// Practice name used when none is configured.
pub const DEFAULT_FIRM_NAME: &str = "Jajula & Seniors Legal Office";

/// Ordered, non-empty list of advocate names (Value Object)
///
/// Blank entries are dropped on construction and the remaining names are
/// trimmed. Names are free text; the case-query allow-list does not apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct AdvocateRoster {
    names: Vec<String>,
}

impl AdvocateRoster {
    pub fn new<I, S>(names: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        if names.is_empty() {
            return Err(DomainError::EmptyRoster);
        }
        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names joined with `", "`, as interpolated into the firm-list prompt
    pub fn joined(&self) -> String {
        self.names.join(", ")
    }
}

impl Default for AdvocateRoster {
    fn default() -> Self {
        Self {
            names: DEFAULT_ADVOCATES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for AdvocateRoster {
    type Error = DomainError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AdvocateRoster> for Vec<String> {
    fn from(roster: AdvocateRoster) -> Self {
        roster.names
    }
}

/// The practice being tracked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmProfile {
    pub firm_name: String,
    pub advocates: AdvocateRoster,
}

impl Default for FirmProfile {
    fn default() -> Self {
        Self {
            firm_name: DEFAULT_FIRM_NAME.to_string(),
            advocates: AdvocateRoster::default(),
        }
    }
}
