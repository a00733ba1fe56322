//! Court jurisdiction codes for the live display board

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// High Court jurisdiction whose live display board can be requested (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CourtCode {
    /// High Court for the State of Telangana
    #[default]
    Tg,
    /// High Court of Andhra Pradesh
    Ap,
}

impl CourtCode {
    /// Portal hostname interpolated into the live-board prompt
    pub fn portal_host(&self) -> &'static str {
        match self {
            CourtCode::Tg => "tshc.gov.in",
            CourtCode::Ap => "aphc.gov.in",
        }
    }

    /// Human-readable state name
    pub fn display_name(&self) -> &'static str {
        match self {
            CourtCode::Tg => "Telangana",
            CourtCode::Ap => "Andhra Pradesh",
        }
    }

    /// Two-letter code
    pub fn as_str(&self) -> &'static str {
        match self {
            CourtCode::Tg => "TG",
            CourtCode::Ap => "AP",
        }
    }

    pub fn all() -> [CourtCode; 2] {
        [CourtCode::Tg, CourtCode::Ap]
    }
}

impl std::fmt::Display for CourtCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CourtCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TG" => Ok(CourtCode::Tg),
            "AP" => Ok(CourtCode::Ap),
            _ => Err(DomainError::UnknownCourt(s.to_string())),
        }
    }
}
