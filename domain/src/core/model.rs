//! Model value object representing a generative model on the grounded-search backend

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generative models used for court lookups (Value Object)
///
/// Two tiers are used: a fast model for single-case and live-board lookups,
/// and a higher-capability model for the firm-wide deep search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini3Flash,
    Gemini3Pro,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini3Flash => "gemini-3-flash-preview",
            Model::Gemini3Pro => "gemini-3-pro-preview",
            Model::Custom(s) => s,
        }
    }

    /// Default model for quick lookups (single case, live board)
    pub fn default_lookup() -> Model {
        Model::Gemini3Flash
    }

    /// Default model for the firm-wide deep search
    pub fn default_deep_search() -> Model {
        Model::Gemini3Pro
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::default_lookup()
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Model::from_name(s))
    }
}

impl Model {
    /// Resolve a model identifier; unknown names become [`Model::Custom`].
    pub fn from_name(s: &str) -> Model {
        match s {
            "gemini-3-flash-preview" => Model::Gemini3Flash,
            "gemini-3-pro-preview" => Model::Gemini3Pro,
            other => Model::Custom(other.to_string()),
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from_name(&s))
    }
}
