//! Backend configuration from TOML (`[gemini]` section)

use serde::{Deserialize, Serialize};

/// Environment variable consulted for the API key by default.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
/// Public Generative Language API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Raw backend configuration from TOML
///
/// # Example
///
/// ```toml
/// [gemini]
/// api_key_env = "GEMINI_API_KEY"   # Variable holding the key
/// # api_key = "..."                # Inline key, overrides the variable
/// base_url = "https://generativelanguage.googleapis.com"
/// timeout_secs = 60
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Inline API key
    pub api_key: Option<String>,
    /// API endpoint root
    pub base_url: String,
    /// Per-request timeout; none means the client default
    pub timeout_secs: Option<u64>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl FileGeminiConfig {
    /// Inline key if set and non-blank, otherwise the environment variable's value
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .map(|k| k.trim().to_string())
                    .filter(|k| !k.is_empty())
            })
    }
}
