//! Grounded search gateway port
//!
//! Defines the interface for asking a generative model a question with
//! web-search grounding enabled.

use async_trait::async_trait;
use courtwatch_domain::{GroundingChunk, Model};
use thiserror::Error;

/// Errors that can occur during gateway operations
///
/// These never reach views: use cases convert them into fixed fallback values.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("No API credential configured (set {0})")]
    MissingCredential(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Response blocked: {0}")]
    Blocked(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Raw backend answer: reply text (if any) plus grounding chunks in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroundedResponse {
    pub text: Option<String>,
    pub chunks: Vec<GroundingChunk>,
}

impl GroundedResponse {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            chunks: Vec::new(),
        }
    }

    pub fn with_chunks(mut self, chunks: Vec<GroundingChunk>) -> Self {
        self.chunks = chunks;
        self
    }

    /// Reply text, treating an empty string the same as no text
    pub fn non_empty_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }
}

/// Gateway for grounded generation
///
/// One stateless round trip per call; no retries, no caching.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait GroundedSearchGateway: Send + Sync {
    /// Send a single prompt to `model` with web-search grounding enabled
    async fn generate(&self, model: &Model, prompt: &str) -> Result<GroundedResponse, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_counts_as_missing() {
        assert_eq!(GroundedResponse::default().non_empty_text(), None);
        assert_eq!(GroundedResponse::from_text("").non_empty_text(), None);
        assert_eq!(GroundedResponse::from_text("ok").non_empty_text(), Some("ok"));
    }

    #[test]
    fn test_error_display() {
        let err = GatewayError::RequestFailed {
            status: 403,
            body: "API key not valid".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed with status 403: API key not valid");
    }
}
