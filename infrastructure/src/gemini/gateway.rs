//! HTTP gateway to the Generative Language API

use super::protocol::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use crate::config::FileGeminiConfig;
use async_trait::async_trait;
use courtwatch_application::ports::llm_gateway::{
    GatewayError, GroundedResponse, GroundedSearchGateway,
};
use courtwatch_domain::Model;
use courtwatch_domain::core::string::truncate;
use std::time::Duration;
use tracing::{debug, warn};

/// Error bodies are cut to this many bytes before being carried in errors.
const ERROR_BODY_LIMIT: usize = 500;

/// Grounded search over `POST {base_url}/v1beta/models/{model}:generateContent`.
pub struct GeminiGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    api_key_env: String,
}

impl GeminiGateway {
    /// Build a gateway from the `[gemini]` config section.
    ///
    /// A missing key is not an error here; each call then fails with
    /// [`GatewayError::MissingCredential`].
    pub fn from_config(config: &FileGeminiConfig) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.resolve_api_key(),
            api_key_env: config.api_key_env.clone(),
        })
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self, model: &Model) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url,
            model.as_str()
        )
    }
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() || e.is_request() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::Other(e.to_string())
    }
}

/// Prefer the API's own error message over the raw body
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|env| env.error.message)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| truncate(body, ERROR_BODY_LIMIT))
}

#[async_trait]
impl GroundedSearchGateway for GeminiGateway {
    async fn generate(&self, model: &Model, prompt: &str) -> Result<GroundedResponse, GatewayError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GatewayError::MissingCredential(self.api_key_env.clone()))?;

        let url = self.endpoint(model);
        debug!(url = %url, prompt_chars = prompt.len(), "generateContent");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&GenerateContentRequest::grounded(prompt))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_transport_error)?;

        let result = interpret(status, &body);
        if let Err(e) = &result {
            warn!(status, model = %model, error = %e, "generateContent failed");
        }
        result
    }
}

/// Turn an HTTP status and body into a grounded response or a typed error
fn interpret(status: u16, body: &str) -> Result<GroundedResponse, GatewayError> {
    if !(200..300).contains(&status) {
        return Err(GatewayError::RequestFailed {
            status,
            body: error_message(body),
        });
    }

    let parsed: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

    if let Some(reason) = parsed.block_reason() {
        return Err(GatewayError::Blocked(reason.to_string()));
    }

    let chunks = parsed.grounding_chunks();
    debug!(
        finish_reason = parsed
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
            .unwrap_or("none"),
        chunks = chunks.len(),
        "generateContent ok"
    );

    Ok(GroundedResponse {
        text: parsed.text(),
        chunks,
    })
}
