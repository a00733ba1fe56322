//! Scripted gateway for use case tests.

use crate::ports::llm_gateway::{GatewayError, GroundedResponse, GroundedSearchGateway};
use async_trait::async_trait;
use courtwatch_domain::Model;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays queued results in order; once drained, answers with `fallback_text`.
pub(crate) struct ScriptedGateway {
    script: Mutex<VecDeque<Result<GroundedResponse, GatewayError>>>,
    calls: Mutex<Vec<(Model, String)>>,
    fallback_text: String,
}

impl ScriptedGateway {
    pub fn new(script: Vec<Result<GroundedResponse, GatewayError>>) -> Arc<Self> {
        Self::with_fallback(script, "scripted reply")
    }

    pub fn with_fallback(
        script: Vec<Result<GroundedResponse, GatewayError>>,
        fallback_text: &str,
    ) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(VecDeque::from(script)),
            calls: Mutex::new(Vec::new()),
            fallback_text: fallback_text.to_string(),
        })
    }

    /// Every (model, prompt) pair received so far
    pub fn calls(&self) -> Vec<(Model, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GroundedSearchGateway for ScriptedGateway {
    async fn generate(&self, model: &Model, prompt: &str) -> Result<GroundedResponse, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.clone(), prompt.to_string()));
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(GroundedResponse::from_text(self.fallback_text.clone())))
    }
}
