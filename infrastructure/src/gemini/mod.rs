//! Gemini adapter
//!
//! Implements [`GroundedSearchGateway`](courtwatch_application::GroundedSearchGateway)
//! over the Generative Language REST API with the Google Search tool enabled.

pub mod gateway;
pub mod protocol;

pub use gateway::GeminiGateway;
