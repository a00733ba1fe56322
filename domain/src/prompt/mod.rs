//! Prompt domain
//!
//! Builds the natural-language instructions sent to the grounded model,
//! one template per use case.

mod request;
mod template;

pub use request::{PromptRequest, UseCase};
pub use template::PromptTemplate;
