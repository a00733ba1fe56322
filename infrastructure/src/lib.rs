//! Infrastructure layer for courtwatch
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileBoardConfig, FileConfig, FileFirmConfig, FileGeminiConfig,
    FileModelsConfig, FileOutputConfig,
};
pub use gemini::GeminiGateway;
