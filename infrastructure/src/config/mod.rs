//! Configuration file loading for courtwatch
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `COURTWATCH_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./courtwatch.toml` or `./.courtwatch.toml`
//! 4. Global: `<config dir>/courtwatch/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileBoardConfig, FileConfig, FileFirmConfig, FileGeminiConfig, FileModelsConfig,
    FileOutputConfig,
};
pub use loader::ConfigLoader;
