//! Application layer for courtwatch
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_BOARD_REFRESH, LookupParams};
pub use ports::{
    llm_gateway::{GatewayError, GroundedResponse, GroundedSearchGateway},
    progress::{LookupProgressNotifier, NoProgress},
};
pub use use_cases::live_board::{BoardPoller, FetchLiveBoardUseCase, MIN_BOARD_REFRESH};
pub use use_cases::shared::{
    BOARD_LOOKUP_FAILED, BOARD_UNAVAILABLE, CASE_LOOKUP_FAILED, CASE_NOT_UPDATED,
    FIRM_SYNC_FAILED,
};
pub use use_cases::sync_firm::SyncFirmUseCase;
pub use use_cases::track_case::TrackCaseUseCase;
