//! Application-level configuration.
//!
//! - [`LookupParams`] - model tiers and live board refresh interval

pub mod lookup_params;

pub use lookup_params::{DEFAULT_BOARD_REFRESH, LookupParams};
