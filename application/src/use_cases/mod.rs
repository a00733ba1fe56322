//! Use cases
//!
//! Application-level operations that orchestrate domain logic.
//! Every lookup converts gateway failures into fallback values, so callers
//! always receive a well-formed result.

pub mod live_board;
pub(crate) mod shared;
pub mod sync_firm;
#[cfg(test)]
pub(crate) mod test_support;
pub mod track_case;
