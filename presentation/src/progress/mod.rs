//! Progress indicators for lookups

pub mod reporter;
