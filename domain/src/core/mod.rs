//! Core domain concepts shared across all subdomains.
//!
//! - [`query::CaseQuery`] - a validated single-case search query
//! - [`court::CourtCode`] - jurisdictions with a live display board
//! - [`model::Model`] - generative models used for lookups
//! - [`error::DomainError`] - domain-level errors

pub mod court;
pub mod error;
pub mod model;
pub mod query;
pub mod string;
