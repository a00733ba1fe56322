//! Domain layer for courtwatch
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Request/response contract
//!
//! - **Prompt builder** ([`prompt`]): one template per use case (single case,
//!   firm list, live board), each embedding a rigid output block
//! - **Reply parser** ([`parsing`]): scrapes the delimited blocks back into
//!   typed records, tolerating replies that ignore the template
//!
//! ## Inputs
//!
//! - [`CaseQuery`]: allow-list validated search text
//! - [`AdvocateRoster`]: names for the firm-wide search
//! - [`CourtCode`]: jurisdiction of a live display board

pub mod config;
pub mod core;
pub mod firm;
pub mod lookup;
pub mod parsing;
pub mod prompt;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use crate::core::{
    court::CourtCode,
    error::{DISALLOWED_CHARACTERS_MESSAGE, DomainError, QueryError},
    model::Model,
    query::{CaseQuery, validate_query},
};
pub use firm::{AdvocateRoster, FirmProfile};
pub use lookup::{
    CaseStatusReport, CaseSummary, DisplayBoardState, ExtractedField, FirmBriefing,
    FirmCaseRecord, GroundingChunk, ModelReply, SourceCitation, StatusTone, SyncOutcome,
};
pub use parsing::{parse_case_summary, parse_firm_cases, strip_summary_block};
pub use prompt::{PromptRequest, PromptTemplate, UseCase};
