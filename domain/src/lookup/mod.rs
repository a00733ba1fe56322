//! Lookup results: citations, extracted fields, parsed records, and the
//! per-use-case values handed to views.

pub mod citation;
pub mod field;
pub mod records;
pub mod reply;

pub use citation::{DEFAULT_SOURCE_TITLE, GroundingChunk, SourceCitation};
pub use field::{ExtractedField, NOT_AVAILABLE};
pub use records::{CaseSummary, FirmCaseRecord, StatusTone};
pub use reply::{CaseStatusReport, DisplayBoardState, FirmBriefing, ModelReply, SyncOutcome};
