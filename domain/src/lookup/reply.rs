//! Model replies and per-use-case lookup results

use super::citation::SourceCitation;
use super::records::{CaseSummary, FirmCaseRecord};
use crate::core::court::CourtCode;
use crate::core::query::CaseQuery;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Raw gateway result handed to views: reply text, citations, and a failure flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelReply {
    pub text: String,
    pub sources: Vec<SourceCitation>,
    pub is_error: bool,
}

impl ModelReply {
    pub fn success(text: impl Into<String>, sources: Vec<SourceCitation>) -> Self {
        Self {
            text: text.into(),
            sources,
            is_error: false,
        }
    }

    /// Degraded reply carrying a fixed user-facing message and no sources
    pub fn fallback(message: impl Into<String>) -> Self {
        Self {
            text: message.into(),
            sources: Vec::new(),
            is_error: true,
        }
    }
}

/// Result of a single-case lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStatusReport {
    /// The query this report answers; retry re-issues exactly this
    pub query: CaseQuery,
    #[serde(flatten)]
    pub reply: ModelReply,
    /// Parsed header; blank when the reply is an error
    pub summary: CaseSummary,
    /// Narrative outside the delimited block; empty when the reply is an error
    pub commentary: String,
}

impl CaseStatusReport {
    pub fn is_error(&self) -> bool {
        self.reply.is_error
    }
}

/// Tri-state result of a firm-wide sync
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncOutcome {
    /// At least one case block was parsed
    Synced,
    /// The backend answered but no case blocks were found
    NoCases,
    /// The backend call failed
    Failed,
}

/// Result of a firm-wide case sync
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirmBriefing {
    pub outcome: SyncOutcome,
    pub cases: Vec<FirmCaseRecord>,
    pub raw_briefing: String,
    pub sources: Vec<SourceCitation>,
}

impl FirmBriefing {
    /// Build from a successful reply; the outcome follows the case count.
    pub fn synced(
        cases: Vec<FirmCaseRecord>,
        raw_briefing: impl Into<String>,
        sources: Vec<SourceCitation>,
    ) -> Self {
        let outcome = if cases.is_empty() {
            SyncOutcome::NoCases
        } else {
            SyncOutcome::Synced
        };
        Self {
            outcome,
            cases,
            raw_briefing: raw_briefing.into(),
            sources,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            outcome: SyncOutcome::Failed,
            cases: Vec::new(),
            raw_briefing: message.into(),
            sources: Vec::new(),
        }
    }
}

/// Latest live display board for one jurisdiction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayBoardState {
    pub court: CourtCode,
    #[serde(flatten)]
    pub reply: ModelReply,
    pub fetched_at: DateTime<Utc>,
}
