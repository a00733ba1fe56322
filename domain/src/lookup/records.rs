//! Typed records parsed out of model replies

use super::field::{ExtractedField, serialize_or_sentinel};
use serde::Serialize;

/// Structured header of a single-case reply
///
/// Every field is optional: presence depends on whether the model followed
/// the requested template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseSummary {
    pub case_number: ExtractedField,
    pub status: ExtractedField,
    pub next_hearing_date: ExtractedField,
    pub judge: ExtractedField,
    pub court: ExtractedField,
    pub stage: ExtractedField,
}

impl CaseSummary {
    /// True when no field carries a real value
    pub fn is_blank(&self) -> bool {
        [
            &self.case_number,
            &self.status,
            &self.next_hearing_date,
            &self.judge,
            &self.court,
            &self.stage,
        ]
        .iter()
        .all(|f| !f.is_provided())
    }

    pub fn tone(&self) -> StatusTone {
        StatusTone::classify(self.status.value())
    }
}

/// One case found by the firm-wide search
///
/// Serializes absent fields as `"N/A"`; the firm list JSON never carries `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirmCaseRecord {
    #[serde(serialize_with = "serialize_or_sentinel")]
    pub case_number: ExtractedField,
    #[serde(serialize_with = "serialize_or_sentinel")]
    pub advocate: ExtractedField,
    #[serde(serialize_with = "serialize_or_sentinel")]
    pub parties: ExtractedField,
    #[serde(serialize_with = "serialize_or_sentinel")]
    pub status: ExtractedField,
    #[serde(serialize_with = "serialize_or_sentinel")]
    pub next_date: ExtractedField,
    #[serde(serialize_with = "serialize_or_sentinel")]
    pub court_location: ExtractedField,
    #[serde(serialize_with = "serialize_or_sentinel")]
    pub today_update: ExtractedField,
    #[serde(serialize_with = "serialize_or_sentinel")]
    pub portal_link: ExtractedField,
}

impl FirmCaseRecord {
    pub fn tone(&self) -> StatusTone {
        StatusTone::classify(self.status.value())
    }
}

/// Coarse classification of a free-text case status, used for colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    /// Disposed, closed, or dismissed
    Closed,
    /// Pending, adjourned, or awaiting
    Pending,
    /// Any other reported status
    Active,
    /// No status reported
    Unknown,
}

impl StatusTone {
    pub fn classify(status: Option<&str>) -> StatusTone {
        let Some(status) = status else {
            return StatusTone::Unknown;
        };
        let s = status.to_lowercase();
        if ["disposed", "closed", "dismissed"].iter().any(|k| s.contains(k)) {
            StatusTone::Closed
        } else if ["pending", "adjourned", "awaiting"].iter().any(|k| s.contains(k)) {
            StatusTone::Pending
        } else {
            StatusTone::Active
        }
    }
}
