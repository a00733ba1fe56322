//! Prompt templates for the three lookup use cases

use crate::core::court::CourtCode;
use crate::core::query::CaseQuery;
use crate::firm::AdvocateRoster;
use crate::parsing::layout::{FIRM_LIST_LAYOUT, SINGLE_CASE_LAYOUT};

/// Templates for generating grounded-search prompts
///
/// The caller is trusted: parameters are interpolated verbatim. Case queries
/// are already restricted by the allow-list at construction.
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt for a single case: search the three portals and echo a summary block
    pub fn single_case(query: &CaseQuery) -> String {
        format!(
            r#"Search e-Courts (services.ecourts.gov.in), aphc.gov.in, and tshc.gov.in for the specific case: {}.

Look for:
1. What was written in the 'Daily Order' or 'Proceedings' today.
2. The current status (Pending/Adjourned/Disposed).
3. The next hearing date.

Format exactly:
{}"#,
            query.as_str(),
            SINGLE_CASE_LAYOUT.template()
        )
    }

    /// Prompt for the firm-wide deep search: one item block per matching case
    pub fn firm_list(roster: &AdvocateRoster) -> String {
        format!(
            r#"Perform a deep search of Guntur District Courts, Andhra Pradesh High Court, and Telangana High Court for all cases handled by: {}.

I need to know the EXACT status today.
For every case found, provide:
{}"#,
            roster.joined(),
            FIRM_LIST_LAYOUT.template()
        )
    }

    /// Prompt for a jurisdiction's live display board (unstructured reply)
    pub fn live_board(court: CourtCode) -> String {
        format!(
            "Get the LIVE Display Board for {}. I need CH Number, Judge, and currently running Serial Number.",
            court.portal_host()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_case_embeds_query_and_markers() {
        let query = CaseQuery::parse("OS 45/2023 Guntur").unwrap();
        let prompt = PromptTemplate::single_case(&query);
        assert!(prompt.contains("OS 45/2023 Guntur"));
        assert!(prompt.contains("CASE_SUMMARY_START"));
        assert!(prompt.contains("CASE_SUMMARY_END"));
        for label in ["Case Number:", "Current Status:", "Next Hearing Date:", "Judge:", "Court:", "Stage:"] {
            assert!(prompt.contains(label), "missing label {label}");
        }
        assert!(prompt.contains("services.ecourts.gov.in"));
    }

    #[test]
    fn test_firm_list_embeds_joined_names() {
        let roster = AdvocateRoster::new(["A RAO (AR)", "B DEVI"]).unwrap();
        let prompt = PromptTemplate::firm_list(&roster);
        assert!(prompt.contains("handled by: A RAO (AR), B DEVI."));
        assert!(prompt.contains("CASE_ITEM_START"));
        assert!(prompt.contains("CASE_ITEM_END"));
        assert!(prompt.contains("TodayUpdate:"));
    }

    #[test]
    fn test_live_board_selects_portal() {
        assert!(PromptTemplate::live_board(CourtCode::Tg).contains("tshc.gov.in"));
        assert!(PromptTemplate::live_board(CourtCode::Ap).contains("aphc.gov.in"));
        assert!(!PromptTemplate::live_board(CourtCode::Ap).contains("tshc.gov.in"));
    }
}
