//! Prompt request: a use-case tag plus its parameters

use super::template::PromptTemplate;
use crate::core::court::CourtCode;
use crate::core::query::CaseQuery;
use crate::firm::AdvocateRoster;
use serde::{Deserialize, Serialize};

/// The three lookup use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UseCase {
    SingleCase,
    FirmList,
    LiveBoard,
}

impl UseCase {
    pub fn as_str(&self) -> &'static str {
        match self {
            UseCase::SingleCase => "single-case",
            UseCase::FirmList => "firm-list",
            UseCase::LiveBoard => "live-board",
        }
    }

    /// Whether this use case needs the higher-capability model
    pub fn is_deep_search(&self) -> bool {
        matches!(self, UseCase::FirmList)
    }
}

impl std::fmt::Display for UseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable request for one prompt, built fresh per call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptRequest {
    SingleCase(CaseQuery),
    FirmList(AdvocateRoster),
    LiveBoard(CourtCode),
}

impl PromptRequest {
    pub fn use_case(&self) -> UseCase {
        match self {
            PromptRequest::SingleCase(_) => UseCase::SingleCase,
            PromptRequest::FirmList(_) => UseCase::FirmList,
            PromptRequest::LiveBoard(_) => UseCase::LiveBoard,
        }
    }

    /// Render the prompt string
    pub fn build(&self) -> String {
        match self {
            PromptRequest::SingleCase(query) => PromptTemplate::single_case(query),
            PromptRequest::FirmList(roster) => PromptTemplate::firm_list(roster),
            PromptRequest::LiveBoard(court) => PromptTemplate::live_board(*court),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_use_case_tags() {
        assert_eq!(UseCase::SingleCase.to_string(), "single-case");
        assert_eq!(serde_json::to_string(&UseCase::FirmList).unwrap(), "\"firm-list\"");
        assert!(UseCase::FirmList.is_deep_search());
        assert!(!UseCase::LiveBoard.is_deep_search());
    }

    #[test]
    fn test_request_builds_matching_prompt() {
        let request = PromptRequest::SingleCase(CaseQuery::parse("WP 1234/2024").unwrap());
        assert_eq!(request.use_case(), UseCase::SingleCase);
        assert!(request.build().contains("WP 1234/2024"));

        let request = PromptRequest::FirmList(AdvocateRoster::default());
        assert!(request.build().contains("CASE_ITEM_START"));

        let request = PromptRequest::LiveBoard(CourtCode::Ap);
        assert_eq!(request.use_case(), UseCase::LiveBoard);
        assert!(request.build().contains("aphc.gov.in"));
    }
}
