//! Track Case use case.
//!
//! Looks up one case (case number, CNR, or party name) across the e-Courts
//! and High Court portals and parses the summary block out of the reply.

use super::shared::{CASE_LOOKUP_FAILED, CASE_NOT_UPDATED, ask_grounded};
use crate::config::LookupParams;
use crate::ports::llm_gateway::GroundedSearchGateway;
use crate::ports::progress::{LookupProgressNotifier, NoProgress};
use courtwatch_domain::{
    CaseQuery, CaseStatusReport, CaseSummary, ModelReply, PromptRequest, SourceCitation,
    parse_case_summary, strip_summary_block,
};
use std::sync::Arc;

/// Use case for a single-case status lookup.
///
/// Never fails: a gateway error becomes a report whose reply carries
/// `is_error = true` and [`CASE_LOOKUP_FAILED`].
#[derive(Clone)]
pub struct TrackCaseUseCase {
    gateway: Arc<dyn GroundedSearchGateway>,
    params: LookupParams,
}

impl TrackCaseUseCase {
    pub fn new(gateway: Arc<dyn GroundedSearchGateway>, params: LookupParams) -> Self {
        Self { gateway, params }
    }

    pub async fn execute(&self, query: &CaseQuery) -> CaseStatusReport {
        self.execute_with_progress(query, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        query: &CaseQuery,
        progress: &dyn LookupProgressNotifier,
    ) -> CaseStatusReport {
        let request = PromptRequest::SingleCase(query.clone());
        let model = self.params.model_for(request.use_case());

        let reply = match ask_grounded(self.gateway.as_ref(), model, &request, progress).await {
            Ok(response) => ModelReply::success(
                response.non_empty_text().unwrap_or(CASE_NOT_UPDATED),
                SourceCitation::from_chunks(&response.chunks),
            ),
            Err(_) => ModelReply::fallback(CASE_LOOKUP_FAILED),
        };

        // Error replies carry a remediation message, not model output
        let (summary, commentary) = if reply.is_error {
            (CaseSummary::default(), String::new())
        } else {
            (parse_case_summary(&reply.text), strip_summary_block(&reply.text))
        };

        CaseStatusReport {
            query: query.clone(),
            reply,
            summary,
            commentary,
        }
    }
}
