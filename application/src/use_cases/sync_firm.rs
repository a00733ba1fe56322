//! Sync Firm use case.
//!
//! Deep search for every case handled by the firm's advocates, parsed into
//! one record per `CASE_ITEM` block.

use super::shared::{FIRM_SYNC_FAILED, ask_grounded};
use crate::config::LookupParams;
use crate::ports::llm_gateway::GroundedSearchGateway;
use crate::ports::progress::{LookupProgressNotifier, NoProgress};
use courtwatch_domain::{
    AdvocateRoster, FirmBriefing, PromptRequest, SourceCitation, parse_firm_cases,
};
use std::sync::Arc;
use tracing::info;

/// Use case for the firm-wide case list.
///
/// Never fails. The [`SyncOutcome`](courtwatch_domain::SyncOutcome) of the
/// briefing tells "no cases today" apart from "sync failed".
#[derive(Clone)]
pub struct SyncFirmUseCase {
    gateway: Arc<dyn GroundedSearchGateway>,
    params: LookupParams,
}

impl SyncFirmUseCase {
    pub fn new(gateway: Arc<dyn GroundedSearchGateway>, params: LookupParams) -> Self {
        Self { gateway, params }
    }

    pub async fn execute(&self, roster: &AdvocateRoster) -> FirmBriefing {
        self.execute_with_progress(roster, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        roster: &AdvocateRoster,
        progress: &dyn LookupProgressNotifier,
    ) -> FirmBriefing {
        let request = PromptRequest::FirmList(roster.clone());
        let model = self.params.model_for(request.use_case());

        match ask_grounded(self.gateway.as_ref(), model, &request, progress).await {
            Ok(response) => {
                let text = response.text.unwrap_or_default();
                let cases = parse_firm_cases(&text);
                info!(advocates = roster.len(), cases = cases.len(), "firm sync parsed");
                FirmBriefing::synced(cases, text, SourceCitation::from_chunks(&response.chunks))
            }
            Err(_) => FirmBriefing::failed(FIRM_SYNC_FAILED),
        }
    }
}
